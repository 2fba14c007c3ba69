//! The analysis pipeline and the engine that keeps the latest result.

use nalgebra::DMatrix;
use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    clustering::clustering_coefficient,
    community::{communities_or_unassigned, CommunityAssignment},
    error::Result,
    generator::watts_strogatz,
    network::Network,
    params::{AnalysisConfig, GenerationParameters},
    paths::{path_metrics, PathMetrics},
    random::seeded,
};

/// A network together with everything derived from it.
///
/// All fields are computed from the same network in one go and never updated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    network: Network,
    metrics: PathMetrics,
    clustering_coefficient: f64,
    communities: CommunityAssignment,
}

impl Analysis {
    /// Returns the analysed network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Returns the path metrics.
    pub fn metrics(&self) -> &PathMetrics {
        &self.metrics
    }

    /// Returns the mean local clustering coefficient.
    pub fn clustering_coefficient(&self) -> f64 {
        self.clustering_coefficient
    }

    /// Returns the community assignment, possibly unassigned.
    pub fn communities(&self) -> &CommunityAssignment {
        &self.communities
    }

    /// Consumes the analysis, returning the network.
    pub fn into_network(self) -> Network {
        self.network
    }
}

/// Analyses a network with the default [`AnalysisConfig`].
///
/// Path metrics and the clustering coefficient are always produced. Community detection draws
/// from `rng` and falls back to an unassigned labelling if it fails.
///
/// # Examples
///
/// ```
/// use smallworld::{analysis::analyze, generator::ring_lattice, random::seeded};
///
/// let analysis = analyze(ring_lattice(12, 4), &mut seeded(Some(0)));
///
/// assert_eq!(analysis.metrics().diameter, 3);
/// assert_eq!(analysis.clustering_coefficient(), 0.5);
/// ```
pub fn analyze<R: Rng + ?Sized>(network: Network, rng: &mut R) -> Analysis {
    analyze_with(network, &AnalysisConfig::default(), rng)
}

/// Analyses a network with an explicit configuration.
pub fn analyze_with<R: Rng + ?Sized>(
    network: Network,
    config: &AnalysisConfig,
    rng: &mut R,
) -> Analysis {
    let metrics = path_metrics(&network);
    let clustering_coefficient = clustering_coefficient(&network);
    let communities = communities_or_unassigned(&network, config, rng);

    debug!(
        n = network.size(),
        edges = network.edge_count(),
        average_path_length = metrics.average_path_length,
        diameter = metrics.diameter,
        clustering_coefficient,
        communities = communities.count(),
        "analysed network"
    );

    Analysis {
        network,
        metrics,
        clustering_coefficient,
        communities,
    }
}

/// Generates Watts-Strogatz networks on demand and holds the analysis of the latest one.
///
/// Regeneration is all-or-nothing: the held analysis is only replaced once a new network and
/// all of its derived data have been computed.
#[derive(Clone, Debug)]
pub struct SmallWorld {
    params: GenerationParameters,
    seed: Option<u64>,
    config: AnalysisConfig,
    analysis: Analysis,
}

impl SmallWorld {
    /// Generates and analyses a first network.
    ///
    /// # Examples
    ///
    /// ```
    /// use smallworld::{analysis::SmallWorld, params::GenerationParameters};
    ///
    /// let world = SmallWorld::new(GenerationParameters::default(), Some(7)).unwrap();
    /// assert_eq!(world.size(), 20);
    /// ```
    pub fn new(params: GenerationParameters, seed: Option<u64>) -> Result<Self> {
        Self::with_config(params, seed, AnalysisConfig::default())
    }

    /// Generates and analyses a first network with an explicit analysis configuration.
    pub fn with_config(
        params: GenerationParameters,
        seed: Option<u64>,
        config: AnalysisConfig,
    ) -> Result<Self> {
        let analysis = build(&params, seed, &config)?;

        Ok(Self {
            params,
            seed,
            config,
            analysis,
        })
    }

    /// Rebuilds the network and all derived state.
    ///
    /// On error, invalid parameters for instance, the previous network and its analysis are kept.
    #[instrument(skip(self))]
    pub fn regenerate(&mut self, n: usize, k: usize, p: f64, seed: Option<u64>) -> Result<()> {
        let params = GenerationParameters::new(n, k, p);
        let analysis = build(&params, seed, &self.config)?;

        self.params = params;
        self.seed = seed;
        self.analysis = analysis;

        Ok(())
    }

    /// Returns the read-only adjacency relation of the current network.
    pub fn adjacency(&self) -> &DMatrix<bool> {
        self.analysis.network().adjacency()
    }

    /// Returns the node count of the current network.
    pub fn size(&self) -> usize {
        self.analysis.network().size()
    }

    /// Returns the path metrics of the current network.
    pub fn metrics(&self) -> &PathMetrics {
        self.analysis.metrics()
    }

    /// Returns the clustering coefficient of the current network.
    pub fn clustering_coefficient(&self) -> f64 {
        self.analysis.clustering_coefficient()
    }

    /// Returns the communities of the current network.
    pub fn communities(&self) -> &CommunityAssignment {
        self.analysis.communities()
    }

    /// Returns the full analysis of the current network.
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Returns the parameters the current network was generated from.
    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    /// Returns the seed the current network was generated from, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Generation and analysis share one random stream, so a seed determines both.
fn build(
    params: &GenerationParameters,
    seed: Option<u64>,
    config: &AnalysisConfig,
) -> Result<Analysis> {
    let mut rng = seeded(seed);
    let network = watts_strogatz(params, &mut rng)?;

    Ok(analyze_with(network, config, &mut rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, generator::ring_lattice};

    #[test]
    fn analysis_matches_its_network() {
        let network = Network::from_edges(4, [(0, 1)]).unwrap();
        let analysis = analyze(network.clone(), &mut seeded(Some(0)));

        assert_eq!(analysis.network(), &network);
        assert_eq!(analysis.metrics().average_path_length, 1.0);
        assert_eq!(analysis.metrics().diameter, 1);
        assert_eq!(analysis.clustering_coefficient(), 0.0);
        assert_eq!(analysis.communities().labels().len(), 4);
        assert_eq!(analysis.into_network(), network);
    }

    #[test]
    fn single_node_has_metrics_but_no_communities() {
        let analysis = analyze(Network::empty(1), &mut seeded(Some(0)));

        assert_eq!(analysis.metrics(), &PathMetrics::default());
        assert_eq!(analysis.clustering_coefficient(), 0.0);
        assert_eq!(analysis.communities(), &CommunityAssignment::unassigned(1));
    }

    #[test]
    fn engine_exposes_the_current_network() {
        let world = SmallWorld::new(GenerationParameters::new(16, 4, 0.0), Some(2)).unwrap();

        assert_eq!(world.size(), 16);
        assert_eq!(world.adjacency(), ring_lattice(16, 4).adjacency());
        assert_eq!(world.seed(), Some(2));
        assert_eq!(world.params(), &GenerationParameters::new(16, 4, 0.0));
        assert!(world.communities().count() <= 4);
    }

    #[test]
    fn regenerate_replaces_everything() {
        let mut world = SmallWorld::new(GenerationParameters::new(10, 2, 0.0), Some(1)).unwrap();
        world.regenerate(30, 6, 0.3, Some(4)).unwrap();

        assert_eq!(world.size(), 30);
        assert_eq!(world.communities().labels().len(), 30);
        assert_eq!(world.analysis().network().edge_count(), 90);
        assert_eq!(world.metrics(), &path_metrics(world.analysis().network()));
        assert_eq!(
            world.clustering_coefficient(),
            clustering_coefficient(world.analysis().network())
        );
    }

    #[test]
    fn failed_regeneration_keeps_previous_state() {
        let mut world = SmallWorld::new(GenerationParameters::new(12, 4, 0.2), Some(5)).unwrap();
        let before = world.analysis().clone();

        assert!(matches!(
            world.regenerate(12, 3, 0.2, Some(6)),
            Err(Error::InvalidParameter { name: "k", .. })
        ));
        assert_eq!(world.analysis(), &before);
        assert_eq!(world.params(), &GenerationParameters::new(12, 4, 0.2));
        assert_eq!(world.seed(), Some(5));
    }

    #[test]
    fn invalid_initial_parameters() {
        assert!(SmallWorld::new(GenerationParameters::new(4, 4, 0.0), None).is_err());
    }
}
