//! Spectral community detection: Laplacian, embedding, k-means, label normalization.

use rand::Rng;
use tracing::{debug, warn};

use crate::{
    error::Result,
    kmeans::{normalize_labels, KMeans},
    network::Network,
    params::AnalysisConfig,
    spectral::embed,
};

/// The community of every node.
///
/// Assigned labels always form the dense range `0..count`, numbered in order of first appearance
/// by node index. When detection isn't possible every node is unassigned and `count` is 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommunityAssignment {
    labels: Vec<Option<usize>>,
    count: usize,
}

impl CommunityAssignment {
    /// Builds an assignment from raw cluster ids, normalizing them.
    ///
    /// # Examples
    ///
    /// ```
    /// use smallworld::community::CommunityAssignment;
    ///
    /// let communities = CommunityAssignment::from_raw(&[2, 2, 0]);
    /// assert_eq!(communities.label(2), Some(1));
    /// assert_eq!(communities.count(), 2);
    /// ```
    pub fn from_raw(raw: &[usize]) -> Self {
        let (labels, count) = normalize_labels(raw);

        Self {
            labels: labels.into_iter().map(Some).collect(),
            count,
        }
    }

    /// An assignment of `n` nodes with no community.
    pub fn unassigned(n: usize) -> Self {
        Self {
            labels: vec![None; n],
            count: 0,
        }
    }

    /// Returns the label of each node, in node order.
    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels
    }

    /// Returns the community of a node, `None` if unassigned or unknown.
    pub fn label(&self, node: usize) -> Option<usize> {
        self.labels.get(node).copied().flatten()
    }

    /// Returns the number of distinct communities.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns whether no node has a community.
    pub fn is_unassigned(&self) -> bool {
        self.count == 0
    }

    /// Returns the members of each community, indexed by label.
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut members = vec![Vec::new(); self.count];
        for (node, label) in self.labels.iter().enumerate() {
            if let Some(label) = label {
                members[*label].push(node);
            }
        }

        members
    }
}

/// Partitions the network into communities via the spectral embedding of its Laplacian.
///
/// At most `config.communities` communities are produced, fewer if the network has fewer nodes or
/// k-means leaves clusters empty.
pub fn detect_communities<R: Rng + ?Sized>(
    network: &Network,
    config: &AnalysisConfig,
    rng: &mut R,
) -> Result<CommunityAssignment> {
    let points = embed(&network.laplacian_matrix(), config.dimensions)?;
    let k = config.communities.min(points.len());

    let fit = KMeans::new(k)
        .with_max_iterations(config.max_iterations)
        .fit(&points, rng)?;
    let communities = CommunityAssignment::from_raw(&fit.labels);

    debug!(
        requested = config.communities,
        found = communities.count(),
        iterations = fit.iterations,
        converged = fit.converged,
        "detected communities"
    );

    Ok(communities)
}

/// Runs [`detect_communities`], degrading any failure to [`CommunityAssignment::unassigned`].
pub fn communities_or_unassigned<R: Rng + ?Sized>(
    network: &Network,
    config: &AnalysisConfig,
    rng: &mut R,
) -> CommunityAssignment {
    match detect_communities(network, config, rng) {
        Ok(communities) => communities,
        Err(error) => {
            warn!(%error, n = network.size(), "community detection failed, leaving nodes unassigned");
            CommunityAssignment::unassigned(network.size())
        }
    }
}
