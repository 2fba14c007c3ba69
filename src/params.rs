//! Generation parameters and analysis configuration.

use crate::error::{Error, Result};

/// Upper bound on the node count accepted by [`GenerationParameters::validate`].
///
/// All-pairs BFS is quadratic and the dense eigendecomposition cubic in the node count, past this
/// size a single regeneration stops being interactive.
pub const MAX_NODES: usize = 2048;

/// Default node count.
pub const DEFAULT_NODES: usize = 20;
/// Default mean degree.
pub const DEFAULT_MEAN_DEGREE: usize = 4;
/// Default rewiring probability, a pure ring lattice.
pub const DEFAULT_REWIRING: f64 = 0.0;

/// Number of communities the spectral partitioning targets by default.
pub const DEFAULT_COMMUNITIES: usize = 4;
/// Dimension of the spectral embedding by default.
pub const DEFAULT_DIMENSIONS: usize = 4;
/// Iteration cap for k-means by default.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// The `(n, k, p)` triple describing a Watts-Strogatz network.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationParameters {
    /// Node count.
    pub n: usize,
    /// Mean degree, even, `2 <= k < n`.
    pub k: usize,
    /// Rewiring probability in `[0, 1]`.
    pub p: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            n: DEFAULT_NODES,
            k: DEFAULT_MEAN_DEGREE,
            p: DEFAULT_REWIRING,
        }
    }
}

impl GenerationParameters {
    /// Creates a parameter set, no validation is performed until [`validate`](Self::validate).
    pub fn new(n: usize, k: usize, p: f64) -> Self {
        Self { n, k, p }
    }

    /// Checks the parameters describe a network the generator can build.
    ///
    /// Values are never adjusted, an out-of-range value is reported as
    /// [`Error::InvalidParameter`].
    ///
    /// # Examples
    ///
    /// ```
    /// use smallworld::params::GenerationParameters;
    ///
    /// assert!(GenerationParameters::new(20, 4, 0.1).validate().is_ok());
    /// assert!(GenerationParameters::new(20, 3, 0.1).validate().is_err());
    /// assert!(GenerationParameters::new(4, 4, 0.1).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.n > MAX_NODES {
            return Err(Error::invalid(
                "n",
                format!("{} nodes exceeds the limit of {MAX_NODES}", self.n),
            ));
        }
        if self.k < 2 {
            return Err(Error::invalid("k", format!("{} is less than 2", self.k)));
        }
        if self.k % 2 != 0 {
            return Err(Error::invalid("k", format!("{} is odd", self.k)));
        }
        if self.k >= self.n {
            return Err(Error::invalid(
                "k",
                format!("{} must be less than the node count {}", self.k, self.n),
            ));
        }
        if !(0.0..=1.0).contains(&self.p) {
            return Err(Error::invalid("p", format!("{} is outside [0, 1]", self.p)));
        }

        Ok(())
    }
}

/// Knobs of the spectral community detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Number of k-means clusters.
    pub communities: usize,
    /// Number of non-trivial eigenvectors used for the embedding.
    pub dimensions: usize,
    /// k-means iteration cap.
    pub max_iterations: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            communities: DEFAULT_COMMUNITIES,
            dimensions: DEFAULT_DIMENSIONS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl AnalysisConfig {
    /// Sets the number of communities.
    pub fn with_communities(mut self, communities: usize) -> Self {
        self.communities = communities;
        self
    }

    /// Sets the embedding dimension.
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Sets the k-means iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
