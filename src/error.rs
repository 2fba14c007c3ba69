//! Errors returned by network construction and analysis.

/// Result alias for `smallworld`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by generation, embedding and clustering primitives.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A generation or analysis parameter is outside its valid range.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// An edge references a node that doesn't exist.
    #[error("node {node} is out of range for a network of {size} nodes")]
    NodeOutOfRange {
        /// The offending node index.
        node: usize,
        /// Number of nodes in the network.
        size: usize,
    },

    /// An edge connects a node to itself.
    #[error("self-loop on node {node}")]
    SelfLoop {
        /// The offending node index.
        node: usize,
    },

    /// Input was empty.
    #[error("empty input provided")]
    EmptyInput,

    /// Point dimensions disagree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// More clusters were requested than there are points, or zero clusters.
    #[error("cannot create {requested} clusters from {points} points")]
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of points.
        points: usize,
    },

    /// The Laplacian has no non-trivial eigenvector to embed with.
    #[error("laplacian of size {size} has no non-trivial eigenvector")]
    DegenerateSpectrum {
        /// Matrix dimension.
        size: usize,
    },

    /// The symmetric eigen solver did not converge.
    #[error("eigendecomposition did not converge after {iterations} iterations")]
    EigenDecomposition {
        /// Iteration cap handed to the solver.
        iterations: usize,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}
