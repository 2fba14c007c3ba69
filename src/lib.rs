//! Smallworld generates Watts-Strogatz small-world networks and analyses them: average
//! shortest-path length, diameter, clustering coefficient and spectral community detection.
//!
//! # Basic usage
//!
//! The library is centered around the [`SmallWorld`](analysis::SmallWorld) engine, which holds
//! the latest generated [`Network`](network::Network) together with its
//! [`Analysis`](analysis::Analysis). Every regeneration replaces both at once.
//!
//! ```rust
//! use smallworld::{analysis::SmallWorld, params::GenerationParameters};
//!
//! // A ring lattice of 20 nodes, each connected to its 4 nearest neighbours.
//! let mut world = SmallWorld::new(GenerationParameters::new(20, 4, 0.0), Some(42)).unwrap();
//! assert_eq!(world.metrics().diameter, 5);
//! assert_eq!(world.clustering_coefficient(), 0.5);
//!
//! // Rewire a tenth of the edges, the same seed always yields the same network.
//! world.regenerate(20, 4, 0.1, Some(42)).unwrap();
//! let communities = world.communities();
//! assert!(communities.count() <= 4);
//!
//! // Matrices can be pretty printed...
//! println!("{}", world.analysis().network().laplacian_matrix());
//! ```
//!
//! The individual steps are also available on their own: [`generator::watts_strogatz`],
//! [`paths::path_metrics`], [`clustering::clustering_coefficient`], [`spectral::embed`] and
//! [`kmeans::KMeans`].

pub mod analysis;
pub mod clustering;
pub mod community;
pub mod edge;
pub mod error;
pub mod generator;
pub mod kmeans;
pub mod network;
pub mod params;
pub mod paths;
pub mod random;
pub mod spectral;

pub use analysis::{analyze, Analysis, SmallWorld};
pub use error::{Error, Result};
pub use network::Network;
pub use params::GenerationParameters;
