//! Watts-Strogatz network generation.
//!
//! A ring lattice is built first: every node is connected to its `k / 2` nearest neighbours on
//! each side of a circular ordering. Each "forward" lattice edge `(i, i + j)` is then rewired with
//! probability `p` to a uniformly chosen node `i` isn't yet connected to.

use nalgebra::DMatrix;
use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{error::Result, network::Network, params::GenerationParameters};

/// Builds the canonical ring lattice of `n` nodes with mean degree `k`.
///
/// The caller is responsible for `k` being even and less than `n`; a larger `k` saturates to the
/// complete graph.
///
/// # Examples
///
/// ```
/// use smallworld::generator::ring_lattice;
///
/// let lattice = ring_lattice(6, 2);
/// assert!(lattice.is_adjacent(0, 5));
/// assert!(lattice.degrees().iter().all(|d| *d == 2));
/// ```
pub fn ring_lattice(n: usize, k: usize) -> Network {
    Network::from_adjacency(lattice_adjacency(n, k))
}

/// Generates a Watts-Strogatz small-world network.
///
/// The parameters are validated first and nothing is drawn from `rng` if they're rejected. Given
/// the same stream of random values the generated network is always the same.
///
/// # Examples
///
/// ```
/// use smallworld::{generator::watts_strogatz, params::GenerationParameters, random::seeded};
///
/// let params = GenerationParameters::new(30, 4, 0.2);
/// let a = watts_strogatz(&params, &mut seeded(Some(1))).unwrap();
/// let b = watts_strogatz(&params, &mut seeded(Some(1))).unwrap();
///
/// assert_eq!(a, b);
/// assert_eq!(a.edge_count(), 60);
/// ```
pub fn watts_strogatz<R: Rng + ?Sized>(
    params: &GenerationParameters,
    rng: &mut R,
) -> Result<Network> {
    params.validate()?;

    let GenerationParameters { n, k, p } = *params;
    let mut adjacency = lattice_adjacency(n, k);

    let mut rewired = 0usize;
    let mut skipped = 0usize;

    for i in 0..n {
        for j in 1..=k / 2 {
            let old_target = (i + j) % n;

            // A draw is made for every lattice edge, keeping the stream aligned across values of p.
            if rng.gen::<f64>() >= p {
                continue;
            }

            match rewire_target(&adjacency, i, rng) {
                Some(new_target) if adjacency[(i, old_target)] => {
                    adjacency[(i, old_target)] = false;
                    adjacency[(old_target, i)] = false;
                    adjacency[(i, new_target)] = true;
                    adjacency[(new_target, i)] = true;
                    rewired += 1;
                }
                _ => skipped += 1,
            }
        }
    }

    debug!(n, k, p, rewired, skipped, "generated watts-strogatz network");

    Ok(Network::from_adjacency(adjacency))
}

//
// Helpers
//

fn lattice_adjacency(n: usize, k: usize) -> DMatrix<bool> {
    let mut adjacency = DMatrix::from_element(n, n, false);

    for i in 0..n {
        for j in 1..=k / 2 {
            let neighbour = (i + j) % n;
            if neighbour != i {
                adjacency[(i, neighbour)] = true;
                adjacency[(neighbour, i)] = true;
            }
        }
    }

    adjacency
}

/// Picks a node uniformly among those that are neither `node` nor adjacent to it.
///
/// Sampling is done over the enumerated candidate set rather than by redrawing until a valid node
/// turns up, so a saturated node yields `None` instead of spinning forever.
fn rewire_target<R: Rng + ?Sized>(
    adjacency: &DMatrix<bool>,
    node: usize,
    rng: &mut R,
) -> Option<usize> {
    let candidates: Vec<usize> = adjacency
        .row(node)
        .iter()
        .enumerate()
        .filter(|(candidate, &adjacent)| *candidate != node && !adjacent)
        .map(|(candidate, _)| candidate)
        .collect();

    candidates.choose(rng).copied()
}
