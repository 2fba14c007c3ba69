//! Shortest-path metrics computed with a breadth-first search from every node.

use std::collections::VecDeque;

use crate::network::Network;

/// Distance metrics over every reachable, ordered pair of distinct nodes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathMetrics {
    /// Mean shortest-path length over reachable pairs, 0 if no pair is reachable.
    pub average_path_length: f64,
    /// Longest shortest-path length found.
    pub diameter: usize,
    /// A shortest path realising the diameter, from its far endpoint back to its source.
    pub diameter_path: Vec<usize>,
}

/// The result of a single-source breadth-first search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Search {
    /// Hop count to each node, `None` if unreachable.
    pub distances: Vec<Option<usize>>,
    /// The node each node was discovered from, `None` for the source and unreachable nodes.
    pub predecessors: Vec<Option<usize>>,
}

impl Search {
    /// Walks predecessor links from `target` back to the search source.
    ///
    /// The returned path starts with `target` and ends with the source. It's empty if `target`
    /// wasn't reached.
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        if !matches!(self.distances.get(target), Some(Some(_))) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(Some(previous)) = self.predecessors.get(current) {
            path.push(*previous);
            current = *previous;
        }

        path
    }
}

/// Runs a breadth-first search from `source`.
///
/// Neighbours are visited in ascending index order, so the discovery order (and thus the
/// predecessor chosen for each node) is deterministic.
///
/// # Examples
///
/// ```
/// use smallworld::{network::Network, paths::bfs};
///
/// let network = Network::from_edges(4, [(0, 1), (1, 2)]).unwrap();
/// let search = bfs(&network, 0);
///
/// assert_eq!(search.distances, vec![Some(0), Some(1), Some(2), None]);
/// assert_eq!(search.path_to(2), vec![2, 1, 0]);
/// ```
pub fn bfs(network: &Network, source: usize) -> Search {
    let n = network.size();
    let mut distances: Vec<Option<usize>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];

    if source >= n {
        return Search {
            distances,
            predecessors,
        };
    }

    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    distances[source] = Some(0);
    queue.push_back((source, 0));

    while let Some((current, distance)) = queue.pop_front() {
        for &next in network.neighbours(current) {
            if distances[next].is_none() {
                distances[next] = Some(distance + 1);
                predecessors[next] = Some(current);
                queue.push_back((next, distance + 1));
            }
        }
    }

    Search {
        distances,
        predecessors,
    }
}

/// Computes the average path length, the diameter and a diameter-defining path.
///
/// Unreachable pairs are ignored rather than counted as infinite. The diameter path comes from
/// the first `(source, target)` pair, scanning sources then targets in index order, whose distance
/// strictly exceeds every distance seen before it.
///
/// # Examples
///
/// ```
/// use smallworld::{network::Network, paths::path_metrics};
///
/// let network = Network::from_edges(3, [(0, 1), (1, 2)]).unwrap();
/// let metrics = path_metrics(&network);
///
/// assert_eq!(metrics.average_path_length, 8.0 / 6.0);
/// assert_eq!(metrics.diameter, 2);
/// assert_eq!(metrics.diameter_path, vec![2, 1, 0]);
/// ```
pub fn path_metrics(network: &Network) -> PathMetrics {
    let n = network.size();

    let mut total_path_length: u64 = 0;
    let mut reachable_pairs: u64 = 0;
    let mut diameter = 0;
    let mut diameter_path = Vec::new();

    for source in 0..n {
        let search = bfs(network, source);

        for (target, distance) in search.distances.iter().enumerate() {
            let Some(distance) = *distance else {
                continue;
            };
            if target == source {
                continue;
            }

            total_path_length += distance as u64;
            reachable_pairs += 1;

            if distance > diameter {
                diameter = distance;
                diameter_path = search.path_to(target);
            }
        }
    }

    let average_path_length = if reachable_pairs > 0 {
        total_path_length as f64 / reachable_pairs as f64
    } else {
        0.0
    };

    PathMetrics {
        average_path_length,
        diameter,
        diameter_path,
    }
}

/// Returns whether every node can reach every other node. The empty network is connected.
pub fn is_connected(network: &Network) -> bool {
    if network.is_empty() {
        return true;
    }

    bfs(network, 0).distances.iter().all(Option::is_some)
}
