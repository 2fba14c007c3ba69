//! Local and global clustering coefficients.

use crate::network::Network;

/// Returns the local clustering coefficient of every node.
///
/// For a node with neighbourhood `Nb` of size `d`, this is `2 * |edges within Nb| / (d * (d - 1))`.
/// Nodes with fewer than two neighbours have a coefficient of 0.
pub fn local_clustering(network: &Network) -> Vec<f64> {
    (0..network.size())
        .map(|node| {
            let neighbours = network.neighbours(node);
            let degree = neighbours.len();

            if degree < 2 {
                return 0.0;
            }

            let links = neighbours
                .iter()
                .enumerate()
                .flat_map(move |(a, &u)| neighbours[a + 1..].iter().map(move |&v| (u, v)))
                .filter(|&(u, v)| network.is_adjacent(u, v))
                .count();

            (2 * links) as f64 / (degree * (degree - 1)) as f64
        })
        .collect()
}

/// Returns the mean local clustering coefficient over all nodes, 0 for the empty network.
///
/// Nodes with fewer than two neighbours contribute 0 and still count towards the mean.
///
/// # Examples
///
/// ```
/// use smallworld::{clustering::clustering_coefficient, network::Network};
///
/// let triangle = Network::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
/// assert_eq!(clustering_coefficient(&triangle), 1.0);
/// ```
pub fn clustering_coefficient(network: &Network) -> f64 {
    if network.is_empty() {
        return 0.0;
    }

    local_clustering(network).iter().sum::<f64>() / network.size() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ring_lattice;

    #[test]
    fn clique() {
        let network =
            Network::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();

        assert_eq!(clustering_coefficient(&network), 1.0);
    }

    #[test]
    fn path() {
        let network = Network::from_edges(3, [(0, 1), (1, 2)]).unwrap();

        assert_eq!(local_clustering(&network), vec![0.0, 0.0, 0.0]);
        assert_eq!(clustering_coefficient(&network), 0.0);
    }

    #[test]
    fn empty() {
        assert_eq!(clustering_coefficient(&Network::empty(0)), 0.0);
        assert_eq!(clustering_coefficient(&Network::empty(5)), 0.0);
    }

    #[test]
    fn low_degree_nodes_stay_in_the_denominator() {
        // A triangle plus a pendant node hanging off node 0.
        let network = Network::from_edges(4, [(0, 1), (1, 2), (2, 0), (0, 3)]).unwrap();

        assert_eq!(local_clustering(&network), vec![1.0 / 3.0, 1.0, 1.0, 0.0]);
        assert_eq!(
            clustering_coefficient(&network),
            (1.0 / 3.0 + 1.0 + 1.0) / 4.0
        );
    }

    #[test]
    fn ring_lattice_coefficient() {
        // For a ring lattice of mean degree k the coefficient is 3(k - 2) / 4(k - 1).
        let coefficient = clustering_coefficient(&ring_lattice(20, 4));

        assert!((coefficient - 0.5).abs() < 1e-12);
    }
}
