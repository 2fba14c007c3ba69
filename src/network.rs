//! A module for working with networks.

use std::ops::Sub;

use nalgebra::{DMatrix, DVector};

use crate::{
    edge::Edge,
    error::{Error, Result},
};

/// An undirected, simple, unweighted network over nodes `0..n`.
///
/// The adjacency relation is symmetric and has no self-loops. A `Network` is never mutated once
/// built, a regeneration produces a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    /// Symmetric adjacency relation with an empty diagonal.
    adjacency: DMatrix<bool>,
    /// Neighbour lists in ascending index order, derived from `adjacency`.
    neighbours: Vec<Vec<usize>>,
}

impl Network {
    /// Creates a network of `n` isolated nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use smallworld::network::Network;
    ///
    /// let network = Network::empty(3);
    /// assert_eq!(network.size(), 3);
    /// assert_eq!(network.edge_count(), 0);
    /// ```
    pub fn empty(n: usize) -> Self {
        Self::from_adjacency(DMatrix::from_element(n, n, false))
    }

    /// Creates a network of `n` nodes from a list of `(source, target)` pairs.
    ///
    /// Duplicate edges collapse into one. Self-loops and endpoints outside `0..n` are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use smallworld::network::Network;
    ///
    /// let network = Network::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert!(network.is_adjacent(2, 1));
    /// assert!(!network.is_adjacent(0, 2));
    /// ```
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut adjacency = DMatrix::from_element(n, n, false);

        for (source, target) in edges {
            let edge = Edge::new(source, target);
            let (i, j) = edge.ordered();

            if j >= n {
                return Err(Error::NodeOutOfRange { node: j, size: n });
            }
            if edge.is_loop() {
                return Err(Error::SelfLoop { node: i });
            }

            adjacency[(i, j)] = true;
            adjacency[(j, i)] = true;
        }

        Ok(Self::from_adjacency(adjacency))
    }

    /// Wraps an adjacency matrix the caller guarantees is square, symmetric and loop-free.
    pub(crate) fn from_adjacency(adjacency: DMatrix<bool>) -> Self {
        debug_assert!(adjacency.is_square());
        debug_assert!(adjacency == adjacency.transpose());
        debug_assert!(adjacency.diagonal().iter().all(|a| !a));

        let neighbours = adjacency
            .row_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &adjacent)| adjacent)
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();

        Self {
            adjacency,
            neighbours,
        }
    }

    /// Returns the node count.
    pub fn size(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns whether the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Returns the read-only adjacency relation.
    pub fn adjacency(&self) -> &DMatrix<bool> {
        &self.adjacency
    }

    /// Returns whether `i` and `j` are connected. Nodes outside the network are never adjacent.
    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        self.adjacency.get((i, j)).copied().unwrap_or(false)
    }

    /// Returns the neighbours of a node in ascending order, empty for unknown nodes.
    pub fn neighbours(&self, node: usize) -> &[usize] {
        self.neighbours.get(node).map_or(&[], Vec::as_slice)
    }

    /// Returns the degree of a node.
    pub fn degree(&self, node: usize) -> usize {
        self.neighbours(node).len()
    }

    /// Returns the degree of every node, in index order.
    pub fn degrees(&self) -> Vec<usize> {
        self.neighbours.iter().map(Vec::len).collect()
    }

    /// Returns the edge count of the network.
    pub fn edge_count(&self) -> usize {
        self.neighbours.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns every edge once, with `source < target`, sorted.
    pub fn edges(&self) -> Vec<Edge> {
        self.neighbours
            .iter()
            .enumerate()
            .flat_map(|(i, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |&&j| i < j)
                    .map(move |&j| Edge::new(i, j))
            })
            .collect()
    }

    /// Computes the density of the network, the ratio of edges with respect to the maximum
    /// possible edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use smallworld::network::Network;
    ///
    /// let network = Network::from_edges(3, [(0, 1)]).unwrap();
    /// assert_eq!(network.density(), 1.0 / 3.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.size() as f64;
        let ec = self.edge_count() as f64;

        // Calculate the total number of possible edges given a vertex count.
        let pec = vc * (vc - 1.0) / 2.0;
        // Actual edges divided by the possible edges gives the density.
        ec / pec
    }

    /// Constructs the 0/1 adjacency matrix for this network.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use smallworld::network::Network;
    ///
    /// let network = Network::from_edges(2, [(0, 1)]).unwrap();
    /// assert_eq!(
    ///     network.adjacency_matrix(),
    ///     dmatrix![0.0, 1.0;
    ///              1.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&self) -> DMatrix<f64> {
        self.adjacency.map(|adjacent| if adjacent { 1.0 } else { 0.0 })
    }

    /// Constructs the degree matrix for this network.
    pub fn degree_matrix(&self) -> DMatrix<f64> {
        let degrees = DVector::from_iterator(
            self.size(),
            self.neighbours.iter().map(|n| n.len() as f64),
        );

        DMatrix::from_diagonal(&degrees)
    }

    /// Constructs the laplacian matrix for this network, `L = D - A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use smallworld::network::Network;
    ///
    /// let network = Network::from_edges(3, [(0, 1), (0, 2)]).unwrap();
    /// assert_eq!(
    ///     network.laplacian_matrix(),
    ///     dmatrix![2.0, -1.0, -1.0;
    ///              -1.0, 1.0, 0.0;
    ///              -1.0, 0.0, 1.0]
    /// );
    /// ```
    pub fn laplacian_matrix(&self) -> DMatrix<f64> {
        self.degree_matrix().sub(&self.adjacency_matrix())
    }
}
