//! A module for working with edges.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// A pair of node indices representing an undirected edge. Edges don't have a direction, despite
/// the `source`-`target` nomenclature used.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates a new edge from two nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use smallworld::edge::Edge;
    ///
    /// let edge = Edge::new(0, 1);
    /// assert_eq!(edge, Edge::new(1, 0));
    /// ```
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns the first node forming the edge.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the second node forming the edge.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the endpoints ordered so that the lower index comes first.
    ///
    /// # Examples
    ///
    /// ```
    /// use smallworld::edge::Edge;
    ///
    /// assert_eq!(Edge::new(3, 1).ordered(), (1, 3));
    /// ```
    pub fn ordered(&self) -> (usize, usize) {
        match self.source.cmp(&self.target) {
            Ordering::Greater => (self.target, self.source),
            _ => (self.source, self.target),
        }
    }

    /// Returns whether the edge contains the given node.
    pub fn contains(&self, node: usize) -> bool {
        self.source == node || self.target == node
    }

    /// Returns whether both endpoints are the same node.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

//
// Trait implementations
//

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // This ensures the hash is the same for (a, b) as it is for (b, a).
        self.ordered().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        assert_eq!(
            Edge::new(0, 1),
            Edge {
                source: 0,
                target: 1
            }
        )
    }

    #[test]
    fn source_and_target() {
        let edge = Edge::new(4, 2);

        assert_eq!(edge.source(), 4);
        assert_eq!(edge.target(), 2);
        assert_eq!(edge.ordered(), (2, 4));
    }

    #[test]
    fn contains() {
        let edge = Edge::new(0, 1);

        assert!(edge.contains(0));
        assert!(edge.contains(1));
        assert!(!edge.contains(2));
    }

    #[test]
    fn is_loop() {
        assert!(Edge::new(3, 3).is_loop());
        assert!(!Edge::new(3, 4).is_loop());
    }

    //
    // Trait implementations
    //

    #[test]
    fn partial_eq() {
        assert_eq!(Edge::new(0, 1), Edge::new(0, 1));
        assert_eq!(Edge::new(0, 1), Edge::new(1, 0));
        assert_ne!(Edge::new(0, 1), Edge::new(0, 2));
    }

    #[test]
    fn hash() {
        use std::collections::hash_map::DefaultHasher;

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();

        let k1 = Edge::new(0, 1);
        let k2 = Edge::new(1, 0);

        k1.hash(&mut h1);
        k2.hash(&mut h2);

        // Verify k1 == k2 => hash(k1) == hash(k2).
        assert_eq!(h1.finish(), h2.finish());
    }
}
