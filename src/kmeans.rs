//! K-means partitioning of embedded points.
//!
//! Lloyd's algorithm: centroids start at `k` distinct input points drawn uniformly without
//! replacement, then each pass assigns every point to its nearest centroid and moves every
//! centroid to the mean of its members. The loop stops once a pass changes no assignment, or
//! after `max_iterations` passes.
//!
//! A centroid left without members keeps its previous position, it is never reseeded, so its
//! label stays put between passes.

use std::collections::HashMap;

use rand::{seq::index, Rng};
use tracing::debug;

use crate::{
    error::{Error, Result},
    params::DEFAULT_MAX_ITERATIONS,
};

/// K-means configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KMeans {
    /// Number of clusters.
    k: usize,
    /// Maximum number of assignment/update passes.
    max_iterations: usize,
}

/// The outcome of a k-means run.
#[derive(Clone, Debug, PartialEq)]
pub struct KMeansFit {
    /// Raw cluster index of each point, in `0..k`.
    pub labels: Vec<usize>,
    /// Final centroid positions.
    pub centroids: Vec<Vec<f64>>,
    /// Number of passes run.
    pub iterations: usize,
    /// Whether the last pass left every assignment unchanged.
    pub converged: bool,
}

impl KMeans {
    /// Creates a k-means partitioner for `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the maximum number of passes.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Partitions `points` into `k` clusters.
    ///
    /// # Examples
    ///
    /// ```
    /// use smallworld::{kmeans::KMeans, random::seeded};
    ///
    /// let points = vec![vec![0.0], vec![0.1], vec![10.0], vec![10.1]];
    /// let fit = KMeans::new(2).fit(&points, &mut seeded(Some(1))).unwrap();
    ///
    /// assert!(fit.converged);
    /// assert_eq!(fit.labels[0], fit.labels[1]);
    /// assert_eq!(fit.labels[2], fit.labels[3]);
    /// assert_ne!(fit.labels[0], fit.labels[2]);
    /// ```
    pub fn fit<R: Rng + ?Sized>(&self, points: &[Vec<f64>], rng: &mut R) -> Result<KMeansFit> {
        let n = points.len();
        let Some(first) = points.first() else {
            return Err(Error::EmptyInput);
        };
        let dimensions = first.len();

        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                points: n,
            });
        }
        if let Some(point) = points.iter().find(|point| point.len() != dimensions) {
            return Err(Error::DimensionMismatch {
                expected: dimensions,
                found: point.len(),
            });
        }

        let mut centroids: Vec<Vec<f64>> = index::sample(rng, n, self.k)
            .iter()
            .map(|i| points[i].clone())
            .collect();

        // Empty until the first pass so that pass always counts as a change.
        let mut labels: Vec<usize> = Vec::new();
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            let assignments: Vec<usize> = points
                .iter()
                .map(|point| nearest(point, &centroids))
                .collect();

            if assignments == labels {
                converged = true;
                break;
            }
            labels = assignments;

            update_centroids(points, &labels, &mut centroids);
        }

        debug!(k = self.k, n, iterations, converged, "k-means finished");

        // A zero iteration cap still yields a labelling against the initial centroids.
        if labels.is_empty() {
            labels = points
                .iter()
                .map(|point| nearest(point, &centroids))
                .collect();
        }

        Ok(KMeansFit {
            labels,
            centroids,
            iterations,
            converged,
        })
    }
}

/// Relabels raw cluster ids to `0..count` in order of first appearance, returning the new labels
/// and `count`.
///
/// # Examples
///
/// ```
/// use smallworld::kmeans::normalize_labels;
///
/// assert_eq!(normalize_labels(&[3, 3, 0, 7, 0]), (vec![0, 0, 1, 2, 1], 3));
/// ```
pub fn normalize_labels(labels: &[usize]) -> (Vec<usize>, usize) {
    let mut remap: HashMap<usize, usize> = HashMap::new();

    let normalized = labels
        .iter()
        .map(|label| {
            let next = remap.len();
            *remap.entry(*label).or_insert(next)
        })
        .collect();

    (normalized, remap.len())
}

/// Euclidean distance between two points of the same dimension.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

//
// Helpers
//

/// Index of the nearest centroid, the lowest index wins ties.
fn nearest(point: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;

    for (i, centroid) in centroids.iter().enumerate() {
        let distance = euclidean_distance(point, centroid);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }

    best
}

fn update_centroids(points: &[Vec<f64>], labels: &[usize], centroids: &mut [Vec<f64>]) {
    let dimensions = centroids.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0; dimensions]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];

    for (point, &label) in points.iter().zip(labels) {
        counts[label] += 1;
        for (sum, x) in sums[label].iter_mut().zip(point) {
            *sum += x;
        }
    }

    for ((centroid, sum), count) in centroids.iter_mut().zip(sums).zip(counts) {
        // Empty clusters keep their previous centroid.
        if count > 0 {
            *centroid = sum.into_iter().map(|x| x / count as f64).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::random::seeded;

    fn blobs() -> Vec<Vec<f64>> {
        let centres = [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
        let offsets = [[0.1, 0.0], [-0.1, 0.05], [0.0, -0.1], [0.05, 0.1]];

        centres
            .iter()
            .flat_map(|c| offsets.iter().map(move |o| vec![c[0] + o[0], c[1] + o[1]]))
            .collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(17)]
    #[case(12345)]
    fn separated_blobs_converge(#[case] seed: u64) {
        let points = blobs();
        let fit = KMeans::new(3).fit(&points, &mut seeded(Some(seed))).unwrap();

        assert!(fit.converged);
        assert!(fit.iterations <= DEFAULT_MAX_ITERATIONS);
        assert_eq!(fit.labels.len(), points.len());
        assert!(fit.labels.iter().all(|label| *label < 3));

        // A converged fit is a fixed point of the assignment step.
        for (point, label) in points.iter().zip(&fit.labels) {
            assert_eq!(nearest(point, &fit.centroids), *label);
        }
    }

    #[rstest]
    #[case(3)]
    #[case(21)]
    #[case(404)]
    fn two_blobs_are_recovered(#[case] seed: u64) {
        let points: Vec<Vec<f64>> = [0.0, 0.1, 0.2, 0.05, 10.0, 10.1, 10.2, 10.05]
            .iter()
            .map(|x| vec![*x])
            .collect();
        let fit = KMeans::new(2).fit(&points, &mut seeded(Some(seed))).unwrap();

        assert!(fit.converged);
        assert!(fit.labels[..4].iter().all(|label| *label == fit.labels[0]));
        assert!(fit.labels[4..].iter().all(|label| *label == fit.labels[4]));
        assert_ne!(fit.labels[0], fit.labels[4]);
    }

    #[test]
    fn deterministic_for_a_seed() {
        let points = blobs();

        let a = KMeans::new(4).fit(&points, &mut seeded(Some(9))).unwrap();
        let b = KMeans::new(4).fit(&points, &mut seeded(Some(9))).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn iteration_cap() {
        let points = blobs();
        let fit = KMeans::new(3)
            .with_max_iterations(1)
            .fit(&points, &mut seeded(Some(2)))
            .unwrap();

        assert_eq!(fit.iterations, 1);
        assert!(!fit.converged);

        let fit = KMeans::new(3)
            .with_max_iterations(0)
            .fit(&points, &mut seeded(Some(2)))
            .unwrap();

        assert_eq!(fit.iterations, 0);
        assert_eq!(fit.labels.len(), points.len());
    }

    #[test]
    fn duplicate_points_leave_empty_clusters_in_place() {
        // All points coincide: every point joins centroid 0, the others keep their position.
        let points = vec![vec![1.0, 1.0]; 5];
        let fit = KMeans::new(3).fit(&points, &mut seeded(Some(4))).unwrap();

        assert!(fit.converged);
        assert_eq!(fit.labels, vec![0; 5]);
        assert!(fit
            .centroids
            .iter()
            .all(|centroid| centroid == &vec![1.0, 1.0]));
    }

    #[test]
    fn nearest_breaks_ties_by_lowest_index() {
        let centroids = vec![vec![-1.0], vec![1.0], vec![-1.0]];

        assert_eq!(nearest(&[0.0], &centroids), 0);
        assert_eq!(nearest(&[0.9], &centroids), 1);
    }

    #[test]
    fn input_errors() {
        let mut rng = seeded(Some(0));

        assert_eq!(KMeans::new(2).fit(&[], &mut rng), Err(Error::EmptyInput));
        assert_eq!(
            KMeans::new(3).fit(&[vec![0.0], vec![1.0]], &mut rng),
            Err(Error::InvalidClusterCount {
                requested: 3,
                points: 2
            })
        );
        assert_eq!(
            KMeans::new(0).fit(&[vec![0.0]], &mut rng),
            Err(Error::InvalidClusterCount {
                requested: 0,
                points: 1
            })
        );
        assert_eq!(
            KMeans::new(1).fit(&[vec![0.0, 1.0], vec![1.0]], &mut rng),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn euclidean() {
        assert_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(euclidean_distance(&[], &[]), 0.0);
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize_labels(&[]), (vec![], 0));
    }

    proptest! {
        #[test]
        fn normalized_labels_are_dense(labels in prop::collection::vec(0usize..16, 0..64)) {
            let (normalized, count) = normalize_labels(&labels);

            prop_assert_eq!(normalized.len(), labels.len());
            for expected in 0..count {
                prop_assert!(normalized.contains(&expected));
            }
            prop_assert!(normalized.iter().all(|label| *label < count));

            // First appearances are in increasing order.
            let mut seen = 0;
            for label in &normalized {
                prop_assert!(*label <= seen);
                if *label == seen {
                    seen += 1;
                }
            }

            // Equal raw labels map to equal normalized labels and vice versa.
            for (a, b) in labels.iter().zip(&normalized) {
                for (c, d) in labels.iter().zip(&normalized) {
                    prop_assert_eq!(a == c, b == d);
                }
            }
        }
    }
}
