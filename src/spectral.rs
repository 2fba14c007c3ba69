//! Spectral embedding of a network's nodes from its Laplacian.

use nalgebra::{DMatrix, DVector, SymmetricEigen};
use tracing::debug;

use crate::error::{Error, Result};

/// Iteration cap handed to the symmetric eigen solver.
pub const MAX_EIGEN_ITERATIONS: usize = 10_000;

/// Computes the eigenvalues and corresponding eigenvectors of a symmetric matrix, sorted by
/// ascending eigenvalue.
///
/// `nalgebra` makes no promise about the order of the eigenvalues it returns, so the pairs are
/// sorted here. Ties keep the solver's order.
pub fn sorted_eigenpairs(matrix: DMatrix<f64>) -> Result<Vec<(f64, DVector<f64>)>> {
    if matrix.is_empty() {
        return Err(Error::EmptyInput);
    }
    if !matrix.is_square() {
        return Err(Error::DimensionMismatch {
            expected: matrix.nrows(),
            found: matrix.ncols(),
        });
    }

    let eigen = SymmetricEigen::try_new(matrix, f64::EPSILON, MAX_EIGEN_ITERATIONS).ok_or(
        Error::EigenDecomposition {
            iterations: MAX_EIGEN_ITERATIONS,
        },
    )?;

    // Map eigenvalues to their eigenvectors.
    let mut pairs: Vec<(f64, DVector<f64>)> = eigen
        .eigenvalues
        .iter()
        .zip(eigen.eigenvectors.column_iter())
        .map(|(value, vector)| (*value, vector.clone_owned()))
        .collect();

    pairs.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    Ok(pairs)
}

/// Embeds every node in a `dimensions`-dimensional space.
///
/// The smallest eigenvalue of a Laplacian is 0 with a constant eigenvector, which carries no
/// structure and is skipped. Node `i` is placed at the `i`-th components of the eigenvectors of
/// the next `dimensions` eigenvalues. If the matrix is too small to provide that many, every
/// available non-trivial eigenvector is used.
///
/// A disconnected network has several zero eigenvalues and the resulting directions are not
/// unique, the embedding is still produced.
///
/// # Examples
///
/// ```
/// use smallworld::{network::Network, spectral::embed};
///
/// let network = Network::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
/// let points = embed(&network.laplacian_matrix(), 2).unwrap();
///
/// assert_eq!(points.len(), 4);
/// assert!(points.iter().all(|point| point.len() == 2));
/// ```
pub fn embed(laplacian: &DMatrix<f64>, dimensions: usize) -> Result<Vec<Vec<f64>>> {
    if dimensions == 0 {
        return Err(Error::invalid("dimensions", "must be at least 1"));
    }

    let n = laplacian.nrows();
    let pairs = sorted_eigenpairs(laplacian.clone())?;

    let available = n - 1;
    if available == 0 {
        return Err(Error::DegenerateSpectrum { size: n });
    }
    let dimensions = dimensions.min(available);

    debug!(
        n,
        dimensions,
        eigenvalues = ?pairs.iter().skip(1).take(dimensions).map(|(v, _)| *v).collect::<Vec<_>>(),
        "computed spectral embedding"
    );

    let directions = &pairs[1..=dimensions];
    let points = (0..n)
        .map(|node| {
            directions
                .iter()
                .map(|(_, vector)| vector[node])
                .collect()
        })
        .collect();

    Ok(points)
}
