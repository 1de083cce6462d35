use nalgebra::{DMatrix, SVD};
use ndarray::{Array2, ArrayView2};
use tracing::debug;

use crate::error::{GraphError, Result};

const SVD_MAX_ITERATIONS: usize = 10_000;

/// Graph Fourier basis of a Laplacian: the left singular vectors of its SVD,
/// one per column, ordered by descending singular value.
///
/// The input is not checked to be a valid Laplacian.
pub fn fourier(laplacian: ArrayView2<f64>) -> Result<Array2<f64>> {
    let (rows, cols) = laplacian.dim();
    if rows != cols {
        return Err(GraphError::not_square(rows, cols));
    }
    if rows == 0 {
        return Ok(Array2::zeros((0, 0)));
    }
    if laplacian.iter().any(|v| !v.is_finite()) {
        return Err(GraphError::Decomposition(
            "matrix contains NaN or infinite values".to_string(),
        ));
    }

    debug!(size = rows, "computing graph fourier basis");

    let matrix = DMatrix::from_fn(rows, cols, |i, j| laplacian[[i, j]]);
    let svd = SVD::try_new(matrix, true, false, f64::EPSILON, SVD_MAX_ITERATIONS).ok_or_else(|| {
        GraphError::Decomposition(format!(
            "SVD did not converge within {SVD_MAX_ITERATIONS} iterations"
        ))
    })?;
    let u = svd
        .u
        .ok_or_else(|| GraphError::Decomposition("SVD returned no left singular vectors".into()))?;

    let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
    order.sort_by(|&a, &b| svd.singular_values[b].total_cmp(&svd.singular_values[a]));

    Ok(Array2::from_shape_fn((rows, order.len()), |(i, j)| {
        u[(i, order[j])]
    }))
}
