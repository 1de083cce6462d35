use ndarray::{Array2, ArrayView2, Axis};

use crate::error::{GraphError, Result};

/// Laplacian of a dense adjacency matrix.
///
/// Combinatorial `D - A`, or `I - D^-1/2 A D^-1/2` when `normalized`. Nodes
/// with zero degree get an all-zero row and column in the normalized form.
pub fn laplacian(adj: ArrayView2<f64>, normalized: bool) -> Result<Array2<f64>> {
    let (rows, cols) = adj.dim();
    if rows != cols {
        return Err(GraphError::not_square(rows, cols));
    }

    let degrees = adj.sum_axis(Axis(1));

    let lap = if normalized {
        let scale = degrees.mapv(|d| if d > 0.0 { d.sqrt().recip() } else { 0.0 });
        Array2::from_shape_fn((rows, cols), |(i, j)| {
            let identity = if i == j && degrees[i] > 0.0 { 1.0 } else { 0.0 };
            identity - scale[i] * adj[[i, j]] * scale[j]
        })
    } else {
        let mut lap = adj.mapv(|a| -a);
        lap.diag_mut().zip_mut_with(&degrees, |l, d| *l += d);
        lap
    };

    Ok(lap)
}
