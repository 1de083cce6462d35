use ndarray::{Array1, Array2, ArrayView2};
use tracing::{debug, trace};

use super::distance::{Metric, cdist_square, is_symmetric};
use crate::error::{GraphError, Result};

pub const DEFAULT_KNN_K: usize = 4;
pub const DEFAULT_METRIC: &str = "euclidean";

/// K-NN adjacency matrix from a list of feature vectors, one row per node.
///
/// Distances under `metric` are turned into Gaussian weights
/// `exp(-d^2 / 2)`. An edge is dropped only when neither endpoint ranks the
/// other among its `k` most similar nodes, so the result stays symmetric.
/// Ties at the k-th weight can keep more than `k` neighbors. The diagonal
/// keeps its self-weight of 1.
pub fn knn(z: ArrayView2<f64>, k: usize, metric: &str) -> Result<Array2<f64>> {
    let metric: Metric = metric.parse()?;
    knn_with_metric(z, k, metric)
}

/// Same as [`knn`] with an already parsed metric
pub fn knn_with_metric(z: ArrayView2<f64>, k: usize, metric: Metric) -> Result<Array2<f64>> {
    if k == 0 {
        return Err(GraphError::InvalidArgument(
            "k must be at least 1".to_string(),
        ));
    }

    let n = z.nrows();
    debug!(nodes = n, dim = z.ncols(), k, %metric, "building knn adjacency");

    let dists = cdist_square(z, metric)?;
    let mut weights = dists.mapv(|d| (-d * d / 2.0).exp());

    let thresholds = row_thresholds(&weights, k);
    let below = Array2::from_shape_fn((n, n), |(i, j)| weights[[i, j]] < thresholds[i]);

    let mut dropped = 0usize;
    for ((i, j), w) in weights.indexed_iter_mut() {
        if below[[i, j]] && below[[j, i]] {
            *w = 0.0;
            dropped += 1;
        }
    }
    trace!(dropped, "knn edges dropped");

    assert!(
        is_symmetric(&weights),
        "knn adjacency lost symmetry while thresholding"
    );
    Ok(weights)
}

/// Weight of the k-th most similar other node, per row.
///
/// `k` larger than the number of other nodes keeps every edge of the row.
fn row_thresholds(weights: &Array2<f64>, k: usize) -> Array1<f64> {
    let n = weights.nrows();
    let rank = k.min(n.saturating_sub(1));

    let thresholds = weights
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            if rank == 0 {
                return f64::NEG_INFINITY;
            }
            let mut others: Vec<f64> = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &w)| w)
                .collect();
            others.sort_by(|a, b| b.total_cmp(a));
            others[rank - 1]
        })
        .collect::<Vec<_>>();

    Array1::from(thresholds)
}
