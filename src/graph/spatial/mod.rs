pub mod distance;
pub mod grid;
pub mod knn;

pub use distance::{Metric, cdist_square, pdist, squareform};
pub use grid::{
    DEFAULT_WRAP_DEPTH, DEFAULT_WRAP_RADIUS, LatticeGraph, LatticeNode, grid_coordinates, kwraps,
    kwraps3d,
};
pub use knn::{DEFAULT_KNN_K, DEFAULT_METRIC, knn, knn_with_metric};
