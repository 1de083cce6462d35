use ndarray::Array2;
use numpy::{IntoPyArray, PyArray1, PyArray2};
use pyo3::prelude::*;

use crate::graph::GraphOutput;

/// ndarray to numpy conversion utilities
pub struct ArrayConverter;

impl ArrayConverter {
    /// Coordinate pairs as an `(n, 2)` int64 array
    pub fn coordinates_to_numpy<'py>(
        py: Python<'py>,
        coords: &[(i64, i64)],
    ) -> Bound<'py, PyArray2<i64>> {
        Array2::from_shape_fn((coords.len(), 2), |(i, axis)| match axis {
            0 => coords[i].0,
            _ => coords[i].1,
        })
        .into_pyarray(py)
    }

    /// Edge list as `(edge_index, edge_weight)` numpy arrays
    pub fn edge_list_to_numpy<'py>(
        py: Python<'py>,
        output: GraphOutput,
    ) -> (Bound<'py, PyArray2<i64>>, Bound<'py, PyArray1<f64>>) {
        (
            output.edge_index.into_pyarray(py),
            output.edge_weight.into_pyarray(py),
        )
    }
}
