use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::{prelude::*, types::PyModule};

use super::conversions::ArrayConverter;
use crate::graph::GraphOutput;
use crate::graph::spatial::{
    DEFAULT_KNN_K, DEFAULT_METRIC, DEFAULT_WRAP_DEPTH, DEFAULT_WRAP_RADIUS,
    grid_coordinates as grid_coordinates_rs, knn as knn_rs, kwraps as kwraps_rs,
    kwraps3d as kwraps3d_rs,
};
use crate::graph::spectral::{fourier as fourier_rs, laplacian as laplacian_rs};

#[pyfunction]
pub fn grid_coordinates(py: Python<'_>, n: i64) -> PyResult<Bound<'_, PyArray2<i64>>> {
    let coords = grid_coordinates_rs(n)?;
    Ok(ArrayConverter::coordinates_to_numpy(py, &coords))
}

#[pyfunction]
#[pyo3(signature = (z, k=DEFAULT_KNN_K, metric=DEFAULT_METRIC))]
pub fn knn<'py>(
    py: Python<'py>,
    z: PyReadonlyArray2<'py, f64>,
    k: usize,
    metric: &str,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let weights = knn_rs(z.as_array(), k, metric)?;
    Ok(weights.into_pyarray(py))
}

#[pyfunction]
#[pyo3(signature = (n, k=DEFAULT_WRAP_RADIUS))]
pub fn kwraps(py: Python<'_>, n: i64, k: i64) -> PyResult<Bound<'_, PyArray2<f64>>> {
    Ok(kwraps_rs(n, k)?.into_pyarray(py))
}

/// Returns `(nodes, edge_index)`; row `i` of `nodes` holds the `(x, y, z)`
/// coordinates of node `i`.
#[pyfunction]
#[pyo3(signature = (n, k=DEFAULT_WRAP_RADIUS, d=DEFAULT_WRAP_DEPTH))]
pub fn kwraps3d(
    py: Python<'_>,
    n: i64,
    k: i64,
    d: i64,
) -> PyResult<(Bound<'_, PyArray2<i64>>, Bound<'_, PyArray2<i64>>)> {
    let graph = kwraps3d_rs(n, k, d)?;
    let (nodes, output) = GraphOutput::from_lattice(&graph);
    Ok((nodes.into_pyarray(py), output.edge_index.into_pyarray(py)))
}

#[pyfunction]
pub fn fourier<'py>(
    py: Python<'py>,
    laplacian: PyReadonlyArray2<'py, f64>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    Ok(fourier_rs(laplacian.as_array())?.into_pyarray(py))
}

#[pyfunction]
#[pyo3(signature = (adj, normalized=false))]
pub fn laplacian<'py>(
    py: Python<'py>,
    adj: PyReadonlyArray2<'py, f64>,
    normalized: bool,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    Ok(laplacian_rs(adj.as_array(), normalized)?.into_pyarray(py))
}

#[pyfunction]
pub fn dense_to_edge_list<'py>(
    py: Python<'py>,
    adj: PyReadonlyArray2<'py, f64>,
) -> (Bound<'py, PyArray2<i64>>, Bound<'py, PyArray1<f64>>) {
    let output = GraphOutput::from_dense(adj.as_array());
    ArrayConverter::edge_list_to_numpy(py, output)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(grid_coordinates, m)?)?;
    m.add_function(wrap_pyfunction!(knn, m)?)?;
    m.add_function(wrap_pyfunction!(kwraps, m)?)?;
    m.add_function(wrap_pyfunction!(kwraps3d, m)?)?;
    m.add_function(wrap_pyfunction!(fourier, m)?)?;
    m.add_function(wrap_pyfunction!(laplacian, m)?)?;
    m.add_function(wrap_pyfunction!(dense_to_edge_list, m)?)?;
    Ok(())
}
