pub mod error;
pub mod graph;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{GraphError, Result};
pub use graph::{GraphOutput, fourier, grid_coordinates, knn, kwraps, kwraps3d, laplacian};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn gcnn_graph_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Expose graph construction functions
    python_bindings::register(m)?;

    // Add module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__author__", "Flavien Buron")?;

    Ok(())
}
