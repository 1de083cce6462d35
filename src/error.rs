use thiserror::Error;

/// Errors raised while building graphs or spectral bases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported distance metric: {0}")]
    UnsupportedMetric(String),

    /// Shapes that should agree do not (non-square matrices, condensed length).
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// The singular value decomposition could not be computed.
    #[error("Decomposition failed: {0}")]
    Decomposition(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    pub(crate) fn not_square(rows: usize, cols: usize) -> Self {
        GraphError::DimensionMismatch {
            expected: format!("square matrix ({rows}x{rows})"),
            actual: format!("{rows}x{cols}"),
        }
    }
}

#[cfg(feature = "python")]
impl From<GraphError> for pyo3::PyErr {
    fn from(value: GraphError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};
        match value {
            GraphError::Decomposition(_) => PyRuntimeError::new_err(value.to_string()),
            _ => PyValueError::new_err(value.to_string()),
        }
    }
}
