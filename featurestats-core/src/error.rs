use crate::types::DType;
use thiserror::Error;

/// Error type shared by every reducer in featurestats.
///
/// All errors are raised synchronously by the call processing the offending
/// batch. Degenerate inputs (empty batches, empty groups, label gaps, integer
/// clamping) are not errors and never produce one of these.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum StatsError {
    /// Two inputs that must be positionally aligned disagree.
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: String,
        actual: String,
        operation: String,
    },

    /// Mutually inconsistent parameters, detected before any computation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The batch's element type has no reduction defined for the requested statistic.
    #[error("Unsupported element type {dtype:?} for operation {operation}")]
    UnsupportedElementType { dtype: DType, operation: String },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Key {0} is not present in the key vocabulary")]
    KeyNotInVocabulary(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl StatsError {
    /// Shorthand for a `ShapeMismatch` built from debug-printable shapes.
    pub(crate) fn shape_mismatch(
        expected: impl std::fmt::Debug,
        actual: impl std::fmt::Debug,
        operation: &str,
    ) -> Self {
        StatsError::ShapeMismatch {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
            operation: operation.to_string(),
        }
    }

    pub(crate) fn unsupported(dtype: DType, operation: &str) -> Self {
        StatsError::UnsupportedElementType {
            dtype,
            operation: operation.to_string(),
        }
    }
}
