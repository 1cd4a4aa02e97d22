// src/tensor_data.rs
use crate::buffer::Buffer;
use crate::error::StatsError;
use crate::types::DType;

/// Internal storage and metadata for a dense [`Tensor`](crate::tensor::Tensor).
///
/// Holds the typed buffer together with its row-major shape. Batches are
/// immutable once built, so `TensorData` is shared behind an `Arc` without
/// any lock.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorData {
    /// The typed element storage, flattened in row-major order.
    pub(crate) buffer: Buffer,
    /// The shape (dimensions) of the tensor. Dimension 0 is the batch dimension.
    pub(crate) shape: Vec<usize>,
}

impl TensorData {
    /// Creates a new `TensorData` from a typed buffer and a shape.
    ///
    /// # Errors
    /// Returns `StatsError::TensorCreationError` if the buffer length does not
    /// match the number of elements implied by `shape`.
    pub fn new(buffer: Buffer, shape: Vec<usize>) -> Result<Self, StatsError> {
        let numel: usize = shape.iter().product();
        let data_len = buffer.len();
        if data_len != numel {
            return Err(StatsError::TensorCreationError { data_len, shape });
        }
        Ok(TensorData { buffer, shape })
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn dtype(&self) -> DType {
        self.buffer.dtype()
    }

    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }
}
