// src/tensor/accessors.rs
use crate::{buffer::Buffer, error::StatsError, tensor::Tensor, types::DType};

impl Tensor {
    /// Returns the tensor's shape (dimensions).
    pub fn shape(&self) -> &[usize] {
        &self.data.shape
    }

    /// Returns the data type (`DType`) of the tensor elements.
    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    /// Returns the rank (number of dimensions) of the tensor.
    pub fn rank(&self) -> usize {
        self.data.shape.len()
    }

    /// Returns the total number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.data.numel()
    }

    pub fn buffer(&self) -> &Buffer {
        self.data.buffer()
    }

    /// Size of the leading (batch) dimension. A rank-0 tensor counts as one row.
    pub fn batch_size(&self) -> usize {
        self.data.shape.first().copied().unwrap_or(1)
    }

    /// The dimensions after the batch dimension.
    pub fn feature_shape(&self) -> &[usize] {
        if self.data.shape.is_empty() {
            &[]
        } else {
            &self.data.shape[1..]
        }
    }

    /// Copies the tensor's elements out as an f32 vector.
    ///
    /// Returns `UnsupportedElementType` if the tensor is not `F32`.
    pub fn get_f32_data(&self) -> Result<Vec<f32>, StatsError> {
        Ok(self.buffer().try_get_f32()?.as_ref().clone())
    }

    pub fn get_f64_data(&self) -> Result<Vec<f64>, StatsError> {
        Ok(self.buffer().try_get_f64()?.as_ref().clone())
    }

    pub fn get_i64_data(&self) -> Result<Vec<i64>, StatsError> {
        Ok(self.buffer().try_get_i64()?.as_ref().clone())
    }

    pub fn get_str_data(&self) -> Result<Vec<String>, StatsError> {
        Ok(self.buffer().try_get_str()?.as_ref().clone())
    }

    /// Reads an integer-typed tensor (`I32` or `I64`) as `i64` values.
    pub fn get_integer_data(&self) -> Result<Vec<i64>, StatsError> {
        match self.buffer() {
            Buffer::I32(v) => Ok(v.iter().map(|&x| x as i64).collect()),
            Buffer::I64(v) => Ok(v.as_ref().clone()),
            other => Err(StatsError::unsupported(
                other.dtype(),
                "get_integer_data",
            )),
        }
    }

    /// Reads a numeric tensor as `f64` values, widening integers and `f32`.
    pub fn get_numeric_data_f64(&self) -> Result<Vec<f64>, StatsError> {
        match self.buffer() {
            Buffer::F32(v) => Ok(v.iter().map(|&x| x as f64).collect()),
            Buffer::F64(v) => Ok(v.as_ref().clone()),
            Buffer::I32(v) => Ok(v.iter().map(|&x| x as f64).collect()),
            Buffer::I64(v) => Ok(v.iter().map(|&x| x as f64).collect()),
            Buffer::Str(_) => Err(StatsError::unsupported(
                DType::Str,
                "get_numeric_data_f64",
            )),
        }
    }
}
