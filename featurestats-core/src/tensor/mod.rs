// src/tensor/mod.rs

use crate::buffer::Buffer;
use crate::error::StatsError;
use crate::tensor_data::TensorData;
use std::sync::Arc;

mod accessors;
pub mod create;
mod debug;
pub mod utils;

pub use create::{from_strs, from_vec_f32, from_vec_f64, from_vec_i32, from_vec_i64};

/// A dense batch of feature values.
///
/// `Tensor` is an immutable view over shared `TensorData`: cloning a tensor
/// only bumps the reference count of the `Arc`, so batches can be handed to
/// several reducers (or threads) without copying the elements.
///
/// The leading dimension is always the batch dimension; the remaining
/// dimensions form the feature shape.
#[derive(Clone, PartialEq)]
pub struct Tensor {
    pub(crate) data: Arc<TensorData>,
}

impl Tensor {
    /// Creates a new f32 tensor with the given data and shape.
    ///
    /// This is the primary constructor for float batches.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, StatsError> {
        Self::from_buffer(Buffer::F32(Arc::new(data_vec)), shape)
    }

    /// Creates a new f64 tensor with the given data and shape.
    pub fn new_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, StatsError> {
        Self::from_buffer(Buffer::F64(Arc::new(data_vec)), shape)
    }

    pub fn new_i32(data_vec: Vec<i32>, shape: Vec<usize>) -> Result<Self, StatsError> {
        Self::from_buffer(Buffer::I32(Arc::new(data_vec)), shape)
    }

    pub fn new_i64(data_vec: Vec<i64>, shape: Vec<usize>) -> Result<Self, StatsError> {
        Self::from_buffer(Buffer::I64(Arc::new(data_vec)), shape)
    }

    /// Creates a new string tensor (categorical values or keys).
    pub fn new_str(data_vec: Vec<String>, shape: Vec<usize>) -> Result<Self, StatsError> {
        Self::from_buffer(Buffer::Str(Arc::new(data_vec)), shape)
    }

    /// Wraps an existing typed buffer.
    ///
    /// # Errors
    /// `TensorCreationError` when the buffer length does not match `shape`.
    pub fn from_buffer(buffer: Buffer, shape: Vec<usize>) -> Result<Self, StatsError> {
        let tensor_data = TensorData::new(buffer, shape)?;
        Ok(Tensor {
            data: Arc::new(tensor_data),
        })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
