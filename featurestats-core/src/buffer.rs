use std::sync::Arc;

use crate::error::StatsError;
use crate::types::DType;

/// Typed, shared storage behind a [`Tensor`](crate::tensor::Tensor).
///
/// Each variant owns its elements through an `Arc` so tensors (and the sparse
/// tensors built on top of them) can be cloned without copying data.
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    F32(Arc<Vec<f32>>),
    F64(Arc<Vec<f64>>),
    I32(Arc<Vec<i32>>),
    I64(Arc<Vec<i64>>),
    Str(Arc<Vec<String>>),
}

impl Buffer {
    /// The element type stored in this buffer.
    pub fn dtype(&self) -> DType {
        match self {
            Buffer::F32(_) => DType::F32,
            Buffer::F64(_) => DType::F64,
            Buffer::I32(_) => DType::I32,
            Buffer::I64(_) => DType::I64,
            Buffer::Str(_) => DType::Str,
        }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        match self {
            Buffer::F32(v) => v.len(),
            Buffer::F64(v) => v.len(),
            Buffer::I32(v) => v.len(),
            Buffer::I64(v) => v.len(),
            Buffer::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attempts to get a reference to the underlying `Arc<Vec<f32>>`.
    ///
    /// Returns `UnsupportedElementType` if the buffer holds another type.
    pub fn try_get_f32(&self) -> Result<&Arc<Vec<f32>>, StatsError> {
        match self {
            Buffer::F32(data) => Ok(data),
            other => Err(StatsError::unsupported(other.dtype(), "try_get_f32")),
        }
    }

    pub fn try_get_f64(&self) -> Result<&Arc<Vec<f64>>, StatsError> {
        match self {
            Buffer::F64(data) => Ok(data),
            other => Err(StatsError::unsupported(other.dtype(), "try_get_f64")),
        }
    }

    pub fn try_get_i64(&self) -> Result<&Arc<Vec<i64>>, StatsError> {
        match self {
            Buffer::I64(data) => Ok(data),
            other => Err(StatsError::unsupported(other.dtype(), "try_get_i64")),
        }
    }

    pub fn try_get_str(&self) -> Result<&Arc<Vec<String>>, StatsError> {
        match self {
            Buffer::Str(data) => Ok(data),
            other => Err(StatsError::unsupported(other.dtype(), "try_get_str")),
        }
    }

    /// Builds a new buffer of the same type holding the elements at `positions`.
    pub(crate) fn gather(&self, positions: &[usize]) -> Buffer {
        fn pick<T: Clone>(data: &[T], positions: &[usize]) -> Arc<Vec<T>> {
            Arc::new(positions.iter().map(|&p| data[p].clone()).collect())
        }
        match self {
            Buffer::F32(v) => Buffer::F32(pick(v, positions)),
            Buffer::F64(v) => Buffer::F64(pick(v, positions)),
            Buffer::I32(v) => Buffer::I32(pick(v, positions)),
            Buffer::I64(v) => Buffer::I64(pick(v, positions)),
            Buffer::Str(v) => Buffer::Str(pick(v, positions)),
        }
    }
}
