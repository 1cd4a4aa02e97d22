// src/batch.rs
use crate::sparse::SparseTensor;
use crate::tensor::Tensor;
use crate::types::DType;

/// One batch of feature values, dense or sparse.
///
/// Every reducer accepts a `&Batch` and treats both representations through
/// the same contract: one logical instance per dense element or per stored
/// sparse entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Batch {
    Dense(Tensor),
    Sparse(SparseTensor),
}

impl Batch {
    pub fn dtype(&self) -> DType {
        match self {
            Batch::Dense(t) => t.dtype(),
            Batch::Sparse(sp) => sp.dtype(),
        }
    }

    /// Number of rows (the leading dimension).
    pub fn batch_size(&self) -> usize {
        match self {
            Batch::Dense(t) => t.batch_size(),
            Batch::Sparse(sp) => sp.batch_size(),
        }
    }

    /// The full (dense) shape of the batch.
    pub fn shape(&self) -> &[usize] {
        match self {
            Batch::Dense(t) => t.shape(),
            Batch::Sparse(sp) => sp.dense_shape(),
        }
    }

    pub fn feature_shape(&self) -> &[usize] {
        match self {
            Batch::Dense(t) => t.feature_shape(),
            Batch::Sparse(sp) => sp.feature_shape(),
        }
    }
}

impl From<Tensor> for Batch {
    fn from(t: Tensor) -> Self {
        Batch::Dense(t)
    }
}

impl From<SparseTensor> for Batch {
    fn from(sp: SparseTensor) -> Self {
        Batch::Sparse(sp)
    }
}
