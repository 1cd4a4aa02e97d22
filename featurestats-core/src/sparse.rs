// src/sparse.rs
use crate::error::StatsError;
use crate::tensor::utils::{calculate_strides, ravel_index};
use crate::tensor::Tensor;
use crate::types::DType;

/// A sparse batch: `(indices, values, dense_shape)`.
///
/// Each entry `i` places `values[i]` at coordinate `indices[i]` of a dense
/// array of shape `dense_shape`. Coordinates need not be sorted. All
/// coordinates are validated against `dense_shape` when the tensor is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseTensor {
    indices: Vec<Vec<usize>>,
    values: Tensor,
    dense_shape: Vec<usize>,
}

impl SparseTensor {
    /// Builds a sparse tensor, checking that it is well formed.
    ///
    /// # Errors
    /// - `ShapeMismatch` if `values` is not rank 1, if its length differs from
    ///   the number of coordinates, or if a coordinate's rank differs from
    ///   `dense_shape`'s.
    /// - `IndexOutOfBounds` if a coordinate lies outside `dense_shape`.
    /// - `InvalidConfiguration` if `dense_shape` is rank 0.
    pub fn new(
        indices: Vec<Vec<usize>>,
        values: Tensor,
        dense_shape: Vec<usize>,
    ) -> Result<Self, StatsError> {
        if dense_shape.is_empty() {
            return Err(StatsError::InvalidConfiguration(
                "sparse dense_shape must have at least the batch dimension".to_string(),
            ));
        }
        if values.rank() != 1 || values.numel() != indices.len() {
            return Err(StatsError::shape_mismatch(
                [indices.len()],
                values.shape(),
                "SparseTensor::new (values)",
            ));
        }
        for coord in &indices {
            if coord.len() != dense_shape.len() {
                return Err(StatsError::shape_mismatch(
                    dense_shape.len(),
                    coord.len(),
                    "SparseTensor::new (index rank)",
                ));
            }
            if coord.iter().zip(&dense_shape).any(|(&c, &d)| c >= d) {
                return Err(StatsError::IndexOutOfBounds {
                    index: coord.clone(),
                    shape: dense_shape.clone(),
                });
            }
        }
        Ok(SparseTensor {
            indices,
            values,
            dense_shape,
        })
    }

    pub fn indices(&self) -> &[Vec<usize>] {
        &self.indices
    }

    pub fn values(&self) -> &Tensor {
        &self.values
    }

    pub fn dense_shape(&self) -> &[usize] {
        &self.dense_shape
    }

    pub fn dtype(&self) -> DType {
        self.values.dtype()
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn batch_size(&self) -> usize {
        self.dense_shape[0]
    }

    pub fn feature_shape(&self) -> &[usize] {
        &self.dense_shape[1..]
    }

    /// The batch row of each stored entry.
    pub fn rows(&self) -> Vec<usize> {
        self.indices.iter().map(|c| c[0]).collect()
    }

    /// The row-major position of each entry within the feature shape.
    pub fn feature_positions(&self) -> Vec<usize> {
        let strides = calculate_strides(self.feature_shape());
        self.indices
            .iter()
            .map(|c| ravel_index(&c[1..], &strides))
            .collect()
    }

    /// The row-major offset of each entry within the full dense shape.
    pub fn dense_offsets(&self) -> Vec<usize> {
        let strides = calculate_strides(&self.dense_shape);
        self.indices
            .iter()
            .map(|c| ravel_index(c, &strides))
            .collect()
    }

    /// Returns true when `other` carries identical coordinates (same order)
    /// and the same dense shape.
    pub fn same_layout(&self, other: &SparseTensor) -> bool {
        self.dense_shape == other.dense_shape && self.indices == other.indices
    }
}

#[cfg(test)]
#[path = "sparse_test.rs"]
mod tests;
