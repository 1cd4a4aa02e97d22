//! Bucket assignment against sorted boundaries.

use std::sync::Arc;

use crate::adapter::InstanceLayout;
use crate::batch::Batch;
use crate::buffer::Buffer;
use crate::error::StatsError;
use crate::sparse::SparseTensor;
use crate::tensor::Tensor;
use crate::ops::traits::StatFloat;

/// Bucket boundaries, shared by every feature position or one list per position.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundaries<T> {
    Global(Vec<T>),
    PerFeature(Vec<Vec<T>>),
}

impl<T: StatFloat> Boundaries<T> {
    fn for_position(&self, position: usize) -> &[T] {
        match self {
            Boundaries::Global(b) => b,
            Boundaries::PerFeature(per) => &per[position],
        }
    }

    fn validate(&self, num_positions: usize) -> Result<(), StatsError> {
        let lists: Vec<&Vec<T>> = match self {
            Boundaries::Global(b) => vec![b],
            Boundaries::PerFeature(per) => {
                if per.len() != num_positions {
                    return Err(StatsError::shape_mismatch(
                        [num_positions],
                        [per.len()],
                        "apply_bucketize_op (boundaries)",
                    ));
                }
                per.iter().collect()
            }
        };
        for b in lists {
            if b.windows(2).any(|w| !(w[0] <= w[1])) {
                return Err(StatsError::InvalidConfiguration(
                    "apply_bucketize_op: boundaries must be sorted ascending".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Bucket of `value`: the number of boundaries strictly below it.
///
/// With `remove_leftmost_boundary` the first boundary is ignored. Otherwise
/// the result is capped at `boundaries.len() - 1`, so a value at or past the
/// last boundary shares the last bucket with the values just below it.
fn bucket_of<T: StatFloat>(value: T, boundaries: &[T], remove_leftmost_boundary: bool) -> i64 {
    if remove_leftmost_boundary {
        let rest = boundaries.get(1..).unwrap_or(&[]);
        rest.partition_point(|&b| b < value) as i64
    } else {
        let bucket = boundaries.partition_point(|&b| b < value);
        bucket.min(boundaries.len().saturating_sub(1)) as i64
    }
}

/// Assigns each value of `x` to a bucket, returning an `I64` batch with the
/// same structure (dense shape, or sparse indices) as `x`.
///
/// # Errors
/// - `UnsupportedElementType` when `T` cannot read `x`.
/// - `ShapeMismatch` when per-feature boundaries do not match the feature count.
/// - `InvalidConfiguration` when boundaries are not sorted.
pub fn apply_bucketize_op<T: StatFloat>(
    x: &Batch,
    boundaries: &Boundaries<T>,
    remove_leftmost_boundary: bool,
) -> Result<Batch, StatsError> {
    const OP: &str = "apply_bucketize_op";
    let layout = InstanceLayout::from_batch(x);
    boundaries.validate(layout.num_positions())?;
    let values = T::read_values(&layout.values, OP)?;
    let buckets: Vec<i64> = values
        .iter()
        .zip(&layout.positions)
        .map(|(&v, &p)| bucket_of(v, boundaries.for_position(p), remove_leftmost_boundary))
        .collect();
    log::debug!("{}: bucketized {} values", OP, buckets.len());
    let buffer = Buffer::I64(Arc::new(buckets));
    match x {
        Batch::Dense(t) => Ok(Batch::Dense(Tensor::from_buffer(buffer, t.shape().to_vec())?)),
        Batch::Sparse(sp) => {
            let n = sp.nnz();
            Ok(Batch::Sparse(SparseTensor::new(
                sp.indices().to_vec(),
                Tensor::from_buffer(buffer, vec![n])?,
                sp.dense_shape().to_vec(),
            )?))
        }
    }
}

#[cfg(test)]
#[path = "bucketize_test.rs"]
mod tests;
