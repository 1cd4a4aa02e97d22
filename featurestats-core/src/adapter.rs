//! Normalizes dense and sparse batches into one per-instance view.
//!
//! Every reducer sees an [`InstanceLayout`]: one logical instance per dense
//! element (row-major) or per stored sparse entry (index order), each with
//! its batch row and its flattened feature position. Auxiliary tensors
//! (keys, labels, weights) are aligned to those instances here.

use crate::batch::Batch;
use crate::buffer::Buffer;
use crate::error::StatsError;
use crate::tensor::Tensor;
use crate::vocabulary::VocabKey;

#[derive(Debug, Clone)]
pub(crate) struct InstanceLayout {
    /// One value per instance.
    pub(crate) values: Buffer,
    pub(crate) rows: Vec<usize>,
    /// Row-major position within `feature_shape`.
    pub(crate) positions: Vec<usize>,
    pub(crate) feature_shape: Vec<usize>,
}

impl InstanceLayout {
    pub(crate) fn from_batch(x: &Batch) -> Self {
        match x {
            Batch::Dense(t) => {
                let feature_shape = t.feature_shape().to_vec();
                let num_positions: usize = feature_shape.iter().product();
                let numel = t.numel();
                let (rows, positions) = if num_positions == 0 {
                    (Vec::new(), Vec::new())
                } else {
                    (0..numel)
                        .map(|i| (i / num_positions, i % num_positions))
                        .unzip()
                };
                InstanceLayout {
                    values: t.buffer().clone(),
                    rows,
                    positions,
                    feature_shape,
                }
            }
            Batch::Sparse(sp) => InstanceLayout {
                values: sp.values().buffer().clone(),
                rows: sp.rows(),
                positions: sp.feature_positions(),
                feature_shape: sp.feature_shape().to_vec(),
            },
        }
    }

    pub(crate) fn num_instances(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn num_positions(&self) -> usize {
        self.feature_shape.iter().product()
    }
}

/// For each instance of `x`, the flat offset of its aligned element in `t`.
///
/// `t` aligns either to every element (same shape as `x`, or as the sparse
/// `dense_shape`) or to rows (rank 1, length `batch_size`).
pub(crate) fn align_to_instances(
    x: &Batch,
    layout: &InstanceLayout,
    t: &Tensor,
    operation: &str,
) -> Result<Vec<usize>, StatsError> {
    if t.shape() == x.shape() {
        return Ok(match x {
            Batch::Dense(_) => (0..layout.num_instances()).collect(),
            Batch::Sparse(sp) => sp.dense_offsets(),
        });
    }
    let rank = x.shape().len();
    if t.rank() == 1 {
        if t.shape()[0] != x.batch_size() {
            return Err(StatsError::shape_mismatch(
                [x.batch_size()],
                t.shape(),
                operation,
            ));
        }
        return Ok(layout.rows.clone());
    }
    if t.rank() == rank {
        return Err(StatsError::shape_mismatch(x.shape(), t.shape(), operation));
    }
    Err(StatsError::InvalidConfiguration(format!(
        "{}: a tensor of rank {} can align neither to rows nor to elements of a rank {} batch",
        operation,
        t.rank(),
        rank
    )))
}

/// Resolves the grouping key of every instance of `x`.
///
/// A sparse key must share `x`'s exact indices and dense shape. A dense key
/// is aligned per row or per element as in [`align_to_instances`].
pub(crate) fn resolve_instance_keys(
    x: &Batch,
    layout: &InstanceLayout,
    key: &Batch,
    operation: &str,
) -> Result<Vec<VocabKey>, StatsError> {
    match (x, key) {
        (Batch::Sparse(xs), Batch::Sparse(ks)) => {
            if !xs.same_layout(ks) {
                return Err(StatsError::shape_mismatch(
                    format!("indices {:?} of shape {:?}", xs.indices(), xs.dense_shape()),
                    format!("indices {:?} of shape {:?}", ks.indices(), ks.dense_shape()),
                    operation,
                ));
            }
            VocabKey::from_buffer(ks.values().buffer(), operation)
        }
        (Batch::Dense(_), Batch::Sparse(_)) => Err(StatsError::InvalidConfiguration(format!(
            "{}: a sparse key requires a sparse value",
            operation
        ))),
        (_, Batch::Dense(kt)) => {
            let offsets = align_to_instances(x, layout, kt, operation)?;
            VocabKey::gather(kt.buffer(), &offsets, operation)
        }
    }
}

/// Checks that a sparse value and its key line up, returning their flat tensors.
///
/// - sparse value, sparse key: both `values`, after checking identical indices.
/// - sparse value, dense per-row key: `x.values` and the key unchanged.
/// - dense value, dense key: both unchanged, after checking alignment.
///
/// # Errors
/// `ShapeMismatch` when the two do not line up; `InvalidConfiguration` for a
/// dense value with a sparse key.
pub fn validate_and_get_dense_value_key_inputs(
    x: &Batch,
    key: &Batch,
) -> Result<(Tensor, Tensor), StatsError> {
    const OP: &str = "validate_and_get_dense_value_key_inputs";
    let layout = InstanceLayout::from_batch(x);
    // Runs the same alignment checks the reducers apply.
    resolve_instance_keys(x, &layout, key, OP)?;
    match (x, key) {
        (Batch::Sparse(xs), Batch::Sparse(ks)) => Ok((xs.values().clone(), ks.values().clone())),
        (Batch::Sparse(xs), Batch::Dense(kt)) => Ok((xs.values().clone(), kt.clone())),
        (Batch::Dense(xt), Batch::Dense(kt)) => Ok((xt.clone(), kt.clone())),
        (Batch::Dense(_), Batch::Sparse(_)) => Err(StatsError::InternalError(format!(
            "{}: dense value with sparse key passed validation",
            OP
        ))),
    }
}

/// Returns both tensors unchanged when their shapes are equal.
///
/// # Errors
/// `ShapeMismatch` otherwise.
pub fn assert_same_shape(a: &Tensor, b: &Tensor) -> Result<(Tensor, Tensor), StatsError> {
    if a.shape() != b.shape() {
        return Err(StatsError::shape_mismatch(
            a.shape(),
            b.shape(),
            "assert_same_shape",
        ));
    }
    Ok((a.clone(), b.clone()))
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod tests;
