//! Count, mean and (population) variance per group.

use crate::batch::Batch;
use crate::error::StatsError;
use crate::ops::reduction::combine::Combine;
use crate::ops::reduction::per_key::PerKey;
use crate::ops::reduction::utils::{check_partial_shapes, Grouping};
use crate::ops::traits::StatFloat;

/// Moment partial: `(count, mean, variance)` for each output group.
///
/// Groups without observations hold `(0, 0, 0)`, which is also the identity
/// of [`Combine::combine`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeanAndVar<T> {
    pub count: Vec<u64>,
    pub mean: Vec<T>,
    pub var: Vec<T>,
    pub shape: Vec<usize>,
}

impl<T: StatFloat> MeanAndVar<T> {
    /// An all-empty partial for `shape`.
    pub fn empty(shape: Vec<usize>) -> Self {
        let n: usize = shape.iter().product();
        MeanAndVar {
            count: vec![0; n],
            mean: vec![T::zero(); n],
            var: vec![T::zero(); n],
            shape,
        }
    }

    /// Two-pass count/mean/variance over already segmented groups.
    fn from_segments(segments: &[Vec<T>], shape: Vec<usize>) -> Self {
        let mut count = Vec::with_capacity(segments.len());
        let mut mean = Vec::with_capacity(segments.len());
        let mut var = Vec::with_capacity(segments.len());
        for values in segments {
            let n = values.len() as u64;
            if n == 0 {
                count.push(0);
                mean.push(T::zero());
                var.push(T::zero());
                continue;
            }
            let nf = T::from_count(n);
            let m = values.iter().fold(T::zero(), |acc, &v| acc + v) / nf;
            let ss = values.iter().fold(T::zero(), |acc, &v| {
                let d = v - m;
                acc + d * d
            });
            count.push(n);
            mean.push(m);
            var.push(ss / nf);
        }
        MeanAndVar {
            count,
            mean,
            var,
            shape,
        }
    }
}

impl<T: StatFloat> Combine for MeanAndVar<T> {
    /// Parallel merge (Chan et al.):
    /// `m = m1 + d * n2/n`, `v = v1 * n1/n + v2 * n2/n + d^2 * (n1/n) * (n2/n)`.
    fn combine(self, other: Self) -> Result<Self, StatsError> {
        check_partial_shapes(&self.shape, &other.shape, "MeanAndVar::combine")?;
        let len = self.count.len();
        let mut out = MeanAndVar::empty(self.shape.clone());
        for i in 0..len {
            let (n1, n2) = (self.count[i], other.count[i]);
            let n = n1 + n2;
            out.count[i] = n;
            if n == 0 {
                continue;
            }
            let nf = T::from_count(n);
            let w1 = T::from_count(n1) / nf;
            let w2 = T::from_count(n2) / nf;
            let delta = other.mean[i] - self.mean[i];
            out.mean[i] = self.mean[i] + delta * w2;
            out.var[i] = self.var[i] * w1 + other.var[i] * w2 + delta * delta * w1 * w2;
        }
        Ok(out)
    }
}

/// Computes count, mean and variance of `x`, overall or per feature position.
///
/// `T` selects the accumulation precision: `f32` accepts `F32` batches, `f64`
/// accepts `F64`, `I32` and `I64` batches.
///
/// # Errors
/// `UnsupportedElementType` for any other element type.
pub fn reduce_batch_count_mean_and_var<T: StatFloat>(
    x: &Batch,
    reduce_instance_dims: bool,
) -> Result<MeanAndVar<T>, StatsError> {
    const OP: &str = "reduce_batch_count_mean_and_var";
    log::debug!(
        "{}: shape={:?}, dtype={:?}, reduce_instance_dims={}",
        OP,
        x.shape(),
        x.dtype(),
        reduce_instance_dims
    );
    let (layout, grouping) = Grouping::for_batch(x, None, reduce_instance_dims, OP)?;
    let values = T::read_values(&layout.values, OP)?;
    Ok(MeanAndVar::from_segments(
        &grouping.segment(&values),
        grouping.group_shape,
    ))
}

/// Like [`reduce_batch_count_mean_and_var`], split by the key of each instance.
pub fn reduce_batch_count_mean_and_var_per_key<T: StatFloat>(
    x: &Batch,
    key: &Batch,
    reduce_instance_dims: bool,
) -> Result<PerKey<MeanAndVar<T>>, StatsError> {
    const OP: &str = "reduce_batch_count_mean_and_var_per_key";
    log::debug!("{}: shape={:?}, dtype={:?}", OP, x.shape(), x.dtype());
    let (layout, grouping) = Grouping::for_batch(x, Some(key), reduce_instance_dims, OP)?;
    let values = T::read_values(&layout.values, OP)?;
    let segments = grouping.segment(&values);
    grouping.split_per_key(|range| {
        MeanAndVar::from_segments(&segments[range], grouping.group_shape.clone())
    })
}

#[cfg(test)]
#[path = "moments_test.rs"]
mod tests;
