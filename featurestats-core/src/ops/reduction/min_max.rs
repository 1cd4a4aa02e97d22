//! `(negated_min, max)` per group.

use crate::batch::Batch;
use crate::error::StatsError;
use crate::ops::reduction::combine::Combine;
use crate::ops::reduction::per_key::PerKey;
use crate::ops::reduction::utils::{check_partial_shapes, Grouping};
use crate::ops::traits::MinMaxElement;

/// Min/max partial. The minimum is stored negated so that both fields
/// combine with the same elementwise `max`.
///
/// Integer inputs are clamped to `MIN + 1` first, so a value of `MIN` reports
/// `-(MIN + 1) == MAX` as its negated minimum. Empty groups report `NaN` for
/// floats and `MIN + 1` for integers, in both fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMax<T> {
    pub minus_min: Vec<T>,
    pub max: Vec<T>,
    pub shape: Vec<usize>,
}

impl<T: MinMaxElement> MinMax<T> {
    pub fn empty(shape: Vec<usize>) -> Self {
        let n: usize = shape.iter().product();
        MinMax {
            minus_min: vec![T::empty_value(); n],
            max: vec![T::empty_value(); n],
            shape,
        }
    }

    fn from_groups(values: &[T], group_ids: &[usize], num_groups: usize, shape: Vec<usize>) -> Self {
        let mut minus_min = vec![T::empty_value(); num_groups];
        let mut max = vec![T::empty_value(); num_groups];
        for (&g, &v) in group_ids.iter().zip(values) {
            minus_min[g] = minus_min[g].max_of(v.negate_clamped());
            max[g] = max[g].max_of(v.clamped());
        }
        MinMax {
            minus_min,
            max,
            shape,
        }
    }
}

impl<T: MinMaxElement> Combine for MinMax<T> {
    fn combine(self, other: Self) -> Result<Self, StatsError> {
        check_partial_shapes(&self.shape, &other.shape, "MinMax::combine")?;
        let pairwise = |a: &[T], b: &[T]| -> Vec<T> {
            a.iter().zip(b).map(|(&x, &y)| x.max_of(y)).collect()
        };
        Ok(MinMax {
            minus_min: pairwise(&self.minus_min, &other.minus_min),
            max: pairwise(&self.max, &other.max),
            shape: self.shape,
        })
    }
}

/// Computes `(negated_min, max)` of `x`, overall or per feature position.
///
/// `T` must match `x`'s element type exactly.
pub fn reduce_batch_minus_min_and_max<T: MinMaxElement>(
    x: &Batch,
    reduce_instance_dims: bool,
) -> Result<MinMax<T>, StatsError> {
    const OP: &str = "reduce_batch_minus_min_and_max";
    log::debug!(
        "{}: shape={:?}, dtype={:?}, reduce_instance_dims={}",
        OP,
        x.shape(),
        x.dtype(),
        reduce_instance_dims
    );
    let (layout, grouping) = Grouping::for_batch(x, None, reduce_instance_dims, OP)?;
    let values = T::read_exact(&layout.values, OP)?;
    Ok(MinMax::from_groups(
        &values,
        &grouping.group_ids,
        grouping.num_groups,
        grouping.group_shape,
    ))
}

/// Computes `(negated_min, max)` of all values of each key.
pub fn reduce_batch_minus_min_and_max_per_key<T: MinMaxElement>(
    x: &Batch,
    key: &Batch,
) -> Result<PerKey<MinMax<T>>, StatsError> {
    const OP: &str = "reduce_batch_minus_min_and_max_per_key";
    log::debug!("{}: shape={:?}, dtype={:?}", OP, x.shape(), x.dtype());
    let (layout, grouping) = Grouping::for_batch(x, Some(key), true, OP)?;
    let values = T::read_exact(&layout.values, OP)?;
    let all = MinMax::from_groups(&values, &grouping.group_ids, grouping.num_groups, Vec::new());
    grouping.split_per_key(|range| MinMax {
        minus_min: all.minus_min[range.clone()].to_vec(),
        max: all.max[range].to_vec(),
        shape: Vec::new(),
    })
}

#[cfg(test)]
#[path = "min_max_test.rs"]
mod tests;
