//! Instance counts and per-key sums.

use crate::batch::Batch;
use crate::error::StatsError;
use crate::ops::reduction::combine::Combine;
use crate::ops::reduction::per_key::PerKey;
use crate::ops::reduction::utils::{check_partial_shapes, Grouping};
use crate::ops::traits::StatFloat;
use crate::vocabulary::{build_vocabulary, VocabKey};

/// Instance counts, one per output group.
///
/// `shape` is `[]` (a single count) when instance dims were reduced, else the
/// feature shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Counts {
    pub counts: Vec<u64>,
    pub shape: Vec<usize>,
}

impl Combine for Counts {
    fn combine(self, other: Self) -> Result<Self, StatsError> {
        check_partial_shapes(&self.shape, &other.shape, "Counts::combine")?;
        let counts = self
            .counts
            .iter()
            .zip(&other.counts)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Counts {
            counts,
            shape: self.shape,
        })
    }
}

/// Summed values, one per output group.
#[derive(Debug, Clone, PartialEq)]
pub struct Sums<T> {
    pub sums: Vec<T>,
    pub shape: Vec<usize>,
}

impl<T: StatFloat> Combine for Sums<T> {
    fn combine(self, other: Self) -> Result<Self, StatsError> {
        check_partial_shapes(&self.shape, &other.shape, "Sums::combine")?;
        let sums = self
            .sums
            .iter()
            .zip(&other.sums)
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Sums {
            sums,
            shape: self.shape,
        })
    }
}

/// Counts the instances of `x`, overall or per feature position.
///
/// Dense batches count every element; sparse batches count stored entries,
/// so positions without entries count zero.
pub fn reduce_batch_count(x: &Batch, reduce_instance_dims: bool) -> Result<Counts, StatsError> {
    log::debug!(
        "reduce_batch_count: shape={:?}, reduce_instance_dims={}",
        x.shape(),
        reduce_instance_dims
    );
    let (_, grouping) = Grouping::for_batch(x, None, reduce_instance_dims, "reduce_batch_count")?;
    Ok(Counts {
        counts: count_groups(&grouping),
        shape: grouping.group_shape,
    })
}

/// Counts the occurrences of each key, in first-seen key order.
pub fn reduce_batch_count_per_key(key: &Batch) -> Result<PerKey<u64>, StatsError> {
    let values = match key {
        Batch::Dense(t) => t.buffer(),
        Batch::Sparse(sp) => sp.values().buffer(),
    };
    let keys = VocabKey::from_buffer(values, "reduce_batch_count_per_key")?;
    let (key_vocab, ids) = build_vocabulary(keys);
    let mut rows = vec![0u64; key_vocab.len()];
    for id in ids {
        rows[id] += 1;
    }
    Ok(PerKey { key_vocab, rows })
}

/// Sums the values of `x` per key, overall or per feature position.
pub fn reduce_batch_sum_per_key<T: StatFloat>(
    x: &Batch,
    key: &Batch,
    reduce_instance_dims: bool,
) -> Result<PerKey<Sums<T>>, StatsError> {
    const OP: &str = "reduce_batch_sum_per_key";
    log::debug!("{}: shape={:?}, dtype={:?}", OP, x.shape(), x.dtype());
    let (layout, grouping) = Grouping::for_batch(x, Some(key), reduce_instance_dims, OP)?;
    let values = T::read_values(&layout.values, OP)?;
    let mut sums = vec![T::zero(); grouping.num_groups];
    for (&g, &v) in grouping.group_ids.iter().zip(&values) {
        sums[g] += v;
    }
    grouping.split_per_key(|range| Sums {
        sums: sums[range].to_vec(),
        shape: grouping.group_shape.clone(),
    })
}

pub(crate) fn count_groups(grouping: &Grouping) -> Vec<u64> {
    let mut counts = vec![0u64; grouping.num_groups];
    for &g in &grouping.group_ids {
        counts[g] += 1;
    }
    counts
}

#[cfg(test)]
#[path = "count_test.rs"]
mod tests;
