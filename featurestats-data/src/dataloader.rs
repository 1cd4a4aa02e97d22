// dataloader.rs
//! # DataLoader
//!
//! Groups dataset records into batches and turns each batch into a reducer
//! input through a collate function.
//!
//! ```rust
//! use featurestats_data::{collate_f64_rows, DataLoader, SequentialSampler, VecDataset};
//!
//! let dataset = VecDataset::new(vec![vec![1.0], vec![2.0], vec![3.0]]);
//! let loader = DataLoader::new(
//!     dataset,
//!     2,
//!     SequentialSampler,
//!     false,
//!     Box::new(collate_f64_rows),
//! );
//! let sizes: Vec<usize> = loader.map(|b| b.unwrap().batch_size()).collect();
//! assert_eq!(sizes, vec![2, 1]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use featurestats_core::StatsError;

/// Builds one batch of type `B` out of the records sampled for it.
pub type CollateFn<D, B> =
    Box<dyn Fn(Vec<<D as Dataset>::Item>) -> Result<B, StatsError> + Send + Sync>;

/// Iterates over a dataset in batches of `batch_size` records.
///
/// The sampler decides the visiting order. When `drop_last` is set, a final
/// batch shorter than `batch_size` is skipped.
pub struct DataLoader<D: Dataset, S: Sampler, B> {
    pub dataset: D,
    pub batch_size: usize,
    pub sampler: S,
    pub drop_last: bool,
    collate_fn: CollateFn<D, B>,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler, B> DataLoader<D, S, B> {
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: CollateFn<D, B>,
    ) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        }
    }

    /// Number of batches a full pass yields.
    pub fn num_batches(&self) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        let n = self.sampler.len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }
}

impl<D: Dataset, S: Sampler> DataLoader<D, S, Vec<D::Item>> {
    /// A loader whose batches are the raw record vectors.
    pub fn with_default_collate(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Self {
        let collate_fn: CollateFn<D, Vec<D::Item>> = Box::new(|records: Vec<D::Item>| Ok(records));
        Self::new(dataset, batch_size, sampler, drop_last, collate_fn)
    }
}

impl<D: Dataset, S: Sampler, B> Iterator for DataLoader<D, S, B> {
    type Item = Result<B, StatsError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut records = Vec::with_capacity(self.batch_size);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => records.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if records.is_empty() || (self.drop_last && records.len() < self.batch_size) {
            return None;
        }
        Some((self.collate_fn)(records))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
