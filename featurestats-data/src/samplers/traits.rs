// featurestats-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Decides the order in which a `DataLoader` visits dataset records.
///
/// The order only changes how records are split into batches; merged
/// statistics are the same for every sampler that visits each record once.
pub trait Sampler: Debug + Send + Sync {
    /// Returns the record indices to visit for a dataset of `dataset_len` records.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of indices `iter` yields for the same `dataset_len`.
    fn len(&self, dataset_len: usize) -> usize;
}
