//! # featurestats-data
//!
//! An in-process batch feeder for `featurestats-core`: datasets, samplers, a
//! batching [`DataLoader`], and an [`Accumulator`] that folds the partial
//! statistics of every batch into one result.

pub mod accumulator;
pub mod collate;
pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use accumulator::{analyze, Accumulator};
pub use collate::{collate_f64_rows, collate_keyed_rows};
pub use dataloader::{CollateFn, DataLoader};
pub use datasets::{Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
