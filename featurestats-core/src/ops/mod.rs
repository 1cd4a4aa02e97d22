//! # Batch statistics (`ops`)
//!
//! Every operation here is a pure function of one batch. Reductions return
//! partial statistics that merge with [`reduction::Combine`].
//!
//! - [`reduction`]: counts, weighted counts and co-occurrences, moments,
//!   L-moments, min/max, and their per-key variants.
//! - [`histogram`]: reordering bucket counts into a dense histogram.
//! - [`bucketize`]: assigning values to buckets.
//! - [`per_key_vocab`]: per-key auxiliary record lookup.
//! - [`traits`]: numeric element traits.

pub mod bucketize;
pub mod histogram;
pub mod per_key_vocab;
pub mod reduction;
pub mod traits;

pub use bucketize::{apply_bucketize_op, Boundaries};
pub use histogram::reorder_histogram;
pub use per_key_vocab::PerKeyVocabulary;
