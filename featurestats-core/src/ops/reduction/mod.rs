// src/ops/reduction/mod.rs
// Batch reductions producing combinable partial statistics.

pub mod combine;
pub mod count;
pub mod l_moments;
pub mod min_max;
pub mod moments;
pub mod per_key;
pub(crate) mod utils;
pub mod weighted_counts;

pub use combine::{combine_all, Combine};
pub use count::{
    reduce_batch_count, reduce_batch_count_per_key, reduce_batch_sum_per_key, Counts, Sums,
};
pub use l_moments::{num_terms_and_factors, reduce_batch_count_l_moments, LMoments};
pub use min_max::{reduce_batch_minus_min_and_max, reduce_batch_minus_min_and_max_per_key, MinMax};
pub use moments::{
    reduce_batch_count_mean_and_var, reduce_batch_count_mean_and_var_per_key, MeanAndVar,
};
pub use per_key::{map_per_key_reductions, PerKey};
pub use weighted_counts::{
    extend_reduced_batch_with_y_counts, reduce_batch_weighted_cooccurrences,
    reduce_batch_weighted_counts, ReducedBatchWeightedCounts, UniqueEntry,
    GLOBAL_Y_COUNT_SENTINEL,
};
