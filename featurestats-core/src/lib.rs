//! # featurestats-core
//!
//! Pure, deterministic batch reductions for feature statistics: counts,
//! weighted counts and label co-occurrences, mean/variance, L-moments and
//! min/max, each optionally split by a categorical key, over dense and sparse
//! batches alike.
//!
//! Every reducer takes one [`Batch`] and returns a partial statistic. Partials
//! from independent batches merge with [`Combine::combine`], which is
//! associative and commutative, so results do not depend on how the data was
//! split into batches or in which order the partials are merged.
//!
//! ```
//! use featurestats_core::{reduce_batch_count_mean_and_var, Batch, Combine, Tensor};
//!
//! let a = Batch::from(Tensor::new_f64(vec![1.0, 2.0], vec![2]).unwrap());
//! let b = Batch::from(Tensor::new_f64(vec![3.0, 4.0], vec![2]).unwrap());
//! let merged = reduce_batch_count_mean_and_var::<f64>(&a, true)
//!     .unwrap()
//!     .combine(reduce_batch_count_mean_and_var::<f64>(&b, true).unwrap())
//!     .unwrap();
//! assert_eq!(merged.count, vec![4]);
//! assert_eq!(merged.mean, vec![2.5]);
//! assert_eq!(merged.var, vec![1.25]);
//! ```

pub mod adapter;
pub mod batch;
pub mod buffer;
pub mod error;
pub mod ops;
pub mod sparse;
pub mod tensor;
pub mod tensor_data;
pub mod types;
pub mod utils;
pub mod vocabulary;

pub use adapter::{assert_same_shape, validate_and_get_dense_value_key_inputs};
pub use batch::Batch;
pub use buffer::Buffer;
pub use error::StatsError;
pub use ops::reduction::*;
pub use ops::traits::{MinMaxElement, StatFloat};
pub use ops::{apply_bucketize_op, reorder_histogram, Boundaries, PerKeyVocabulary};
pub use sparse::SparseTensor;
pub use tensor::Tensor;
pub use types::DType;
pub use vocabulary::{build_vocabulary, lookup_key, VocabKey, VocabularyBuilder};

// Re-export traits required by public functions/structs
pub use num_traits;
