// src/tensor/create.rs
use crate::error::StatsError;
use crate::tensor::Tensor;

/// Creates a new f32 tensor from a vector and a shape.
pub fn from_vec_f32(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Tensor, StatsError> {
    Tensor::new(data_vec, shape)
}

/// Creates a new f64 tensor from a vector and a shape.
pub fn from_vec_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Tensor, StatsError> {
    Tensor::new_f64(data_vec, shape)
}

pub fn from_vec_i32(data_vec: Vec<i32>, shape: Vec<usize>) -> Result<Tensor, StatsError> {
    Tensor::new_i32(data_vec, shape)
}

pub fn from_vec_i64(data_vec: Vec<i64>, shape: Vec<usize>) -> Result<Tensor, StatsError> {
    Tensor::new_i64(data_vec, shape)
}

/// Creates a string tensor from borrowed string slices.
///
/// ```
/// use featurestats_core::tensor::from_strs;
/// let keys = from_strs(&["a", "b", "a"], vec![3]).unwrap();
/// assert_eq!(keys.shape(), &[3]);
/// ```
pub fn from_strs(values: &[&str], shape: Vec<usize>) -> Result<Tensor, StatsError> {
    Tensor::new_str(values.iter().map(|s| s.to_string()).collect(), shape)
}

