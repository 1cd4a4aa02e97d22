use super::*;
use crate::sparse::SparseTensor;
use crate::tensor::{from_strs, from_vec_f32, from_vec_f64, from_vec_i64};
use crate::types::DType;
use crate::vocabulary::VocabKey;
use approx::assert_relative_eq;

fn dense_f32(data: Vec<f32>, shape: Vec<usize>) -> Batch {
    Batch::from(from_vec_f32(data, shape).unwrap())
}

#[test]
fn test_mean_and_var_dense() -> Result<(), StatsError> {
    let x = dense_f32(vec![1., 2., 3., 4.], vec![2, 2, 1]);
    let all = reduce_batch_count_mean_and_var::<f32>(&x, true)?;
    assert_eq!(all.count, vec![4]);
    assert_relative_eq!(all.mean[0], 2.5);
    assert_relative_eq!(all.var[0], 1.25);

    let elementwise = reduce_batch_count_mean_and_var::<f32>(&x, false)?;
    assert_eq!(elementwise.shape, vec![2, 1]);
    assert_eq!(elementwise.count, vec![2, 2]);
    assert_eq!(elementwise.mean, vec![2.0, 3.0]);
    assert_eq!(elementwise.var, vec![1.0, 1.0]);
    Ok(())
}

#[test]
fn test_mean_and_var_sparse_elementwise() -> Result<(), StatsError> {
    let x = Batch::Sparse(SparseTensor::new(
        vec![vec![0, 0], vec![0, 3], vec![1, 1], vec![1, 3]],
        from_vec_f64(vec![1., 2., 3., 4.], vec![4])?,
        vec![2, 5],
    )?);
    let r = reduce_batch_count_mean_and_var::<f64>(&x, false)?;
    assert_eq!(r.count, vec![1, 1, 0, 2, 0]);
    assert_eq!(r.mean, vec![1.0, 3.0, 0.0, 3.0, 0.0]);
    assert_eq!(r.var, vec![0.0, 0.0, 0.0, 1.0, 0.0]);
    Ok(())
}

#[test]
fn test_mean_and_var_integer_input_promotes_to_f64() -> Result<(), StatsError> {
    let x = Batch::from(from_vec_i64(vec![1, 2, 3, 4], vec![4])?);
    let r = reduce_batch_count_mean_and_var::<f64>(&x, true)?;
    assert_relative_eq!(r.mean[0], 2.5);
    assert!(matches!(
        reduce_batch_count_mean_and_var::<f32>(&x, true),
        Err(StatsError::UnsupportedElementType { dtype: DType::I64, .. })
    ));
    Ok(())
}

#[test]
fn test_mean_and_var_strings_unsupported() -> Result<(), StatsError> {
    let x = Batch::from(from_strs(&["a"], vec![1])?);
    assert!(matches!(
        reduce_batch_count_mean_and_var::<f64>(&x, true),
        Err(StatsError::UnsupportedElementType { dtype: DType::Str, .. })
    ));
    Ok(())
}

#[test]
fn test_combine_is_order_independent() -> Result<(), StatsError> {
    let parts: Vec<MeanAndVar<f64>> = [1.0, 2.0, 3.0, 4.0]
        .iter()
        .map(|&v| reduce_batch_count_mean_and_var(&Batch::from(from_vec_f64(vec![v], vec![1]).unwrap()), true))
        .collect::<Result<_, _>>()?;

    let forward = parts
        .iter()
        .cloned()
        .try_fold(MeanAndVar::empty(vec![]), |acc, p| acc.combine(p))?;
    let backward = parts
        .iter()
        .rev()
        .cloned()
        .try_fold(MeanAndVar::empty(vec![]), |acc, p| acc.combine(p))?;
    let paired = parts[0]
        .clone()
        .combine(parts[1].clone())?
        .combine(parts[2].clone().combine(parts[3].clone())?)?;

    for r in [&forward, &backward, &paired] {
        assert_eq!(r.count, vec![4]);
        assert_relative_eq!(r.mean[0], 2.5, epsilon = 1e-12);
        assert_relative_eq!(r.var[0], 1.25, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_combine_with_empty_group_is_identity() -> Result<(), StatsError> {
    let a = MeanAndVar::<f32> {
        count: vec![2, 0],
        mean: vec![3.0, 0.0],
        var: vec![1.0, 0.0],
        shape: vec![2],
    };
    let merged = a.clone().combine(MeanAndVar::empty(vec![2]))?;
    assert_eq!(merged, a);
    Ok(())
}

#[test]
fn test_mean_and_var_per_key_dense() -> Result<(), StatsError> {
    let x = dense_f32(vec![1., 2., 3., 4., 4.], vec![5, 1]);
    let key = Batch::from(from_strs(&["a", "a", "a", "b", "a"], vec![5])?);
    let r = reduce_batch_count_mean_and_var_per_key::<f32>(&x, &key, true)?;
    assert_eq!(r.key_vocab, vec![VocabKey::from("a"), VocabKey::from("b")]);
    assert_eq!(r.rows.iter().map(|p| p.count[0]).collect::<Vec<_>>(), vec![4, 1]);
    assert_eq!(r.rows.iter().map(|p| p.mean[0]).collect::<Vec<_>>(), vec![2.5, 4.0]);
    assert_eq!(r.rows.iter().map(|p| p.var[0]).collect::<Vec<_>>(), vec![1.25, 0.0]);
    Ok(())
}

#[test]
fn test_mean_and_var_per_key_elementwise() -> Result<(), StatsError> {
    let x = dense_f32(vec![1., 2., 3., 4., 1., 2.], vec![3, 2]);
    let key = Batch::from(from_strs(&["a", "a", "b"], vec![3])?);
    let r = reduce_batch_count_mean_and_var_per_key::<f32>(&x, &key, false)?;
    assert_eq!(r.rows[0].count, vec![2, 2]);
    assert_eq!(r.rows[0].mean, vec![2.0, 3.0]);
    assert_eq!(r.rows[0].var, vec![1.0, 1.0]);
    assert_eq!(r.rows[1].count, vec![1, 1]);
    assert_eq!(r.rows[1].mean, vec![1.0, 2.0]);
    assert_eq!(r.rows[1].var, vec![0.0, 0.0]);
    Ok(())
}

fn sparse_x() -> SparseTensor {
    SparseTensor::new(
        vec![vec![0, 0], vec![0, 2], vec![1, 1], vec![1, 2], vec![2, 3]],
        from_vec_f32(vec![1., 2., 3., 4., 4.], vec![5]).unwrap(),
        vec![3, 4],
    )
    .unwrap()
}

#[test]
fn test_mean_and_var_per_key_sparse_key() -> Result<(), StatsError> {
    let key = SparseTensor::new(
        vec![vec![0, 0], vec![0, 2], vec![1, 1], vec![1, 2], vec![2, 3]],
        from_strs(&["a", "a", "a", "a", "b"], vec![5])?,
        vec![3, 4],
    )?;
    let r = reduce_batch_count_mean_and_var_per_key::<f32>(
        &Batch::from(sparse_x()),
        &Batch::from(key),
        true,
    )?;
    assert_eq!(r.rows.iter().map(|p| p.count[0]).collect::<Vec<_>>(), vec![4, 1]);
    assert_eq!(r.rows.iter().map(|p| p.mean[0]).collect::<Vec<_>>(), vec![2.5, 4.0]);
    assert_eq!(r.rows.iter().map(|p| p.var[0]).collect::<Vec<_>>(), vec![1.25, 0.0]);
    Ok(())
}

#[test]
fn test_mean_and_var_per_key_sparse_x_dense_key() -> Result<(), StatsError> {
    let key = Batch::from(from_strs(&["a", "a", "b"], vec![3])?);
    let r = reduce_batch_count_mean_and_var_per_key::<f32>(&Batch::from(sparse_x()), &key, true)?;
    assert_eq!(r.key_vocab, vec![VocabKey::from("a"), VocabKey::from("b")]);
    assert_eq!(r.rows.iter().map(|p| p.count[0]).collect::<Vec<_>>(), vec![4, 1]);
    assert_eq!(r.rows.iter().map(|p| p.mean[0]).collect::<Vec<_>>(), vec![2.5, 4.0]);
    assert_eq!(r.rows.iter().map(|p| p.var[0]).collect::<Vec<_>>(), vec![1.25, 0.0]);
    Ok(())
}
