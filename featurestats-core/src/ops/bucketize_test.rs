use super::*;
use crate::tensor::{from_strs, from_vec_f32, from_vec_f64};

fn buckets_of(batch: Batch) -> Vec<i64> {
    match batch {
        Batch::Dense(t) => t.get_i64_data().unwrap(),
        Batch::Sparse(sp) => sp.values().get_i64_data().unwrap(),
    }
}

#[test]
fn test_bucketize_caps_at_last_boundary() -> Result<(), StatsError> {
    let x = Batch::from(from_vec_f32(vec![0.0, 2.0, 3.5, 4.0], vec![4])?);
    let b = Boundaries::Global(vec![1.0f32, 2.0, 3.0, 3.9]);
    assert_eq!(buckets_of(apply_bucketize_op(&x, &b, false)?), vec![0, 1, 3, 3]);
    Ok(())
}

#[test]
fn test_bucketize_remove_leftmost_boundary() -> Result<(), StatsError> {
    let x = Batch::from(from_vec_f32(vec![0.0, 4.0, 3.5, 2.0, 1.7], vec![5])?);
    let b = Boundaries::Global(vec![-1.0f32, 1.0, 2.0, 3.0, 5.0]);
    assert_eq!(buckets_of(apply_bucketize_op(&x, &b, true)?), vec![0, 3, 3, 1, 1]);
    Ok(())
}

#[test]
fn test_bucketize_per_feature_boundaries() -> Result<(), StatsError> {
    let x = Batch::from(from_vec_f64(vec![1.5, 1.5, 10.0, 0.0], vec![2, 2])?);
    let b = Boundaries::PerFeature(vec![vec![1.0, 2.0, 3.0], vec![0.0, 5.0, 20.0]]);
    let out = apply_bucketize_op(&x, &b, false)?;
    assert_eq!(out.shape(), &[2, 2]);
    assert_eq!(buckets_of(out), vec![1, 1, 2, 0]);
    Ok(())
}

#[test]
fn test_bucketize_sparse_keeps_indices() -> Result<(), StatsError> {
    let x = Batch::Sparse(SparseTensor::new(
        vec![vec![0, 1], vec![2, 0]],
        from_vec_f32(vec![2.5, -3.0], vec![2])?,
        vec![3, 2],
    )?);
    let out = apply_bucketize_op(&x, &Boundaries::Global(vec![0.0f32, 1.0, 2.0, 3.0]), false)?;
    match &out {
        Batch::Sparse(sp) => assert_eq!(sp.indices(), &[vec![0, 1], vec![2, 0]]),
        Batch::Dense(_) => panic!("expected a sparse batch"),
    }
    assert_eq!(buckets_of(out), vec![3, 0]);
    Ok(())
}

#[test]
fn test_bucketize_rejects_bad_boundaries() -> Result<(), StatsError> {
    let x = Batch::from(from_vec_f64(vec![1.0, 2.0], vec![1, 2])?);
    assert!(matches!(
        apply_bucketize_op(&x, &Boundaries::Global(vec![2.0, 1.0]), false),
        Err(StatsError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        apply_bucketize_op(&x, &Boundaries::PerFeature(vec![vec![1.0]]), false),
        Err(StatsError::ShapeMismatch { .. })
    ));
    let s = Batch::from(from_strs(&["a"], vec![1])?);
    assert!(matches!(
        apply_bucketize_op(&s, &Boundaries::Global(vec![1.0f64]), false),
        Err(StatsError::UnsupportedElementType { .. })
    ));
    Ok(())
}
