use super::*;
use crate::tensor::{from_strs, from_vec_f32, from_vec_i32};

fn keys(values: &[&str]) -> Vec<VocabKey> {
    values.iter().map(|&s| VocabKey::from(s)).collect()
}

#[test]
fn test_build_vocabulary_first_seen_order() {
    let (vocab, ids) = build_vocabulary(keys(&["a", "b", "a"]));
    assert_eq!(vocab, keys(&["a", "b"]));
    assert_eq!(ids, vec![0, 1, 0]);
}

#[test]
fn test_build_vocabulary_composite_keys() {
    let (vocab, ids) = build_vocabulary(vec![(1usize, "x"), (0, "x"), (1, "x"), (0, "y")]);
    assert_eq!(vocab, vec![(1, "x"), (0, "x"), (0, "y")]);
    assert_eq!(ids, vec![0, 1, 0, 2]);
}

#[test]
fn test_build_vocabulary_empty() {
    let (vocab, ids) = build_vocabulary(Vec::<VocabKey>::new());
    assert!(vocab.is_empty());
    assert!(ids.is_empty());
}

#[test]
fn test_builder_extends_existing_vocabulary() {
    let mut builder = VocabularyBuilder::from_vocabulary(&keys(&["foo", "bar"]));
    assert_eq!(builder.insert("baz".into()), 2);
    assert_eq!(builder.insert("foo".into()), 0);
    assert_eq!(builder.get(&"qux".into()), None);
    assert_eq!(builder.len(), 3);
}

#[test]
fn test_lookup_key() -> Result<(), StatsError> {
    let k = from_strs(&["a", "a", "a", "b", "b", "b", "b"], vec![7])?;
    let ids = lookup_key(&k, &keys(&["a", "b"]))?;
    assert_eq!(ids.get_i64_data()?, vec![0, 0, 0, 1, 1, 1, 1]);
    assert_eq!(ids.shape(), &[7]);
    Ok(())
}

#[test]
fn test_lookup_key_missing_is_minus_one() -> Result<(), StatsError> {
    let k = from_strs(&["a", "c"], vec![1, 2])?;
    let ids = lookup_key(&k, &keys(&["a", "b"]))?;
    assert_eq!(ids.get_i64_data()?, vec![0, -1]);
    assert_eq!(ids.shape(), &[1, 2]);
    Ok(())
}

#[test]
fn test_integer_keys() -> Result<(), StatsError> {
    let k = from_vec_i32(vec![7, 3, 7], vec![3])?;
    let converted = VocabKey::from_buffer(k.buffer(), "test")?;
    assert_eq!(converted, vec![VocabKey::Int(7), VocabKey::Int(3), VocabKey::Int(7)]);
    assert_eq!(format!("{}", converted[0]), "7");
    Ok(())
}

#[test]
fn test_float_keys_unsupported() -> Result<(), StatsError> {
    let k = from_vec_f32(vec![1.0], vec![1])?;
    assert!(matches!(
        lookup_key(&k, &[]),
        Err(StatsError::UnsupportedElementType { dtype: DType::F32, .. })
    ));
    Ok(())
}
