use crate::error::StatsError;

/// Reorders bucket counts into a dense histogram indexed by bucket number.
///
/// `bucket_vocab[i]` is the decimal bucket index whose count is `counts[i]`.
/// Buckets absent from the vocabulary count zero; repeated buckets add up.
///
/// # Errors
/// - `ShapeMismatch` if `bucket_vocab` and `counts` differ in length.
/// - `InvalidConfiguration` if a bucket string is not a non-negative integer.
/// - `IndexOutOfBounds` if a bucket index is `>= size`.
pub fn reorder_histogram<S: AsRef<str>>(
    bucket_vocab: &[S],
    counts: &[i64],
    size: usize,
) -> Result<Vec<i64>, StatsError> {
    if bucket_vocab.len() != counts.len() {
        return Err(StatsError::shape_mismatch(
            [bucket_vocab.len()],
            [counts.len()],
            "reorder_histogram",
        ));
    }
    let mut histogram = vec![0i64; size];
    for (bucket, &count) in bucket_vocab.iter().zip(counts) {
        let bucket = bucket.as_ref();
        let index: usize = bucket.trim().parse().map_err(|_| {
            StatsError::InvalidConfiguration(format!(
                "reorder_histogram: bucket {:?} is not a bucket index",
                bucket
            ))
        })?;
        if index >= size {
            return Err(StatsError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![size],
            });
        }
        histogram[index] += count;
    }
    Ok(histogram)
}
