//! Per-key partials and broadcasting per-key results back to instances.

use crate::adapter::{resolve_instance_keys, InstanceLayout};
use crate::batch::Batch;
use crate::error::StatsError;
use crate::ops::reduction::combine::Combine;
use crate::vocabulary::{VocabKey, VocabularyBuilder};

/// A partial statistic split by grouping key.
///
/// `rows[i]` is the partial for `key_vocab[i]`; keys appear in first-seen
/// order. Two `PerKey` values combine by aligning rows on their keys.
#[derive(Debug, Clone, PartialEq)]
pub struct PerKey<P> {
    pub key_vocab: Vec<VocabKey>,
    pub rows: Vec<P>,
}

impl<P> PerKey<P> {
    pub fn len(&self) -> usize {
        self.key_vocab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_vocab.is_empty()
    }

    /// The partial for `key`, if the key was seen.
    pub fn get(&self, key: &VocabKey) -> Option<&P> {
        self.key_vocab
            .iter()
            .position(|k| k == key)
            .map(|i| &self.rows[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VocabKey, &P)> {
        self.key_vocab.iter().zip(&self.rows)
    }
}

impl<P: Combine> Combine for PerKey<P> {
    fn combine(self, other: Self) -> Result<Self, StatsError> {
        let mut builder = VocabularyBuilder::from_vocabulary(&self.key_vocab);
        let mut rows: Vec<Option<P>> = self.rows.into_iter().map(Some).collect();
        for (key, row) in other.key_vocab.into_iter().zip(other.rows) {
            match builder.get(&key) {
                Some(id) => {
                    let merged = match rows[id].take() {
                        Some(existing) => existing.combine(row)?,
                        None => row,
                    };
                    rows[id] = Some(merged);
                }
                None => {
                    builder.insert(key);
                    rows.push(Some(row));
                }
            }
        }
        let rows = rows
            .into_iter()
            .collect::<Option<Vec<P>>>()
            .ok_or_else(|| StatsError::InternalError("per-key row lost during combine".to_string()))?;
        Ok(PerKey {
            key_vocab: builder.into_vocabulary(),
            rows,
        })
    }
}

/// Broadcasts per-key reductions back onto the instances of `x`.
///
/// Each entry of `reductions` holds one value per key of `key_vocab`. The
/// result holds, for each reduction, the value of every instance's key, in
/// instance order. A dense per-row key is expanded over sparse entries by row.
///
/// # Errors
/// - `ShapeMismatch` if a reduction's length differs from `key_vocab`, or the
///   key does not align with `x`.
/// - `KeyNotInVocabulary` if an instance's key is missing from `key_vocab`.
pub fn map_per_key_reductions<T: Clone>(
    reductions: &[Vec<T>],
    key: &Batch,
    key_vocab: &[VocabKey],
    x: &Batch,
) -> Result<Vec<Vec<T>>, StatsError> {
    const OP: &str = "map_per_key_reductions";
    for r in reductions {
        if r.len() != key_vocab.len() {
            return Err(StatsError::shape_mismatch(
                [key_vocab.len()],
                [r.len()],
                OP,
            ));
        }
    }
    let layout = InstanceLayout::from_batch(x);
    let keys = resolve_instance_keys(x, &layout, key, OP)?;
    let builder = VocabularyBuilder::from_vocabulary(key_vocab);
    let ids = keys
        .iter()
        .map(|k| {
            builder
                .get(k)
                .ok_or_else(|| StatsError::KeyNotInVocabulary(k.to_string()))
        })
        .collect::<Result<Vec<usize>, StatsError>>()?;
    Ok(reductions
        .iter()
        .map(|r| ids.iter().map(|&id| r[id].clone()).collect())
        .collect())
}

#[cfg(test)]
#[path = "per_key_test.rs"]
mod tests;
