//! First-seen-order vocabularies over keys and values.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::buffer::Buffer;
use crate::error::StatsError;
use crate::tensor::Tensor;
use crate::types::DType;

/// A categorical key or value usable as a vocabulary entry.
///
/// Strings and integers are supported. Float batches cannot be used as keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VocabKey {
    Str(String),
    Int(i64),
}

impl VocabKey {
    /// Converts every element of a buffer into a `VocabKey`.
    ///
    /// # Errors
    /// `UnsupportedElementType` for `F32`/`F64` buffers.
    pub fn from_buffer(buffer: &Buffer, operation: &str) -> Result<Vec<VocabKey>, StatsError> {
        match buffer {
            Buffer::Str(v) => Ok(v.iter().map(|s| VocabKey::Str(s.clone())).collect()),
            Buffer::I32(v) => Ok(v.iter().map(|&i| VocabKey::Int(i as i64)).collect()),
            Buffer::I64(v) => Ok(v.iter().map(|&i| VocabKey::Int(i)).collect()),
            Buffer::F32(_) => Err(StatsError::unsupported(DType::F32, operation)),
            Buffer::F64(_) => Err(StatsError::unsupported(DType::F64, operation)),
        }
    }

    /// Returns the key selected by `positions` out of a buffer.
    pub(crate) fn gather(
        buffer: &Buffer,
        positions: &[usize],
        operation: &str,
    ) -> Result<Vec<VocabKey>, StatsError> {
        VocabKey::from_buffer(&buffer.gather(positions), operation)
    }
}

impl fmt::Display for VocabKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabKey::Str(s) => write!(f, "{}", s),
            VocabKey::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for VocabKey {
    fn from(s: &str) -> Self {
        VocabKey::Str(s.to_string())
    }
}

impl From<String> for VocabKey {
    fn from(s: String) -> Self {
        VocabKey::Str(s)
    }
}

impl From<i64> for VocabKey {
    fn from(i: i64) -> Self {
        VocabKey::Int(i)
    }
}

/// Assigns dense ids to keys in strict first-occurrence order.
///
/// Generic over any `Eq + Hash + Clone` key, so composite keys such as
/// `(usize, VocabKey)` tuples work the same as plain keys.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder<K> {
    ids: HashMap<K, usize>,
    vocabulary: Vec<K>,
}

impl<K: Eq + Hash + Clone> Default for VocabularyBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> VocabularyBuilder<K> {
    pub fn new() -> Self {
        VocabularyBuilder {
            ids: HashMap::new(),
            vocabulary: Vec::new(),
        }
    }

    /// Starts from an existing vocabulary, keeping its order.
    pub fn from_vocabulary(vocabulary: &[K]) -> Self {
        let mut builder = Self::new();
        for key in vocabulary {
            builder.insert(key.clone());
        }
        builder
    }

    /// Returns the id of `key`, assigning the next id if it is new.
    pub fn insert(&mut self, key: K) -> usize {
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }
        let id = self.vocabulary.len();
        self.ids.insert(key.clone(), id);
        self.vocabulary.push(key);
        id
    }

    pub fn get(&self, key: &K) -> Option<usize> {
        self.ids.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    pub fn vocabulary(&self) -> &[K] {
        &self.vocabulary
    }

    pub fn into_vocabulary(self) -> Vec<K> {
        self.vocabulary
    }
}

/// Builds `(vocabulary, id_per_input)` for a flat sequence of keys.
///
/// `['a', 'b', 'a']` gives `(['a', 'b'], [0, 1, 0])`.
pub fn build_vocabulary<K, I>(keys: I) -> (Vec<K>, Vec<usize>)
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut builder = VocabularyBuilder::new();
    let ids = keys.into_iter().map(|k| builder.insert(k)).collect();
    (builder.into_vocabulary(), ids)
}

/// Looks up the vocabulary id of every key in `keys`.
///
/// Returns an `I64` tensor with the shape of `keys`; keys absent from
/// `vocabulary` map to `-1`.
pub fn lookup_key(keys: &Tensor, vocabulary: &[VocabKey]) -> Result<Tensor, StatsError> {
    let builder = VocabularyBuilder::from_vocabulary(vocabulary);
    let ids = VocabKey::from_buffer(keys.buffer(), "lookup_key")?
        .iter()
        .map(|k| builder.get(k).map_or(-1, |id| id as i64))
        .collect();
    Tensor::new_i64(ids, keys.shape().to_vec())
}

#[cfg(test)]
#[path = "vocabulary_test.rs"]
mod tests;
