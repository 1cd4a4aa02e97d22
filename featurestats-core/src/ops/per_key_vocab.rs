//! Lookup of per-key auxiliary records.

use std::collections::HashMap;

use crate::error::StatsError;
use crate::tensor::Tensor;

/// Maps a key to a record of integers, parsed from `"<record> <key>"` lines
/// where the record is comma separated, e.g. `"1,-1 b"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerKeyVocabulary {
    records: HashMap<String, Vec<i64>>,
}

impl PerKeyVocabulary {
    /// Parses one entry per non-empty line. A key seen twice keeps its first record.
    ///
    /// # Errors
    /// `InvalidConfiguration` naming the offending line when a line has no
    /// key or its record is not a list of integers.
    pub fn from_lines(text: &str) -> Result<Self, StatsError> {
        let mut records = HashMap::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (record, key) = line.split_once(' ').ok_or_else(|| {
                StatsError::InvalidConfiguration(format!(
                    "per-key vocabulary line {}: expected \"<record> <key>\", got {:?}",
                    line_no + 1,
                    line
                ))
            })?;
            let record = parse_record(record).map_err(|e| {
                StatsError::InvalidConfiguration(format!(
                    "per-key vocabulary line {}: {}",
                    line_no + 1,
                    e
                ))
            })?;
            records.entry(key.to_string()).or_insert(record);
        }
        log::debug!("PerKeyVocabulary: parsed {} keys", records.len());
        Ok(PerKeyVocabulary { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[i64]> {
        self.records.get(key).map(Vec::as_slice)
    }

    /// The record of every key in the string tensor `keys`, or `default`
    /// for keys not in the vocabulary.
    pub fn apply(&self, keys: &Tensor, default: &[i64]) -> Result<Vec<Vec<i64>>, StatsError> {
        Ok(keys
            .buffer()
            .try_get_str()?
            .iter()
            .map(|k| self.get(k).unwrap_or(default).to_vec())
            .collect())
    }
}

/// Parses a comma-separated record such as `"0,-5"`.
pub fn parse_record(record: &str) -> Result<Vec<i64>, String> {
    record
        .split(',')
        .map(|field| {
            field
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("record field {:?} is not an integer", field))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::from_strs;

    #[test]
    fn test_apply_per_key_vocabulary() -> Result<(), StatsError> {
        let vocab = PerKeyVocabulary::from_lines("0,0 a\n1,-1 b\n-1,1 c\n-2,2 d")?;
        assert_eq!(vocab.len(), 4);
        let keys = from_strs(&["a", "b", "c", "d", "e"], vec![5])?;
        let default = parse_record("0,-5").map_err(StatsError::InvalidConfiguration)?;
        let out = vocab.apply(&keys, &default)?;
        assert_eq!(
            out,
            vec![vec![0, 0], vec![1, -1], vec![-1, 1], vec![-2, 2], vec![0, -5]]
        );
        Ok(())
    }

    #[test]
    fn test_from_lines_rejects_malformed_lines() {
        assert!(matches!(
            PerKeyVocabulary::from_lines("0,0"),
            Err(StatsError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            PerKeyVocabulary::from_lines("0,x a"),
            Err(StatsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_from_lines_skips_blank_lines_and_keeps_first() -> Result<(), StatsError> {
        let vocab = PerKeyVocabulary::from_lines("\n1 a\n\n2 a\n")?;
        assert_eq!(vocab.get("a"), Some(&[1][..]));
        Ok(())
    }
}
