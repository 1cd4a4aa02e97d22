//! Grouping helpers shared by the reducers.

use crate::adapter::{resolve_instance_keys, InstanceLayout};
use crate::batch::Batch;
use crate::error::StatsError;
use crate::ops::reduction::per_key::PerKey;
use crate::vocabulary::{build_vocabulary, VocabKey};

/// Assignment of every instance to an output group.
///
/// Groups are laid out key-major: the two-level key `(key_id, position)` maps
/// to `key_id * groups_per_key + position`. Without a key there is a single
/// implicit key; with `reduce_instance_dims` there is a single position.
#[derive(Debug, Clone)]
pub(crate) struct Grouping {
    pub(crate) group_ids: Vec<usize>,
    pub(crate) num_groups: usize,
    pub(crate) groups_per_key: usize,
    /// Shape of one key's output: `[]` when reducing instance dims, else the feature shape.
    pub(crate) group_shape: Vec<usize>,
    pub(crate) key_vocab: Option<Vec<VocabKey>>,
}

impl Grouping {
    pub(crate) fn new(
        layout: &InstanceLayout,
        keys: Option<Vec<VocabKey>>,
        reduce_instance_dims: bool,
    ) -> Self {
        let (groups_per_key, group_shape) = if reduce_instance_dims {
            (1, Vec::new())
        } else {
            (layout.num_positions(), layout.feature_shape.clone())
        };
        let position_of = |i: usize| {
            if reduce_instance_dims {
                0
            } else {
                layout.positions[i]
            }
        };
        match keys {
            None => Grouping {
                group_ids: (0..layout.num_instances()).map(position_of).collect(),
                num_groups: groups_per_key,
                groups_per_key,
                group_shape,
                key_vocab: None,
            },
            Some(keys) => {
                let (key_vocab, key_ids) = build_vocabulary(keys);
                let group_ids = key_ids
                    .iter()
                    .enumerate()
                    .map(|(i, &k)| k * groups_per_key + position_of(i))
                    .collect();
                Grouping {
                    group_ids,
                    num_groups: key_vocab.len() * groups_per_key,
                    groups_per_key,
                    group_shape,
                    key_vocab: Some(key_vocab),
                }
            }
        }
    }

    /// Lays out `x` and groups its instances, resolving `key` when given.
    pub(crate) fn for_batch(
        x: &Batch,
        key: Option<&Batch>,
        reduce_instance_dims: bool,
        operation: &str,
    ) -> Result<(InstanceLayout, Grouping), StatsError> {
        let layout = InstanceLayout::from_batch(x);
        let keys = match key {
            Some(k) => Some(resolve_instance_keys(x, &layout, k, operation)?),
            None => None,
        };
        let grouping = Grouping::new(&layout, keys, reduce_instance_dims);
        Ok((layout, grouping))
    }

    /// Collects the values of each group, preserving instance order.
    pub(crate) fn segment<T: Copy>(&self, values: &[T]) -> Vec<Vec<T>> {
        let mut segments = vec![Vec::new(); self.num_groups];
        for (&g, &v) in self.group_ids.iter().zip(values) {
            segments[g].push(v);
        }
        segments
    }

    /// Splits key-major per-group results into one partial per key.
    ///
    /// `build` receives the slice of group indices belonging to one key.
    pub(crate) fn split_per_key<P>(
        &self,
        mut build: impl FnMut(std::ops::Range<usize>) -> P,
    ) -> Result<PerKey<P>, StatsError> {
        let key_vocab = self.key_vocab.clone().ok_or_else(|| {
            StatsError::InternalError("split_per_key called on an unkeyed grouping".to_string())
        })?;
        let rows = (0..key_vocab.len())
            .map(|k| build(k * self.groups_per_key..(k + 1) * self.groups_per_key))
            .collect();
        Ok(PerKey { key_vocab, rows })
    }
}

/// Fails with `ShapeMismatch` unless two positional partials share a shape.
pub(crate) fn check_partial_shapes(
    a: &[usize],
    b: &[usize],
    operation: &str,
) -> Result<(), StatsError> {
    if a != b {
        return Err(StatsError::shape_mismatch(a, b, operation));
    }
    Ok(())
}
