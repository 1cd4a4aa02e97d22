//! Weighted counts of unique values, optionally co-occurring with a label.

use std::fmt;

use crate::adapter::{align_to_instances, InstanceLayout};
use crate::batch::Batch;
use crate::error::StatsError;
use crate::ops::reduction::combine::Combine;
use crate::tensor::Tensor;
use crate::vocabulary::{VocabKey, VocabularyBuilder};

/// Display name of the row carrying label totals.
pub const GLOBAL_Y_COUNT_SENTINEL: &str = "global_y_count_sentinel";

/// An entry of a weighted-count vocabulary: a real value, or the reserved
/// row that carries totals over the label batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UniqueEntry {
    Value(VocabKey),
    Sentinel,
}

impl fmt::Display for UniqueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueEntry::Value(k) => write!(f, "{}", k),
            UniqueEntry::Sentinel => write!(f, "{}", GLOBAL_Y_COUNT_SENTINEL),
        }
    }
}

impl From<&str> for UniqueEntry {
    fn from(s: &str) -> Self {
        UniqueEntry::Value(VocabKey::from(s))
    }
}

/// Weighted-count partial.
///
/// Row `i` of every present field describes `unique_x[i]`. Which fields are
/// present depends on the producing reducer:
/// - weighted counts with weights: `summed_weights_per_x` only;
/// - weighted counts without weights: none, and `unique_x` is the raw
///   (not deduplicated) value sequence;
/// - co-occurrences: all three, with [`UniqueEntry::Sentinel`] as the last row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedBatchWeightedCounts {
    pub unique_x: Vec<UniqueEntry>,
    pub summed_weights_per_x: Option<Vec<f64>>,
    /// `unique_x.len() x num_labels` table of summed weights per label.
    pub summed_positive_per_x_and_y: Option<Vec<Vec<f64>>>,
    pub counts_per_x: Option<Vec<u64>>,
}

/// Row-wise sums keyed by row index, widening label tables on demand.
#[derive(Debug, Default)]
struct RowAccumulator {
    weights: Vec<f64>,
    positives: Vec<Vec<f64>>,
    counts: Vec<u64>,
    num_labels: usize,
}

impl RowAccumulator {
    fn with_labels(num_labels: usize) -> Self {
        RowAccumulator {
            num_labels,
            ..Default::default()
        }
    }

    fn ensure_row(&mut self, row: usize) {
        while self.weights.len() <= row {
            self.weights.push(0.0);
            self.positives.push(vec![0.0; self.num_labels]);
            self.counts.push(0);
        }
    }

    fn add(&mut self, row: usize, weight: f64, positive: Option<&[f64]>, count: u64) {
        self.ensure_row(row);
        self.weights[row] += weight;
        self.counts[row] += count;
        if let Some(p) = positive {
            for (slot, &v) in self.positives[row].iter_mut().zip(p) {
                *slot += v;
            }
        }
    }

    fn add_label(&mut self, row: usize, weight: f64, label: usize) {
        self.ensure_row(row);
        self.weights[row] += weight;
        self.counts[row] += 1;
        self.positives[row][label] += weight;
    }
}

fn read_labels(y: &Tensor, operation: &str) -> Result<Vec<usize>, StatsError> {
    y.get_integer_data()?
        .into_iter()
        .map(|l| {
            usize::try_from(l).map_err(|_| {
                StatsError::InvalidConfiguration(format!(
                    "{}: labels must be non-negative, got {}",
                    operation, l
                ))
            })
        })
        .collect()
}

/// One weight per element of `y`; all ones when `weights` is absent.
fn read_label_weights(
    y: &Tensor,
    weights: Option<&Tensor>,
    operation: &str,
) -> Result<Vec<f64>, StatsError> {
    match weights {
        None => Ok(vec![1.0; y.numel()]),
        Some(w) => {
            if w.shape() != y.shape() {
                return Err(StatsError::shape_mismatch(y.shape(), w.shape(), operation));
            }
            w.get_numeric_data_f64()
        }
    }
}

fn num_labels_of(labels: &[usize]) -> usize {
    labels.iter().max().map_or(0, |&m| m + 1)
}

/// Totals over the label batch: the sentinel row.
fn label_totals(labels: &[usize], weights: &[f64], num_labels: usize) -> RowAccumulator {
    let mut totals = RowAccumulator::with_labels(num_labels);
    totals.ensure_row(0);
    for (&l, &w) in labels.iter().zip(weights) {
        totals.add_label(0, w, l);
    }
    totals
}

/// Sums `weights` per unique value of `x`, in first-seen order.
///
/// Without weights, `unique_x` is the flattened value sequence itself and
/// all other fields are `None`; deduplication happens on combine.
///
/// # Errors
/// - `UnsupportedElementType` for float batches.
/// - `ShapeMismatch` / `InvalidConfiguration` when `weights` does not align
///   with `x` per element or per row.
pub fn reduce_batch_weighted_counts(
    x: &Batch,
    weights: Option<&Tensor>,
) -> Result<ReducedBatchWeightedCounts, StatsError> {
    const OP: &str = "reduce_batch_weighted_counts";
    log::debug!(
        "{}: shape={:?}, dtype={:?}, weighted={}",
        OP,
        x.shape(),
        x.dtype(),
        weights.is_some()
    );
    let layout = InstanceLayout::from_batch(x);
    let values = VocabKey::from_buffer(&layout.values, OP)?;
    let w = match weights {
        None => {
            return Ok(ReducedBatchWeightedCounts {
                unique_x: values.into_iter().map(UniqueEntry::Value).collect(),
                summed_weights_per_x: None,
                summed_positive_per_x_and_y: None,
                counts_per_x: None,
            });
        }
        Some(w) => w,
    };
    let offsets = align_to_instances(x, &layout, w, OP)?;
    let w_data = w.get_numeric_data_f64()?;
    let mut builder = VocabularyBuilder::new();
    let mut summed = Vec::new();
    for (value, &o) in values.into_iter().zip(&offsets) {
        let id = builder.insert(UniqueEntry::Value(value));
        if id == summed.len() {
            summed.push(0.0);
        }
        summed[id] += w_data[o];
    }
    Ok(ReducedBatchWeightedCounts {
        unique_x: builder.into_vocabulary(),
        summed_weights_per_x: Some(summed),
        summed_positive_per_x_and_y: None,
        counts_per_x: None,
    })
}

/// Per unique value of `x`: summed weight, summed weight per label of `y`
/// and raw instance count, followed by the sentinel row.
///
/// `y` holds integer labels aligned to the instances of `x`, or one label per
/// row. `weights`, when given, has `y`'s shape. The label domain is
/// `0..=max(y)`; labels absent from the batch get zero columns. The sentinel
/// row holds totals over `y` itself, so rows of a sparse batch without
/// entries still count toward it.
pub fn reduce_batch_weighted_cooccurrences(
    x: &Batch,
    y: &Tensor,
    weights: Option<&Tensor>,
) -> Result<ReducedBatchWeightedCounts, StatsError> {
    const OP: &str = "reduce_batch_weighted_cooccurrences";
    log::debug!(
        "{}: shape={:?}, dtype={:?}, label shape={:?}",
        OP,
        x.shape(),
        x.dtype(),
        y.shape()
    );
    let layout = InstanceLayout::from_batch(x);
    let values = VocabKey::from_buffer(&layout.values, OP)?;
    let labels = read_labels(y, OP)?;
    let label_weights = read_label_weights(y, weights, OP)?;
    let offsets = align_to_instances(x, &layout, y, OP)?;
    let num_labels = num_labels_of(&labels);

    let mut builder = VocabularyBuilder::new();
    let mut rows = RowAccumulator::with_labels(num_labels);
    for (value, &o) in values.into_iter().zip(&offsets) {
        let id = builder.insert(UniqueEntry::Value(value));
        rows.add_label(id, label_weights[o], labels[o]);
    }
    let totals = label_totals(&labels, &label_weights, num_labels);

    let mut unique_x = builder.into_vocabulary();
    unique_x.push(UniqueEntry::Sentinel);
    rows.weights.extend(totals.weights);
    rows.positives.extend(totals.positives);
    rows.counts.extend(totals.counts);
    Ok(ReducedBatchWeightedCounts {
        unique_x,
        summed_weights_per_x: Some(rows.weights),
        summed_positive_per_x_and_y: Some(rows.positives),
        counts_per_x: Some(rows.counts),
    })
}

/// Appends the sentinel row computed from `y` (and `weights`) to `partial`.
///
/// Label tables are widened to the larger of the existing width and
/// `max(y) + 1`.
///
/// # Errors
/// `InvalidConfiguration` if `partial` lacks the co-occurrence fields or
/// already carries a sentinel row.
pub fn extend_reduced_batch_with_y_counts(
    partial: ReducedBatchWeightedCounts,
    y: &Tensor,
    weights: Option<&Tensor>,
) -> Result<ReducedBatchWeightedCounts, StatsError> {
    const OP: &str = "extend_reduced_batch_with_y_counts";
    if partial.unique_x.contains(&UniqueEntry::Sentinel) {
        return Err(StatsError::InvalidConfiguration(format!(
            "{}: partial already has a {} row",
            OP, GLOBAL_Y_COUNT_SENTINEL
        )));
    }
    let (mut summed, mut positives, mut counts) = match (
        partial.summed_weights_per_x,
        partial.summed_positive_per_x_and_y,
        partial.counts_per_x,
    ) {
        (Some(w), Some(p), Some(c)) => (w, p, c),
        _ => {
            return Err(StatsError::InvalidConfiguration(format!(
                "{}: partial must carry weights, positives and counts",
                OP
            )))
        }
    };
    let labels = read_labels(y, OP)?;
    let label_weights = read_label_weights(y, weights, OP)?;
    let width = positives
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(num_labels_of(&labels));
    for row in positives.iter_mut() {
        row.resize(width, 0.0);
    }
    let totals = label_totals(&labels, &label_weights, width);

    let mut unique_x = partial.unique_x;
    unique_x.push(UniqueEntry::Sentinel);
    summed.extend(totals.weights);
    positives.extend(totals.positives);
    counts.extend(totals.counts);
    Ok(ReducedBatchWeightedCounts {
        unique_x,
        summed_weights_per_x: Some(summed),
        summed_positive_per_x_and_y: Some(positives),
        counts_per_x: Some(counts),
    })
}

impl ReducedBatchWeightedCounts {
    /// Number of label columns, if this partial has a label table.
    pub fn num_labels(&self) -> Option<usize> {
        self.summed_positive_per_x_and_y
            .as_ref()
            .map(|p| p.iter().map(Vec::len).max().unwrap_or(0))
    }

    /// Folds this partial's rows into `values` and `sentinel`.
    ///
    /// A partial without weights counts each listed occurrence with weight 1.
    fn accumulate_into(
        self,
        builder: &mut VocabularyBuilder<UniqueEntry>,
        values: &mut RowAccumulator,
        sentinel: &mut Option<RowAccumulator>,
    ) {
        let n = self.unique_x.len();
        let weights = self.summed_weights_per_x.unwrap_or_else(|| vec![1.0; n]);
        let counts = self.counts_per_x.unwrap_or_else(|| vec![1; n]);
        let positives = self.summed_positive_per_x_and_y;
        let num_labels = values.num_labels;
        for (i, entry) in self.unique_x.into_iter().enumerate() {
            let p = positives.as_ref().map(|p| p[i].as_slice());
            match entry {
                UniqueEntry::Sentinel => sentinel
                    .get_or_insert_with(|| RowAccumulator::with_labels(num_labels))
                    .add(0, weights[i], p, counts[i]),
                value => {
                    let id = builder.insert(value);
                    values.add(id, weights[i], p, counts[i]);
                }
            }
        }
    }
}

impl Combine for ReducedBatchWeightedCounts {
    /// Union of the two vocabularies (this partial's order first), with
    /// rows summed elementwise. The sentinel row, if any, stays last.
    ///
    /// Fields missing on either side are missing in the result, except that
    /// summed weights are always produced.
    fn combine(self, other: Self) -> Result<Self, StatsError> {
        let keep_positives =
            self.summed_positive_per_x_and_y.is_some() && other.summed_positive_per_x_and_y.is_some();
        let keep_counts = (self.counts_per_x.is_some() || self.summed_weights_per_x.is_none())
            && (other.counts_per_x.is_some() || other.summed_weights_per_x.is_none());
        let num_labels = self
            .num_labels()
            .unwrap_or(0)
            .max(other.num_labels().unwrap_or(0));

        let mut builder = VocabularyBuilder::new();
        let mut values = RowAccumulator::with_labels(num_labels);
        let mut sentinel = None;
        self.accumulate_into(&mut builder, &mut values, &mut sentinel);
        other.accumulate_into(&mut builder, &mut values, &mut sentinel);

        let mut unique_x = builder.into_vocabulary();
        if let Some(s) = sentinel {
            unique_x.push(UniqueEntry::Sentinel);
            values.weights.extend(s.weights);
            values.positives.extend(s.positives);
            values.counts.extend(s.counts);
        }
        Ok(ReducedBatchWeightedCounts {
            unique_x,
            summed_weights_per_x: Some(values.weights),
            summed_positive_per_x_and_y: keep_positives.then_some(values.positives),
            counts_per_x: keep_counts.then_some(values.counts),
        })
    }
}

#[cfg(test)]
#[path = "weighted_counts_test.rs"]
mod tests;
