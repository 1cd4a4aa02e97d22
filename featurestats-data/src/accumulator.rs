//! Running accumulation of partial statistics across batches.

use crate::dataloader::DataLoader;
use crate::datasets::Dataset;
use crate::samplers::Sampler;
use featurestats_core::{Combine, StatsError};

/// Owns the running partial of one statistic.
///
/// Partials may be added in any order, and accumulators fed by disjoint
/// slices of the data may be merged; the result does not depend on either
/// choice beyond floating-point rounding.
#[derive(Debug, Clone)]
pub struct Accumulator<P> {
    partial: Option<P>,
    num_partials: usize,
}

impl<P: Combine + Clone> Default for Accumulator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Combine + Clone> Accumulator<P> {
    pub fn new() -> Self {
        Accumulator {
            partial: None,
            num_partials: 0,
        }
    }

    /// Folds one batch partial into the running state.
    ///
    /// # Errors
    /// Propagates `Combine::combine` errors. The running state is left as it
    /// was before the call.
    pub fn add(&mut self, partial: P) -> Result<(), StatsError> {
        self.fold_in(partial, 1)
    }

    /// Merges the state of another accumulator into this one.
    ///
    /// # Errors
    /// As [`Accumulator::add`]; on error this accumulator is unchanged.
    pub fn merge(&mut self, other: Accumulator<P>) -> Result<(), StatsError> {
        match other.partial {
            Some(p) => self.fold_in(p, other.num_partials),
            None => Ok(()),
        }
    }

    fn fold_in(&mut self, partial: P, num_partials: usize) -> Result<(), StatsError> {
        let merged = match &self.partial {
            None => partial,
            Some(acc) => acc.clone().combine(partial)?,
        };
        self.partial = Some(merged);
        self.num_partials += num_partials;
        Ok(())
    }

    /// Number of batch partials folded in so far.
    pub fn num_partials(&self) -> usize {
        self.num_partials
    }

    /// The combined partial, or `None` if nothing was added.
    pub fn finish(self) -> Option<P> {
        self.partial
    }
}

/// Runs `reducer` on every batch of `loader` and combines the partials.
///
/// Returns `Ok(None)` when the loader yields no batch.
///
/// # Errors
/// The first loader, reducer or combine error, as is.
pub fn analyze<D, S, B, P, F>(loader: DataLoader<D, S, B>, mut reducer: F) -> Result<Option<P>, StatsError>
where
    D: Dataset,
    S: Sampler,
    P: Combine + Clone,
    F: FnMut(&B) -> Result<P, StatsError>,
{
    let expected = loader.num_batches();
    let mut acc = Accumulator::new();
    for (i, batch) in loader.enumerate() {
        let batch = batch?;
        acc.add(reducer(&batch)?)?;
        log::debug!("analyze: reduced batch {}/{}", i + 1, expected);
    }
    log::debug!("analyze: combined {} partials", acc.num_partials());
    Ok(acc.finish())
}

#[cfg(test)]
#[path = "accumulator_test.rs"]
mod tests;
