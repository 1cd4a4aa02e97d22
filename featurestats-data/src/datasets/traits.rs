use featurestats_core::StatsError;

/// An indexable collection of records to be fed through the reducers.
///
/// A record is typically one row of raw feature values, optionally paired
/// with a grouping key or a label.
pub trait Dataset {
    /// The type of a single record.
    ///
    /// `Send + 'static` so loaders can be moved across threads.
    type Item: Send + 'static;

    /// Returns the record at `index`.
    ///
    /// # Errors
    /// `StatsError::IndexOutOfBounds` if `index >= len()`.
    fn get(&self, index: usize) -> Result<Self::Item, StatsError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
