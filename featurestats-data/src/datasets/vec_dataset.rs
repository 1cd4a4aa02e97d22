use super::traits::Dataset;
use featurestats_core::StatsError;

/// A dataset backed by a `Vec` of records, cloned out on access.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    fn get(&self, index: usize) -> Result<Self::Item, StatsError> {
        self.data
            .get(index)
            .cloned()
            .ok_or_else(|| StatsError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![self.data.len()],
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
