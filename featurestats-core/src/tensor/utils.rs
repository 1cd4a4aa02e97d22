/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Flattens a coordinate into a row-major linear offset using `strides`.
///
/// The caller guarantees `coords.len() == strides.len()`.
pub fn ravel_index(coords: &[usize], strides: &[usize]) -> usize {
    coords.iter().zip(strides).map(|(&c, &s)| c * s).sum()
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
