//! Collate functions turning sampled records into dense reducer inputs.

use featurestats_core::tensor::Tensor;
use featurestats_core::{Batch, StatsError};

/// Stacks rows of equal width into a dense `F64` batch of shape `[n, width]`.
///
/// # Errors
/// `ShapeMismatch` if a row's width differs from the first row's.
pub fn collate_f64_rows(rows: Vec<Vec<f64>>) -> Result<Batch, StatsError> {
    let (data, shape) = stack_rows(rows, "collate_f64_rows")?;
    Ok(Batch::from(Tensor::new_f64(data, shape)?))
}

/// Splits `(key, row)` records into a per-row `Str` key batch of shape `[n]`
/// and a dense `F64` value batch of shape `[n, width]`.
///
/// The key batch aligns with the values per row, as the per-key reducers
/// expect.
pub fn collate_keyed_rows(records: Vec<(String, Vec<f64>)>) -> Result<(Batch, Batch), StatsError> {
    let n = records.len();
    let (keys, rows): (Vec<String>, Vec<Vec<f64>>) = records.into_iter().unzip();
    let (data, shape) = stack_rows(rows, "collate_keyed_rows")?;
    let keys = Batch::from(Tensor::new_str(keys, vec![n])?);
    let values = Batch::from(Tensor::new_f64(data, shape)?);
    Ok((keys, values))
}

fn stack_rows(rows: Vec<Vec<f64>>, operation: &str) -> Result<(Vec<f64>, Vec<usize>), StatsError> {
    let width = rows.first().map_or(0, Vec::len);
    let n = rows.len();
    let mut data = Vec::with_capacity(n * width);
    for row in rows {
        if row.len() != width {
            return Err(StatsError::ShapeMismatch {
                expected: format!("[{}]", width),
                actual: format!("[{}]", row.len()),
                operation: operation.to_string(),
            });
        }
        data.extend(row);
    }
    Ok((data, vec![n, width]))
}
