//! Sample L-moments (orders 1 to 4) per group.

use std::cmp::Ordering;

use crate::batch::Batch;
use crate::error::StatsError;
use crate::ops::reduction::combine::Combine;
use crate::ops::reduction::utils::{check_partial_shapes, Grouping};
use crate::ops::traits::StatFloat;

/// L-moment partial: for each order `k = 1..=4`, a `(count, moment)` pair
/// per output group.
///
/// `counts[k-1]` holds the number of order-`k` terms `C(n, k)`, in the float
/// type. Orders with no terms hold `(0, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LMoments<T> {
    pub counts: [Vec<T>; 4],
    pub moments: [Vec<T>; 4],
    pub shape: Vec<usize>,
}

impl<T: StatFloat> LMoments<T> {
    pub fn empty(shape: Vec<usize>) -> Self {
        let n: usize = shape.iter().product();
        let zeros = || vec![T::zero(); n];
        LMoments {
            counts: [zeros(), zeros(), zeros(), zeros()],
            moments: [zeros(), zeros(), zeros(), zeros()],
            shape,
        }
    }
}

impl<T: StatFloat> Combine for LMoments<T> {
    /// Count-weighted mean of each order's estimate.
    fn combine(self, other: Self) -> Result<Self, StatsError> {
        check_partial_shapes(&self.shape, &other.shape, "LMoments::combine")?;
        let mut out = LMoments::empty(self.shape.clone());
        for k in 0..4 {
            for g in 0..self.counts[k].len() {
                let (c1, c2) = (self.counts[k][g], other.counts[k][g]);
                let c = c1 + c2;
                out.counts[k][g] = c;
                if c > T::zero() {
                    out.moments[k][g] = (c1 * self.moments[k][g] + c2 * other.moments[k][g]) / c;
                }
            }
        }
        Ok(out)
    }
}

/// Binomial coefficient `C(n, k)` as a float; zero when `n < k`.
fn binomial(n: usize, k: usize) -> f64 {
    if n < k {
        return 0.0;
    }
    (0..k).fold(1.0, |acc, j| acc * (n - j) as f64 / (j + 1) as f64)
}

/// Term counts and order-statistic weights of the first four sample L-moments.
///
/// For a sorted sample of size `n`, the order-`k` estimate is
/// `sum_i factors[k-1][i] * x_(i)` over `C(n, k)` terms. When `C(n, k)` is zero
/// both the count and the factors of that order are zero.
pub fn num_terms_and_factors<T: StatFloat>(n: usize) -> ([T; 4], [Vec<T>; 4]) {
    let counts = [
        binomial(n, 1),
        binomial(n, 2),
        binomial(n, 3),
        binomial(n, 4),
    ];
    let mut factors: [Vec<f64>; 4] = [vec![0.0; n], vec![0.0; n], vec![0.0; n], vec![0.0; n]];
    for i in 1..=n {
        // `below` samples precede x_(i), `above` follow it.
        let below = i - 1;
        let above = n - i;
        let (b, a) = (below as f64, above as f64);
        let idx = i - 1;
        if counts[0] > 0.0 {
            factors[0][idx] = 1.0 / counts[0];
        }
        if counts[1] > 0.0 {
            factors[1][idx] = (b - a) / (2.0 * counts[1]);
        }
        if counts[2] > 0.0 {
            factors[2][idx] =
                (binomial(below, 2) - 2.0 * b * a + binomial(above, 2)) / (3.0 * counts[2]);
        }
        if counts[3] > 0.0 {
            factors[3][idx] = (binomial(below, 3) - 3.0 * binomial(below, 2) * a
                + 3.0 * b * binomial(above, 2)
                - binomial(above, 3))
                / (4.0 * counts[3]);
        }
    }
    let to_t = |v: &Vec<f64>| v.iter().map(|&f| T::from_f64_lossy(f)).collect::<Vec<T>>();
    (
        counts.map(T::from_f64_lossy),
        [
            to_t(&factors[0]),
            to_t(&factors[1]),
            to_t(&factors[2]),
            to_t(&factors[3]),
        ],
    )
}

/// Computes the first four L-moments of `x`, overall or per feature position.
///
/// # Errors
/// `UnsupportedElementType` when `T` cannot read `x`'s element type.
pub fn reduce_batch_count_l_moments<T: StatFloat>(
    x: &Batch,
    reduce_instance_dims: bool,
) -> Result<LMoments<T>, StatsError> {
    const OP: &str = "reduce_batch_count_l_moments";
    log::debug!(
        "{}: shape={:?}, dtype={:?}, reduce_instance_dims={}",
        OP,
        x.shape(),
        x.dtype(),
        reduce_instance_dims
    );
    let (layout, grouping) = Grouping::for_batch(x, None, reduce_instance_dims, OP)?;
    let values = T::read_values(&layout.values, OP)?;
    let mut out = LMoments::empty(grouping.group_shape.clone());
    for (g, mut sample) in grouping.segment(&values).into_iter().enumerate() {
        if sample.is_empty() {
            continue;
        }
        sample.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let (counts, factors) = num_terms_and_factors::<T>(sample.len());
        for k in 0..4 {
            out.counts[k][g] = counts[k];
            out.moments[k][g] = factors[k]
                .iter()
                .zip(&sample)
                .fold(T::zero(), |acc, (&f, &v)| acc + f * v);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "l_moments_test.rs"]
mod tests;
