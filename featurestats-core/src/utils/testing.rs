use approx::AbsDiffEq;
use std::fmt::Debug;

/// Checks that two value slices are elementwise within `tolerance`.
///
/// `NaN` only matches `NaN`, so empty min/max groups can be compared directly.
/// Panics with the first mismatching index.
pub fn check_values_near<T>(actual: &[T], expected: &[T], tolerance: T)
where
    T: AbsDiffEq<Epsilon = T> + num_traits::Float + Debug,
{
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        let both_nan = a.is_nan() && e.is_nan();
        if !both_nan && !a.abs_diff_eq(&e, tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, tolerance={:?}",
                i, a, e, tolerance
            );
        }
    }
}
