use crate::error::StatsError;

/// Merges two partial statistics computed over disjoint data.
///
/// Implementations are associative and commutative up to floating-point
/// rounding, so partials from any number of batches can be folded in any
/// order or tree shape. Combining a partial with itself double counts.
pub trait Combine: Sized {
    /// # Errors
    /// `ShapeMismatch` when the two partials describe differently shaped features.
    fn combine(self, other: Self) -> Result<Self, StatsError>;
}

impl Combine for u64 {
    fn combine(self, other: Self) -> Result<Self, StatsError> {
        Ok(self + other)
    }
}

/// Folds an iterator of partials with [`Combine::combine`].
///
/// Returns `Ok(None)` for an empty iterator.
pub fn combine_all<P, I>(partials: I) -> Result<Option<P>, StatsError>
where
    P: Combine,
    I: IntoIterator<Item = P>,
{
    let mut acc: Option<P> = None;
    for p in partials {
        acc = Some(match acc {
            None => p,
            Some(a) => a.combine(p)?,
        });
    }
    Ok(acc)
}
