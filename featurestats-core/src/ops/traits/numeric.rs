use num_traits::{Bounded, Float, NumAssignOps, NumOps, PrimInt};
use std::fmt::Debug;

use crate::buffer::Buffer;
use crate::error::StatsError;

/// Float types in which moment and L-moment statistics are accumulated.
///
/// Only `f32` and `f64` implement it. Each implementation decides which
/// batch element types it can read without silent precision loss: `f32`
/// reads only `F32` batches, `f64` reads `F64` as well as `I32` and `I64`.
pub trait StatFloat:
    Float + NumAssignOps + NumOps + PartialOrd + Debug + Copy + Send + Sync + 'static
{
    /// Reads a value buffer into this float type.
    ///
    /// # Errors
    /// `UnsupportedElementType` when the buffer type cannot be read exactly.
    fn read_values(buffer: &Buffer, operation: &str) -> Result<Vec<Self>, StatsError>;

    fn from_count(n: u64) -> Self;

    fn from_f64_lossy(x: f64) -> Self;
}

impl StatFloat for f32 {
    fn read_values(buffer: &Buffer, operation: &str) -> Result<Vec<Self>, StatsError> {
        match buffer {
            Buffer::F32(v) => Ok(v.as_ref().clone()),
            other => Err(StatsError::unsupported(other.dtype(), operation)),
        }
    }

    fn from_count(n: u64) -> Self {
        n as f32
    }

    fn from_f64_lossy(x: f64) -> Self {
        x as f32
    }
}

impl StatFloat for f64 {
    fn read_values(buffer: &Buffer, operation: &str) -> Result<Vec<Self>, StatsError> {
        match buffer {
            Buffer::F64(v) => Ok(v.as_ref().clone()),
            Buffer::I32(v) => Ok(v.iter().map(|&x| x as f64).collect()),
            Buffer::I64(v) => Ok(v.iter().map(|&x| x as f64).collect()),
            other => Err(StatsError::unsupported(other.dtype(), operation)),
        }
    }

    fn from_count(n: u64) -> Self {
        n as f64
    }

    fn from_f64_lossy(x: f64) -> Self {
        x
    }
}

/// Element types for which `(negated_min, max)` can be reduced.
///
/// Integers are clamped to `MIN + 1` before negation, so `-x` never
/// overflows. The same `MIN + 1` marks empty groups; floats use `NaN` there.
pub trait MinMaxElement: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Reads a buffer of exactly this element type.
    fn read_exact(buffer: &Buffer, operation: &str) -> Result<Vec<Self>, StatsError>;

    /// The value reported in both fields for a group with no observations.
    fn empty_value() -> Self;

    /// Integers below `MIN + 1` become `MIN + 1`; floats are unchanged.
    fn clamped(self) -> Self;

    /// `-self`, clamping integers into the negatable range first.
    fn negate_clamped(self) -> Self;

    /// The larger of two values. For floats, a `NaN` operand is ignored.
    fn max_of(self, other: Self) -> Self;
}

macro_rules! impl_min_max_integral {
    ($t:ty, $variant:ident) => {
        impl MinMaxElement for $t {
            fn read_exact(buffer: &Buffer, operation: &str) -> Result<Vec<Self>, StatsError> {
                match buffer {
                    Buffer::$variant(v) => Ok(v.as_ref().clone()),
                    other => Err(StatsError::unsupported(other.dtype(), operation)),
                }
            }

            fn empty_value() -> Self {
                lowest_negatable::<$t>()
            }

            fn clamped(self) -> Self {
                Ord::max(self, lowest_negatable::<$t>())
            }

            fn negate_clamped(self) -> Self {
                -self.clamped()
            }

            fn max_of(self, other: Self) -> Self {
                Ord::max(self, other)
            }
        }
    };
}

macro_rules! impl_min_max_float {
    ($t:ty, $variant:ident) => {
        impl MinMaxElement for $t {
            fn read_exact(buffer: &Buffer, operation: &str) -> Result<Vec<Self>, StatsError> {
                match buffer {
                    Buffer::$variant(v) => Ok(v.as_ref().clone()),
                    other => Err(StatsError::unsupported(other.dtype(), operation)),
                }
            }

            fn empty_value() -> Self {
                <$t>::nan()
            }

            fn clamped(self) -> Self {
                self
            }

            fn negate_clamped(self) -> Self {
                -self
            }

            fn max_of(self, other: Self) -> Self {
                Float::max(self, other)
            }
        }
    };
}

/// `MIN + 1` for a signed integer type: the smallest value whose negation fits.
fn lowest_negatable<T: PrimInt + Bounded>() -> T {
    T::min_value() + T::one()
}

impl_min_max_integral!(i32, I32);
impl_min_max_integral!(i64, I64);
impl_min_max_float!(f32, F32);
impl_min_max_float!(f64, F64);
