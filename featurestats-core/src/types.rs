/// Defines the possible element types of a batch.
///
/// The set is closed: every reducer dispatches on it with an explicit `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating-point type.
    F32,
    /// 64-bit floating-point type.
    F64,
    /// 32-bit integer type.
    I32,
    /// 64-bit integer type.
    I64,
    /// UTF-8 string type (categorical values and keys).
    Str,
}

