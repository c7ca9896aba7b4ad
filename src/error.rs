use core::fmt;

/// Errors from container construction, checked access, and algebra.
///
/// Every failure is surfaced synchronously to the immediate caller and
/// leaves the operands untouched. Fast-path indexing (`v[i]`, `m[i]`)
/// is deliberately outside this taxonomy; misusing it panics like any
/// slice index.
///
/// ```
/// use dynalg::{DynVector, SizeError};
///
/// let err = DynVector::<i32>::new(0).unwrap_err();
/// assert_eq!(err, SizeError::InvalidSize { requested: 0, max: dynalg::MAX_VECTOR_LEN });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    /// Requested length or dimension is zero or exceeds the type's maximum.
    InvalidSize { requested: usize, max: usize },
    /// Two operands that must agree in length or dimension differ.
    SizeMismatch { left: usize, right: usize },
    /// A checked access was given an index at or past the end.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeError::InvalidSize { requested, max } => {
                write!(f, "invalid size {}: must be in 1..={}", requested, max)
            }
            SizeError::SizeMismatch { left, right } => {
                write!(f, "size mismatch: {} vs {}", left, right)
            }
            SizeError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SizeError {}
