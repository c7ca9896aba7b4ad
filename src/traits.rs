use core::fmt::Debug;
use num_traits::{Num, One, Zero};

/// Trait for types that can be used as container elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Per-type tolerance used by container equality.
///
/// Two elements compare equal when their absolute difference does not
/// exceed [`tolerance()`](Tolerance::tolerance). The tolerance is the
/// machine epsilon for floats and zero for integers, so integer
/// comparison stays exact while float comparison absorbs one unit of
/// representation noise.
///
/// ```
/// use dynalg::Tolerance;
///
/// assert_eq!(i32::tolerance(), 0);
/// assert_eq!(f64::tolerance(), f64::EPSILON);
/// assert_eq!(Tolerance::abs_diff(7_u8, 9), 2);
/// assert_eq!(Tolerance::abs_diff(9_u8, 7), 2);
/// ```
pub trait Tolerance: Scalar + PartialOrd {
    /// Largest absolute difference still treated as equal.
    fn tolerance() -> Self;

    /// Absolute difference `|self - rhs|`, computed without leaving `Self`.
    fn abs_diff(self, rhs: Self) -> Self;
}

macro_rules! impl_tolerance_int {
    ($($t:ty),*) => {
        $(
            impl Tolerance for $t {
                #[inline]
                fn tolerance() -> $t {
                    0
                }

                #[inline]
                fn abs_diff(self, rhs: $t) -> $t {
                    if self >= rhs {
                        self - rhs
                    } else {
                        rhs - self
                    }
                }
            }
        )*
    };
}

impl_tolerance_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_tolerance_float {
    ($($t:ty),*) => {
        $(
            impl Tolerance for $t {
                #[inline]
                fn tolerance() -> $t {
                    <$t>::EPSILON
                }

                #[inline]
                fn abs_diff(self, rhs: $t) -> $t {
                    if self >= rhs {
                        self - rhs
                    } else {
                        rhs - self
                    }
                }
            }
        )*
    };
}

impl_tolerance_float!(f32, f64);
