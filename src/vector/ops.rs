use core::ops::{Add, Mul, Sub};

use crate::error::SizeError;
use crate::traits::Scalar;

use super::DynVector;

// ── Scalar operations: vector ∘ scalar ──────────────────────────────

impl<T: Scalar> Add<T> for &DynVector<T> {
    type Output = DynVector<T>;

    /// Add `rhs` to every element.
    ///
    /// ```
    /// use dynalg::DynVector;
    /// let v = DynVector::from_slice(&[1, 2, 3]).unwrap();
    /// let w = &v + 10;
    /// assert_eq!(w.as_slice(), &[11, 12, 13]);
    /// ```
    fn add(self, rhs: T) -> DynVector<T> {
        let data = self.data.iter().map(|&x| x + rhs).collect();
        DynVector { data }
    }
}

impl<T: Scalar> Add<T> for DynVector<T> {
    type Output = DynVector<T>;
    fn add(self, rhs: T) -> DynVector<T> {
        &self + rhs
    }
}

impl<T: Scalar> Sub<T> for &DynVector<T> {
    type Output = DynVector<T>;

    /// Subtract `rhs` from every element.
    fn sub(self, rhs: T) -> DynVector<T> {
        let data = self.data.iter().map(|&x| x - rhs).collect();
        DynVector { data }
    }
}

impl<T: Scalar> Sub<T> for DynVector<T> {
    type Output = DynVector<T>;
    fn sub(self, rhs: T) -> DynVector<T> {
        &self - rhs
    }
}

impl<T: Scalar> Mul<T> for &DynVector<T> {
    type Output = DynVector<T>;

    /// Multiply every element by `rhs`.
    ///
    /// ```
    /// use dynalg::DynVector;
    /// let v = DynVector::from_slice(&[1.0_f64, 2.0]).unwrap();
    /// assert_eq!((&v * 2.0).as_slice(), &[2.0, 4.0]);
    /// ```
    fn mul(self, rhs: T) -> DynVector<T> {
        let data = self.data.iter().map(|&x| x * rhs).collect();
        DynVector { data }
    }
}

impl<T: Scalar> Mul<T> for DynVector<T> {
    type Output = DynVector<T>;
    fn mul(self, rhs: T) -> DynVector<T> {
        &self * rhs
    }
}

// ── scalar * vector (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_vector {
    ($($t:ty),*) => {
        $(
            impl Mul<DynVector<$t>> for $t {
                type Output = DynVector<$t>;
                fn mul(self, rhs: DynVector<$t>) -> DynVector<$t> {
                    rhs * self
                }
            }

            impl Mul<&DynVector<$t>> for $t {
                type Output = DynVector<$t>;
                fn mul(self, rhs: &DynVector<$t>) -> DynVector<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_vector!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Elementwise operations: vector ∘ vector ─────────────────────────

impl<T: Scalar> DynVector<T> {
    /// Elementwise sum. Fails with [`SizeError::SizeMismatch`] when the
    /// lengths differ; neither operand is modified.
    ///
    /// ```
    /// use dynalg::DynVector;
    /// let a = DynVector::from_slice(&[1, 2]).unwrap();
    /// let b = DynVector::from_slice(&[10, 20]).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap().as_slice(), &[11, 22]);
    ///
    /// let c = DynVector::from_slice(&[1, 2, 3]).unwrap();
    /// assert!(a.try_add(&c).is_err());
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self, SizeError> {
        self.check_same_len(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self { data })
    }

    /// Elementwise difference. Fails with [`SizeError::SizeMismatch`]
    /// when the lengths differ.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, SizeError> {
        self.check_same_len(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Self { data })
    }

    /// Dot product: the sum of elementwise products, accumulated in `T`
    /// starting from `T::zero()`. No widening is performed.
    ///
    /// ```
    /// use dynalg::DynVector;
    /// let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    /// let b = DynVector::from_slice(&[4, 5, 6]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), 32);
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<T, SizeError> {
        self.check_same_len(rhs)?;
        let mut sum = T::zero();
        for i in 0..self.len() {
            sum = sum + self.data[i] * rhs.data[i];
        }
        Ok(sum)
    }

    fn check_same_len(&self, rhs: &Self) -> Result<(), SizeError> {
        if self.len() != rhs.len() {
            return Err(SizeError::SizeMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        Ok(())
    }
}

// ── Operator sugar for elementwise ops (panics on mismatch) ─────────

impl<T: Scalar> Add<&DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;

    fn add(self, rhs: &DynVector<T>) -> DynVector<T> {
        match self.try_add(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Add for DynVector<T> {
    type Output = DynVector<T>;
    fn add(self, rhs: DynVector<T>) -> DynVector<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&DynVector<T>> for DynVector<T> {
    type Output = DynVector<T>;
    fn add(self, rhs: &DynVector<T>) -> DynVector<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;
    fn add(self, rhs: DynVector<T>) -> DynVector<T> {
        self + &rhs
    }
}

impl<T: Scalar> Sub<&DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;

    fn sub(self, rhs: &DynVector<T>) -> DynVector<T> {
        match self.try_sub(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Sub for DynVector<T> {
    type Output = DynVector<T>;
    fn sub(self, rhs: DynVector<T>) -> DynVector<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&DynVector<T>> for DynVector<T> {
    type Output = DynVector<T>;
    fn sub(self, rhs: &DynVector<T>) -> DynVector<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;
    fn sub(self, rhs: DynVector<T>) -> DynVector<T> {
        self - &rhs
    }
}
