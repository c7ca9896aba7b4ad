use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, Mul, Sub};

use crate::error::SizeError;
use crate::traits::Scalar;
use crate::vector::DynVector;

use super::SquareMatrix;

// ── Matrix ∘ matrix (fallible) ──────────────────────────────────────

impl<T: Scalar> SquareMatrix<T> {
    /// Elementwise sum, delegating to each pair of rows. Fails with
    /// [`SizeError::SizeMismatch`] when the dimensions differ; neither
    /// operand is modified.
    ///
    /// ```
    /// use dynalg::SquareMatrix;
    /// let a = SquareMatrix::fill(2, 1_i32).unwrap();
    /// let b = SquareMatrix::fill(2, 2_i32).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap(), SquareMatrix::fill(2, 3).unwrap());
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self, SizeError> {
        self.check_same_dim(rhs)?;
        let mut rows = Vec::with_capacity(self.size());
        for (a, b) in self.rows.iter().zip(rhs.rows.iter()) {
            rows.push(a.try_add(b)?);
        }
        Ok(Self { rows })
    }

    /// Elementwise difference, delegating to each pair of rows.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, SizeError> {
        self.check_same_dim(rhs)?;
        let mut rows = Vec::with_capacity(self.size());
        for (a, b) in self.rows.iter().zip(rhs.rows.iter()) {
            rows.push(a.try_sub(b)?);
        }
        Ok(Self { rows })
    }

    /// Matrix product via the classic triple loop:
    /// `c[i][j] = Σₖ a[i][k] * b[k][j]`.
    ///
    /// O(n³) time and O(n²) space for the result; each cell accumulates
    /// from `T::zero()`. No blocking and no parallelism.
    ///
    /// ```
    /// use dynalg::SquareMatrix;
    /// let a = SquareMatrix::from_fn(2, |i, j| (i * 2 + j + 1) as i64).unwrap();
    /// let c = a.try_mul(&a).unwrap();
    /// assert_eq!(c[0].as_slice(), &[7, 10]);
    /// assert_eq!(c[1].as_slice(), &[15, 22]);
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, SizeError> {
        self.check_same_dim(rhs)?;
        let n = self.size();
        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let mut data = vec![T::zero(); n];
            let a = self.rows[i].as_slice();
            for k in 0..n {
                let a_ik = a[k];
                let b = rhs.rows[k].as_slice();
                for j in 0..n {
                    data[j] = data[j] + a_ik * b[j];
                }
            }
            rows.push(DynVector { data });
        }
        Ok(Self { rows })
    }

    /// Matrix-vector product: element `i` of the result is the dot
    /// product of row `i` with `v`. Fails with
    /// [`SizeError::SizeMismatch`] unless `v.len()` equals the
    /// dimension.
    ///
    /// ```
    /// use dynalg::{DynVector, SquareMatrix};
    /// let m = SquareMatrix::from_fn(2, |i, j| (i * 2 + j + 1) as i64).unwrap();
    /// let v = DynVector::from_slice(&[1_i64, 1]).unwrap();
    /// assert_eq!(m.mul_vector(&v).unwrap().as_slice(), &[3, 7]);
    /// ```
    pub fn mul_vector(&self, v: &DynVector<T>) -> Result<DynVector<T>, SizeError> {
        if self.size() != v.len() {
            return Err(SizeError::SizeMismatch {
                left: self.size(),
                right: v.len(),
            });
        }
        let mut data = Vec::with_capacity(self.size());
        for row in &self.rows {
            data.push(row.dot(v)?);
        }
        Ok(DynVector { data })
    }

    fn check_same_dim(&self, rhs: &Self) -> Result<(), SizeError> {
        if self.size() != rhs.size() {
            return Err(SizeError::SizeMismatch {
                left: self.size(),
                right: rhs.size(),
            });
        }
        Ok(())
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    /// Multiply every row by `rhs`.
    ///
    /// ```
    /// use dynalg::SquareMatrix;
    /// let m = SquareMatrix::fill(2, 3_i32).unwrap();
    /// assert_eq!(&m * 2, SquareMatrix::fill(2, 6).unwrap());
    /// ```
    fn mul(self, rhs: T) -> SquareMatrix<T> {
        let rows = self.rows.iter().map(|row| row * rhs).collect();
        SquareMatrix { rows }
    }
}

impl<T: Scalar> Mul<T> for SquareMatrix<T> {
    type Output = SquareMatrix<T>;
    fn mul(self, rhs: T) -> SquareMatrix<T> {
        &self * rhs
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_matrix {
    ($($t:ty),*) => {
        $(
            impl Mul<SquareMatrix<$t>> for $t {
                type Output = SquareMatrix<$t>;
                fn mul(self, rhs: SquareMatrix<$t>) -> SquareMatrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&SquareMatrix<$t>> for $t {
                type Output = SquareMatrix<$t>;
                fn mul(self, rhs: &SquareMatrix<$t>) -> SquareMatrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_matrix!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Operator sugar (panics on mismatch) ─────────────────────────────

impl<T: Scalar> Add<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn add(self, rhs: &SquareMatrix<T>) -> SquareMatrix<T> {
        match self.try_add(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Add for SquareMatrix<T> {
    type Output = SquareMatrix<T>;
    fn add(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&SquareMatrix<T>> for SquareMatrix<T> {
    type Output = SquareMatrix<T>;
    fn add(self, rhs: &SquareMatrix<T>) -> SquareMatrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;
    fn add(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> Sub<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn sub(self, rhs: &SquareMatrix<T>) -> SquareMatrix<T> {
        match self.try_sub(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Sub for SquareMatrix<T> {
    type Output = SquareMatrix<T>;
    fn sub(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&SquareMatrix<T>> for SquareMatrix<T> {
    type Output = SquareMatrix<T>;
    fn sub(self, rhs: &SquareMatrix<T>) -> SquareMatrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;
    fn sub(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> Mul<&SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, rhs: &SquareMatrix<T>) -> SquareMatrix<T> {
        match self.try_mul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Mul for SquareMatrix<T> {
    type Output = SquareMatrix<T>;
    fn mul(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&SquareMatrix<T>> for SquareMatrix<T> {
    type Output = SquareMatrix<T>;
    fn mul(self, rhs: &SquareMatrix<T>) -> SquareMatrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<SquareMatrix<T>> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;
    fn mul(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&DynVector<T>> for &SquareMatrix<T> {
    type Output = DynVector<T>;

    fn mul(self, rhs: &DynVector<T>) -> DynVector<T> {
        match self.mul_vector(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Mul<DynVector<T>> for &SquareMatrix<T> {
    type Output = DynVector<T>;
    fn mul(self, rhs: DynVector<T>) -> DynVector<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&DynVector<T>> for SquareMatrix<T> {
    type Output = DynVector<T>;
    fn mul(self, rhs: &DynVector<T>) -> DynVector<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<DynVector<T>> for SquareMatrix<T> {
    type Output = DynVector<T>;
    fn mul(self, rhs: DynVector<T>) -> DynVector<T> {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat_2x2(values: [[i64; 2]; 2]) -> SquareMatrix<i64> {
        SquareMatrix::from_fn(2, |i, j| values[i][j]).unwrap()
    }

    #[test]
    fn add_sub_elementwise() {
        let a = mat_2x2([[1, 2], [3, 4]]);
        let b = mat_2x2([[10, 20], [30, 40]]);
        assert_eq!(a.try_add(&b).unwrap(), mat_2x2([[11, 22], [33, 44]]));
        assert_eq!(b.try_sub(&a).unwrap(), mat_2x2([[9, 18], [27, 36]]));
    }

    #[test]
    fn add_then_sub_round_trips() {
        let a = mat_2x2([[1, -2], [3, -4]]);
        let b = mat_2x2([[5, 6], [-7, 8]]);
        assert_eq!(a.try_add(&b).unwrap().try_sub(&b).unwrap(), a);
    }

    #[test]
    fn known_2x2_product() {
        let a = mat_2x2([[1, 2], [3, 4]]);
        let c = a.try_mul(&a).unwrap();
        assert_eq!(c, mat_2x2([[7, 10], [15, 22]]));
    }

    #[test]
    fn identity_multiply_is_neutral() {
        let a = mat_2x2([[1, 2], [3, 4]]);
        let id = SquareMatrix::<i64>::identity(2).unwrap();
        assert_eq!(a.try_mul(&id).unwrap(), a);
        assert_eq!(id.try_mul(&a).unwrap(), a);
    }

    #[test]
    fn mul_vector_is_rowwise_dot() {
        let m = mat_2x2([[1, 2], [3, 4]]);
        let v = DynVector::from_slice(&[5_i64, 6]).unwrap();
        let r = m.mul_vector(&v).unwrap();
        assert_eq!(r[0], m[0].dot(&v).unwrap());
        assert_eq!(r[1], m[1].dot(&v).unwrap());
        assert_eq!(r.as_slice(), &[17, 39]);
    }

    #[test]
    fn scalar_multiply() {
        let m = mat_2x2([[1, 2], [3, 4]]);
        assert_eq!(&m * 3, mat_2x2([[3, 6], [9, 12]]));
        assert_eq!(3 * &m, &m * 3);
        assert_eq!(&m * 1, m);
    }

    #[test]
    fn mismatched_dimensions_fail() {
        let a = SquareMatrix::<i64>::new(2).unwrap();
        let b = SquareMatrix::<i64>::new(3).unwrap();
        let err = SizeError::SizeMismatch { left: 2, right: 3 };
        assert_eq!(a.try_add(&b).unwrap_err(), err);
        assert_eq!(a.try_sub(&b).unwrap_err(), err);
        assert_eq!(a.try_mul(&b).unwrap_err(), err);

        let v = DynVector::<i64>::new(3).unwrap();
        assert_eq!(a.mul_vector(&v).unwrap_err(), err);
        // Operands untouched after the failure.
        assert_eq!(a, SquareMatrix::<i64>::new(2).unwrap());
        assert_eq!(b, SquareMatrix::<i64>::new(3).unwrap());
    }

    #[test]
    #[should_panic(expected = "size mismatch")]
    fn operator_mul_panics_on_mismatch() {
        let a = SquareMatrix::<i64>::new(2).unwrap();
        let b = SquareMatrix::<i64>::new(3).unwrap();
        let _ = &a * &b;
    }

    #[test]
    fn ref_variants_agree() {
        let a = mat_2x2([[1, 2], [3, 4]]);
        let b = mat_2x2([[5, 6], [7, 8]]);
        let product = &a * &b;
        assert_eq!(product, a.clone() * &b);
        assert_eq!(product, &a * b.clone());
        assert_eq!(product, a.clone() * b.clone());
    }

    #[test]
    fn float_matrix_product() {
        let a = SquareMatrix::from_fn(2, |i, j| (i * 2 + j) as f64 * 0.5).unwrap();
        let id = SquareMatrix::<f64>::identity(2).unwrap();
        assert_eq!(a.try_mul(&id).unwrap(), a);
    }
}
