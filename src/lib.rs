//! # dynalg
//!
//! Dynamically-sized generic numeric containers: a one-dimensional
//! [`DynVector<T>`] and a square [`SquareMatrix<T>`] built from
//! independently-owned rows. Pure value semantics: every operation is a
//! synchronous value-to-value transformation with exclusively-owned
//! storage, deep `Clone`, and native move.
//!
//! ## Quick start
//!
//! ```
//! use dynalg::{DynVector, SquareMatrix};
//!
//! let a = SquareMatrix::from_fn(2, |i, j| (i * 2 + j + 1) as i64).unwrap();
//! let id = SquareMatrix::<i64>::identity(2).unwrap();
//! assert_eq!(a.try_mul(&id).unwrap(), a);
//!
//! let v = DynVector::from_slice(&[1_i64, 2, 3]).unwrap();
//! let w = DynVector::from_slice(&[4_i64, 5, 6]).unwrap();
//! assert_eq!(v.dot(&w).unwrap(), 32);
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — [`DynVector<T>`]: construction validated against
//!   [`MAX_VECTOR_LEN`], two-tier indexing (`v[i]` fast / `at` checked),
//!   scalar and elementwise arithmetic, dot product, tolerance-aware
//!   equality, whitespace text output.
//!
//! - [`matrix`] — [`SquareMatrix<T>`]: square-only, composed of row
//!   vectors, validated against [`MAX_MATRIX_DIM`]. Row indexing plus
//!   matrix-scalar, matrix-vector, and O(n³) matrix-matrix products.
//!
//! - [`io`] — whitespace-token input over any `BufRead` (requires
//!   `std`). Output is plain [`core::fmt::Display`] and works
//!   everywhere.
//!
//! - [`traits`] — element bounds: [`Scalar`] (blanket over
//!   `num-traits`) and [`Tolerance`] (per-type equality tolerance:
//!   machine epsilon for floats, exact for integers).
//!
//! ## Error handling
//!
//! Structural failures are values, not panics: constructors and the
//! size-checked operations return [`SizeError`]
//! (`InvalidSize` / `SizeMismatch` / `IndexOutOfRange`). The operator
//! sugar (`+`, `-`, `*`) wraps the fallible methods and panics on
//! mismatch, mirroring slice indexing; use the `try_*` methods where a
//! recoverable result is wanted.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Stream input ([`io`]), `std::error::Error` impls |
//!
//! Without `std` the crate is `no_std` + `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
#[cfg(feature = "std")]
pub mod io;
pub mod matrix;
pub mod traits;
pub mod vector;

pub use error::SizeError;
pub use matrix::{SquareMatrix, MAX_MATRIX_DIM};
pub use traits::{Scalar, Tolerance};
pub use vector::{DynVector, MAX_VECTOR_LEN};
