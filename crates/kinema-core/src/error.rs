//! Error types for the checked kinema operations.
//!
//! The default operations on vectors, matrices and quaternions never fail:
//! they follow IEEE semantics or return a sentinel (NaN, the unchanged
//! input). Callers that need to detect those cases use the `try_*`
//! variants, which report through the [`Error`] enum defined here.
//!
//! # Usage
//!
//! ```rust
//! use kinema_core::{Error, Result};
//!
//! fn element(row: usize, col: usize) -> Result<f64> {
//!     if row > 2 || col > 2 {
//!         return Err(Error::index_out_of_bounds(row, col, 3, 3));
//!     }
//!     Ok(0.0)
//! }
//!
//! assert!(element(3, 0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `kinema-math` - `try_get`, `try_inv`, `try_solve`, `try_norml`,
//!   `try_to_angle_axis`
//! - `kinema-color` - Color matrix element access

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the checked operations.
///
/// Numeric payloads are widened to `f64` so the enum stays non-generic.
///
/// # Categories
///
/// - **Bounds errors**: [`IndexOutOfBounds`](Error::IndexOutOfBounds)
/// - **Degeneracy errors**: [`SingularMatrix`](Error::SingularMatrix),
///   [`ZeroLength`](Error::ZeroLength), [`UndefinedAxis`](Error::UndefinedAxis)
/// - **Guard errors**: [`DivisorBelowTolerance`](Error::DivisorBelowTolerance)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Element coordinates are outside the matrix shape.
    #[error("element ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Determinant magnitude is below the matrix tolerance.
    #[error("matrix is singular: |det| = {determinant} is below tolerance {tolerance}")]
    SingularMatrix {
        /// Computed determinant
        determinant: f64,
        /// Tolerance of the matrix
        tolerance: f64,
    },

    /// A zero-length vector cannot be normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// The quaternion is an identity rotation, its axis is undefined.
    #[error("rotation axis is undefined for identity rotation (t = {t})")]
    UndefinedAxis {
        /// Scalar part of the quaternion
        t: f64,
    },

    /// Scalar divisor is below the matrix tolerance.
    #[error("divisor {divisor} is below tolerance {tolerance}")]
    DivisorBelowTolerance {
        /// Requested divisor
        divisor: f64,
        /// Tolerance of the matrix
        tolerance: f64,
    },
}

impl Error {
    /// Creates an [`Error::IndexOutOfBounds`] error.
    #[inline]
    pub fn index_out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular(determinant: f64, tolerance: f64) -> Self {
        Self::SingularMatrix {
            determinant,
            tolerance,
        }
    }

    /// Creates an [`Error::UndefinedAxis`] error.
    #[inline]
    pub fn undefined_axis(t: f64) -> Self {
        Self::UndefinedAxis { t }
    }

    /// Creates an [`Error::DivisorBelowTolerance`] error.
    #[inline]
    pub fn divisor_below_tolerance(divisor: f64, tolerance: f64) -> Self {
        Self::DivisorBelowTolerance { divisor, tolerance }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }

    /// Returns `true` if the input was numerically degenerate.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::SingularMatrix { .. } | Self::ZeroLength | Self::UndefinedAxis { .. }
        )
    }
}
