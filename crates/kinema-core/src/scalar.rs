//! Floating-point element trait shared by every kinema value type.
//!
//! All vectors, matrices and quaternions are generic over a [`Scalar`],
//! which is implemented for `f32` and `f64`. Both precisions go through the
//! same generic code path, so numeric behavior is identical apart from the
//! precision itself.
//!
//! # Usage
//!
//! ```rust
//! use kinema_core::Scalar;
//!
//! fn half<T: Scalar>(v: T) -> T {
//!     v * T::lit(0.5)
//! }
//!
//! assert_eq!(half(3.0f32), 1.5);
//! assert_eq!(half(3.0f64), 1.5);
//! ```

use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Floating-point element type (binary32 or binary64).
///
/// Extends [`num_traits::Float`] with the compound-assignment operators and
/// the library-wide default tolerances.
pub trait Scalar:
    Float
    + FloatConst
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Default tolerance for the "normalize only if not already unit" policy.
    ///
    /// A vector whose norm is within this distance of 1 is returned
    /// unchanged by `norml` and friends.
    const NORMALIZE_EPSILON: Self;

    /// Default singularity threshold for 3x3 matrices.
    const SINGULAR_TOLERANCE: Self;

    /// Converts an `f64` literal into this type.
    fn lit(v: f64) -> Self;

    /// Widens to `f64` (used for diagnostics and error payloads).
    fn as_f64(self) -> f64;

    /// Shared quiet-NaN value returned by reference on out-of-range reads.
    fn sentinel() -> &'static Self;
}

impl Scalar for f32 {
    const NORMALIZE_EPSILON: f32 = 1e-7;
    const SINGULAR_TOLERANCE: f32 = 1e-9;

    #[inline]
    fn lit(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn sentinel() -> &'static Self {
        static NAN: f32 = f32::NAN;
        &NAN
    }
}

impl Scalar for f64 {
    const NORMALIZE_EPSILON: f64 = 1e-7;
    const SINGULAR_TOLERANCE: f64 = 1e-9;

    #[inline]
    fn lit(v: f64) -> Self {
        v
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn sentinel() -> &'static Self {
        static NAN: f64 = f64::NAN;
        &NAN
    }
}
