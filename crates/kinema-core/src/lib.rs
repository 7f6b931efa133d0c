//! # kinema-core
//!
//! Core types shared by the kinema crates.
//!
//! - [`Scalar`] - Floating-point element trait (`f32`, `f64`) with the
//!   library-wide default tolerances
//! - [`Error`], [`Result`] - Failure reporting for the checked operations
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other kinema crates build
//! on it:
//!
//! ```text
//! kinema-core (this crate)
//!    ^
//!    |
//!    +-- kinema-math (vectors, Matrix3, quaternions)
//!           ^
//!           |
//!           +-- kinema-color (color matrices, working spaces)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;

pub use error::*;
pub use num_traits::{Float, FloatConst, One, Zero};
pub use scalar::Scalar;

/// Prelude module for convenient imports.
///
/// ```
/// use kinema_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::Scalar;
}
