//! # kinema-color
//!
//! Color matrices, chromaticities and RGB/XYZ matrix generation.
//!
//! This crate builds the linear part of a color pipeline on top of
//! [`kinema_math`]:
//!
//! - [`ColorMatrix`] - Three primaries and a white point in one 4x3 matrix
//! - [`chromaticity`] - Expand `(x, y)` pairs to `(x, y, 1 - x - y)`
//! - [`WorkingSpace`] - Built-in RGB spaces ([`Standard`]) in CIE xy
//! - [`rgb_to_xyz`], [`xyz_to_rgb`] - Normalized primary matrices
//!
//! # Usage
//!
//! ```rust
//! use kinema_color::prelude::*;
//! use kinema_math::Vector3;
//!
//! let ws = WorkingSpace::<f64>::new(Standard::Rec709);
//! let m = rgb_to_xyz(&ws);
//!
//! // Pure red in XYZ
//! let xyz = m * Vector3::new(1.0, 0.0, 0.0);
//! assert!((xyz.x() - 0.4124).abs() < 1e-3);
//! ```
//!
//! # Dependencies
//!
//! - [`kinema_core`] - Scalar trait and error types
//! - [`kinema_math`] - Vector and matrix types
//! - [`tracing`] - Diagnostics on out-of-range element access

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod chromaticity;
mod conversion;
mod matrix;
mod working_space;

pub use chromaticity::*;
pub use conversion::*;
pub use matrix::*;
pub use working_space::*;

/// Prelude module for convenient imports.
///
/// ```
/// use kinema_color::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chromaticity::{chromaticity, chromaticity_from_xy};
    pub use crate::conversion::{
        rgb_to_rgb, rgb_to_xyz, try_rgb_to_xyz, try_xyz_to_rgb, xy_to_xyz, xyz_to_rgb,
    };
    pub use crate::matrix::{ColorMatrix, Primary};
    pub use crate::working_space::{Standard, WorkingSpace};
}
