//! # kinema-math
//!
//! Small-dimension linear algebra for graphics and color work.
//!
//! This crate provides the value types used by cameras, arcballs and
//! color-matrix construction:
//!
//! - [`Vector2`], [`Vector3`] - Points and directions
//! - [`Matrix3`] - 3x3 transforms with determinant, inverse and solve
//! - [`Quaternion`] - Rotations (half-angle convention, degrees in and out)
//!
//! Every type is generic over a [`Scalar`] (`f32` or `f64`) and is `Copy`.
//!
//! # Design
//!
//! Matrices are stored **row-major** and used with **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Operators follow a fixed vocabulary across all types:
//!
//! | Expression | Meaning |
//! |------------|---------|
//! | `u * v` (vectors, quaternions) | dot product, returns a scalar |
//! | `u ^ v` (Vector3) | cross product |
//! | `p ^ q` (quaternions) | Hamilton product `p (x) q` |
//! | `a * b` (matrices) | matrix product `a . b` |
//!
//! Metric helpers ([`norm`], [`norml`], [`proj`], ...) are free functions
//! written once against [`InnerSpace`].
//!
//! Numeric degeneracy never panics. Vectors follow IEEE semantics; a
//! singular [`Matrix3`] is returned unchanged by [`inv`] and the event is
//! logged through `tracing`. The `try_*` functions report the same cases as
//! [`kinema_core::Error`].
//!
//! # Usage
//!
//! ```rust
//! use kinema_math::prelude::*;
//!
//! let m = Matrix3::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 4.0, 0.0],
//!     [0.0, 0.0, 8.0],
//! ]);
//! let b = Vector3::new(2.0, 4.0, 8.0);
//! assert_eq!(solve(b, &m), Vector3::splat(1.0));
//!
//! let q = Quaternion::from_rotation(180.0, Vector3::new(0.0, 0.0, 1.0));
//! assert!(!q.is_identity(1e-6));
//! ```
//!
//! # Features
//!
//! - `glam` (default) - `From` conversions to and from [`glam`] types
//! - `serde` - `Serialize`/`Deserialize` on all value types
//!
//! # Dependencies
//!
//! - [`kinema_core`] - Scalar trait and error types
//! - [`approx`] - Approximate equality for all value types
//! - [`tracing`] - Diagnostics on out-of-range access and singular input
//!
//! # Used By
//!
//! - `kinema-color` - Color matrices and RGB/XYZ conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod macros;

mod mat3;
mod quat;
mod space;
mod vec2;
mod vec3;

#[cfg(feature = "glam")]
mod glam_interop;

pub use kinema_core::Scalar;
pub use mat3::*;
pub use quat::*;
pub use space::*;
pub use vec2::*;
pub use vec3::*;

/// Prelude module for convenient imports.
///
/// ```
/// use kinema_math::prelude::*;
/// ```
pub mod prelude {
    pub use crate::mat3::{Matrix3, det, diag, inv, orthn_matrix, solve, tr, try_inv, try_solve};
    pub use crate::quat::{Quaternion, conj};
    pub use crate::space::{
        InnerSpace, abs, cos, diff, dist, inorm, norm, norml, norml_eps, orthn, orthn_eps,
        orthonormalize, proj, sqr, try_norml,
    };
    pub use crate::vec2::{Vector2, arg, atan2};
    pub use crate::vec3::{Vector3, normalv, normalv3, sin};
    pub use kinema_core::{Error, Result, Scalar};
}
