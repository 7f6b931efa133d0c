//! RGB <-> XYZ matrix generation.
//!
//! # Algorithm
//!
//! 1. Convert the xy chromaticities to XYZ with `Y = 1`
//! 2. Place the primaries as the columns of `P`
//! 3. Solve `P * s = W` for the per-primary scale `s`, where `W` is the
//!    white point XYZ
//! 4. Scale each column of `P` by its factor
//!
//! The result maps RGB `(1, 1, 1)` to the white point.
//!
//! # Example
//!
//! ```rust
//! use kinema_color::{Standard, WorkingSpace, rgb_to_xyz, xyz_to_rgb};
//! use kinema_math::Vector3;
//!
//! let ws = WorkingSpace::<f64>::new(Standard::Srgb);
//! let to_xyz = rgb_to_xyz(&ws);
//! let to_rgb = xyz_to_rgb(&ws);
//!
//! let white = to_xyz * Vector3::splat(1.0);
//! assert!((white.y() - 1.0).abs() < 1e-12);
//!
//! let rgb = Vector3::new(0.2, 0.5, 0.9);
//! let back = to_rgb * (to_xyz * rgb);
//! assert!((back - rgb).as_array().iter().all(|d| d.abs() < 1e-12));
//! ```

use crate::matrix::ColorMatrix;
use crate::working_space::WorkingSpace;
use kinema_core::{Result, Scalar};
use kinema_math::{Matrix3, Vector2, Vector3, inv, solve, try_inv, try_solve};

/// XYZ with `Y = 1` for an xy chromaticity.
///
/// A zero `y` gives infinite or NaN components.
#[inline]
pub fn xy_to_xyz<T: Scalar>(xy: Vector2<T>) -> Vector3<T> {
    let (x, y) = (xy.x(), xy.y());
    Vector3::new(x / y, T::one(), (T::one() - x - y) / y)
}

/// Chromaticity rows `(x, y, z)` rescaled to `Y = 1`.
fn unit_luminance<T: Scalar>(c: &ColorMatrix<T>) -> ColorMatrix<T> {
    let scale = |v: Vector3<T>| v * (T::one() / v.y());
    ColorMatrix::from_vectors(
        scale(c.red()),
        scale(c.green()),
        scale(c.blue()),
        scale(c.white_point()),
    )
}

/// Primaries as columns, white point as XYZ.
fn primaries_and_white<T: Scalar>(ws: &WorkingSpace<T>) -> (Matrix3<T>, Vector3<T>) {
    let xyz = unit_luminance(&ws.chromaticity());
    (xyz.primaries().transpose(), xyz.white_point())
}

#[inline]
fn scale_columns<T: Scalar>(p: &Matrix3<T>, s: Vector3<T>) -> Matrix3<T> {
    Matrix3::from_vectors(
        false,
        p.column(0) * s.x(),
        p.column(1) * s.y(),
        p.column(2) * s.z(),
    )
}

/// Normalized primary matrix: RGB to CIE XYZ for `ws`.
///
/// A degenerate set of primaries is not detected here; [`solve`] then
/// passes through the unscaled white point. Use [`try_rgb_to_xyz`] to
/// catch it.
pub fn rgb_to_xyz<T: Scalar>(ws: &WorkingSpace<T>) -> Matrix3<T> {
    let (p, w) = primaries_and_white(ws);
    scale_columns(&p, solve(w, &p))
}

/// CIE XYZ to RGB for `ws`: the inverse of [`rgb_to_xyz`].
pub fn xyz_to_rgb<T: Scalar>(ws: &WorkingSpace<T>) -> Matrix3<T> {
    inv(&rgb_to_xyz(ws))
}

/// Checked [`rgb_to_xyz`]: fails when the primaries are collinear.
pub fn try_rgb_to_xyz<T: Scalar>(ws: &WorkingSpace<T>) -> Result<Matrix3<T>> {
    let (p, w) = primaries_and_white(ws);
    Ok(scale_columns(&p, try_solve(w, &p)?))
}

/// Checked [`xyz_to_rgb`].
pub fn try_xyz_to_rgb<T: Scalar>(ws: &WorkingSpace<T>) -> Result<Matrix3<T>> {
    try_inv(&try_rgb_to_xyz(ws)?)
}

/// Matrix from one RGB space to another through XYZ.
///
/// No chromatic adaptation is applied; the built-in spaces share D65.
pub fn rgb_to_rgb<T: Scalar>(src: &WorkingSpace<T>, dst: &WorkingSpace<T>) -> Matrix3<T> {
    xyz_to_rgb(dst) * rgb_to_xyz(src)
}
