//! Chromaticity matrices.
//!
//! A chromaticity is the `(x, y)` pair of a color with its brightness
//! factored out; the third coordinate is implied, `z = 1 - x - y`. These
//! helpers expand the `(x, y)` of three primaries and a white point into a
//! [`ColorMatrix`] holding `(x, y, z)` per row.

use crate::matrix::{ColorMatrix, Primary};
use kinema_core::Scalar;
use kinema_math::{Vector2, Vector3};

#[inline]
fn expand<T: Scalar>(x: T, y: T) -> Vector3<T> {
    Vector3::new(x, y, T::one() - x - y)
}

/// Chromaticity matrix from `[rx, ry, gx, gy, bx, by, wx, wy]`.
///
/// # Example
///
/// ```rust
/// use kinema_color::chromaticity;
///
/// let c = chromaticity(&[0.64f64, 0.33, 0.30, 0.60, 0.15, 0.06, 0.3127, 0.3290]);
/// assert!((c.red().z() - 0.03).abs() < 1e-12);
/// ```
pub fn chromaticity<T: Scalar>(xy: &[T; 8]) -> ColorMatrix<T> {
    let mut m = ColorMatrix::zero();
    let rows = [
        Primary::Red,
        Primary::Green,
        Primary::Blue,
        Primary::WhitePoint,
    ];
    for (p, pair) in rows.into_iter().zip(xy.chunks_exact(2)) {
        m.set_row(p, expand(pair[0], pair[1]));
    }
    m
}

/// Chromaticity matrix from one `(x, y)` vector per row.
pub fn chromaticity_from_xy<T: Scalar>(
    red: Vector2<T>,
    green: Vector2<T>,
    blue: Vector2<T>,
    white: Vector2<T>,
) -> ColorMatrix<T> {
    ColorMatrix::from_vectors(
        expand(red.x(), red.y()),
        expand(green.x(), green.y()),
        expand(blue.x(), blue.y()),
        expand(white.x(), white.y()),
    )
}
