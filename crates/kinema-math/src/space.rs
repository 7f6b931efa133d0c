//! Metric operations shared by vectors and quaternions.
//!
//! [`Vector2`](crate::Vector2), [`Vector3`](crate::Vector3) and
//! [`Quaternion`](crate::Quaternion) are all fixed-size tuples of a
//! [`Scalar`] with an interior (dot) product. The free functions in this
//! module are written once against [`InnerSpace`] and apply to all three
//! types at both precisions.
//!
//! # Usage
//!
//! ```rust
//! use kinema_math::{Vector3, norm, inorm, norml};
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(norm(v), 5.0);
//! assert_eq!(inorm(v), 0.2);
//!
//! let u = norml(v);
//! assert_eq!(norml(u), u);
//! ```
//!
//! # Failure Semantics
//!
//! Nothing here panics on degenerate input. `inorm` of a zero vector is
//! infinite and normalizing it yields NaN components, following IEEE
//! arithmetic. Use [`try_norml`] to detect that case.

use kinema_core::{Error, Float, One, Result, Scalar, Zero};

/// A fixed-size element tuple with an interior product.
pub trait InnerSpace: Copy + PartialEq {
    /// Element type.
    type Scalar: Scalar;

    /// Interior (dot) product over all components.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Applies `f` to every component.
    fn map<F: Fn(Self::Scalar) -> Self::Scalar>(self, f: F) -> Self;

    /// Combines matching components of `self` and `other` with `f`.
    fn zip_map<F: Fn(Self::Scalar, Self::Scalar) -> Self::Scalar>(self, other: Self, f: F) -> Self;

    /// All components zero.
    fn zero() -> Self;
}

/// Sum of squared components.
#[inline]
pub fn sqr<V: InnerSpace>(v: V) -> V::Scalar {
    v.dot(v)
}

/// Euclidean norm. Same as [`norm`].
#[inline]
pub fn abs<V: InnerSpace>(v: V) -> V::Scalar {
    norm(v)
}

/// Euclidean norm.
#[inline]
pub fn norm<V: InnerSpace>(v: V) -> V::Scalar {
    sqr(v).sqrt()
}

/// Inverse of the Euclidean norm.
///
/// Infinite for a zero vector.
#[inline]
pub fn inorm<V: InnerSpace>(v: V) -> V::Scalar {
    V::Scalar::one() / norm(v)
}

/// Distance between `u` and `v`, i.e. `norm(v - u)`.
#[inline]
pub fn dist<V: InnerSpace>(u: V, v: V) -> V::Scalar {
    norm(v.zip_map(u, |a, b| a - b))
}

/// Cosine of the angle between `u` and `v`.
#[inline]
pub fn cos<V: InnerSpace>(u: V, v: V) -> V::Scalar {
    u.dot(v) * inorm(u) * inorm(v)
}

/// Normalizes `v` unless it is already within `eps` of unit length.
///
/// When `|norm(v) - 1| <= eps` the input is returned untouched, so a second
/// call on an already normalized value is an exact fixed point.
#[inline]
pub fn norml_eps<V: InnerSpace>(eps: V::Scalar, v: V) -> V {
    let len = norm(v);
    if (len - V::Scalar::one()).abs() > eps {
        let k = V::Scalar::one() / len;
        v.map(|c| c * k)
    } else {
        v
    }
}

/// Normalizes `v` with the default tolerance of `1e-7`.
///
/// See [`norml_eps`].
#[inline]
pub fn norml<V: InnerSpace>(v: V) -> V {
    norml_eps(V::Scalar::NORMALIZE_EPSILON, v)
}

/// Checked [`norml`]: fails on a zero-length or non-finite input.
pub fn try_norml<V: InnerSpace>(v: V) -> Result<V> {
    let len = norm(v);
    if len == V::Scalar::zero() || !len.is_finite() {
        return Err(Error::ZeroLength);
    }
    Ok(norml(v))
}

/// Component-wise absolute difference `|v - u|`.
#[inline]
pub fn diff<V: InnerSpace>(u: V, v: V) -> V {
    v.zip_map(u, |a, b| (a - b).abs())
}

/// Projection of `u` onto `v`, as a vector along `v`.
///
/// `v * ((u . v) / norm(v)^2)`
#[inline]
pub fn proj<V: InnerSpace>(u: V, v: V) -> V {
    let q = u.dot(v) / sqr(v);
    v.map(|c| c * q)
}

/// Gram-Schmidt step with tolerance: removes the projection of `u` onto
/// `v` and normalizes the remainder.
///
/// When `v` is already within `eps` of unit length the step is skipped
/// entirely and the zero vector is returned. Use [`orthonormalize`] when
/// the reference vector may be pre-normalized.
pub fn orthn_eps<V: InnerSpace>(eps: V::Scalar, u: V, v: V) -> V {
    if (norm(v) - V::Scalar::one()).abs() > eps {
        orthonormalize(u, v)
    } else {
        V::zero()
    }
}

/// [`orthn_eps`] with the default tolerance of `1e-7`.
#[inline]
pub fn orthn<V: InnerSpace>(u: V, v: V) -> V {
    orthn_eps(V::Scalar::NORMALIZE_EPSILON, u, v)
}

/// Removes the projection of `u` onto `v` and normalizes the remainder,
/// whatever the length of `v`.
///
/// # Example
///
/// ```rust
/// use kinema_math::{Vector2, orthonormalize};
///
/// let u = Vector2::new(1.0, 1.0);
/// let v = Vector2::new(1.0, 0.0);
/// assert_eq!(orthonormalize(u, v), Vector2::new(0.0, 1.0));
/// ```
#[inline]
pub fn orthonormalize<V: InnerSpace>(u: V, v: V) -> V {
    let p = proj(u, v);
    let w = u.zip_map(p, |a, b| a - b);
    let k = inorm(w);
    w.map(|c| c * k)
}
