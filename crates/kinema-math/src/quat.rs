//! Quaternions for 3D rotation.
//!
//! A [`Quaternion`] stores a scalar part `t` and a vector part `(x, y, z)`.
//! Rotations use the half-angle convention: a rotation of `angle` degrees
//! about the unit axis `a` is `(cos h, sin h * a)` with
//! `h = pi * angle / 360`.
//!
//! # Operators
//!
//! - `q * p` is the interior (dot) product and returns a scalar
//! - `q ^ p` is the Hamilton product `q (x) p`; `(q ^ p).rotate(v)` rotates
//!   by `p` first, then by `q`
//! - `q * k`, `q / k` scale all four components
//!
//! # Usage
//!
//! ```rust
//! use kinema_math::{Quaternion, Vector3};
//! use approx::assert_relative_eq;
//!
//! let q = Quaternion::from_rotation(90.0, Vector3::new(0.0, 0.0, 1.0));
//! let v = q.rotate(Vector3::new(1.0, 0.0, 0.0));
//! assert_relative_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
//!
//! let (angle, axis) = q.to_angle_axis();
//! assert_relative_eq!(angle, 90.0, epsilon = 1e-12);
//! assert_relative_eq!(axis, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
//! ```

use crate::mat3::Matrix3;
use crate::space::InnerSpace;
use crate::vec3::Vector3;
use kinema_core::{Error, Result, Scalar};
use std::ops::{
    Add, AddAssign, BitXor, BitXorAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg,
    Sub, SubAssign,
};

/// A quaternion `t + xi + yj + zk`.
///
/// Indexing follows storage order: `[0]` is `t`, `[1..4]` are `x, y, z`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion<T> {
    array: [T; 4],
}

impl<T> Quaternion<T> {
    /// Creates a quaternion from its scalar and vector parts.
    #[inline]
    pub const fn new(t: T, x: T, y: T, z: T) -> Self {
        Self {
            array: [t, x, y, z],
        }
    }

    /// Creates from `[t, x, y, z]`.
    #[inline]
    pub const fn from_array(array: [T; 4]) -> Self {
        Self { array }
    }

    /// Borrows the components as `[t, x, y, z]`.
    #[inline]
    pub const fn as_array(&self) -> &[T; 4] {
        &self.array
    }

    /// Borrows the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.array
    }
}

impl<T: Scalar> Quaternion<T> {
    /// Zero quaternion.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// All four components set to `k`.
    #[inline]
    pub fn splat(k: T) -> Self {
        Self::new(k, k, k, k)
    }

    /// Identity rotation `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        let o = T::zero();
        Self::new(T::one(), o, o, o)
    }

    /// Pure quaternion `(0, x, y, 0)`.
    #[inline]
    pub fn from_xy(x: T, y: T) -> Self {
        let o = T::zero();
        Self::new(o, x, y, o)
    }

    /// `(t, x, y, 0)`.
    #[inline]
    pub fn from_txy(t: T, x: T, y: T) -> Self {
        Self::new(t, x, y, T::zero())
    }

    /// Pure quaternion `(0, v)`.
    #[inline]
    pub fn from_vector(v: Vector3<T>) -> Self {
        Self::new(T::zero(), v.x(), v.y(), v.z())
    }

    /// Creates from raw `[t, x, y, z]` storage.
    ///
    /// `None`, or a slice shorter than four elements, gives the zero
    /// quaternion.
    pub fn from_slice(q: Option<&[T]>) -> Self {
        match q {
            Some(&[t, x, y, z, ..]) => Self::new(t, x, y, z),
            _ => Self::zero(),
        }
    }

    /// Rotation from `[angle_degrees, ax, ay, az]`.
    ///
    /// The axis is used as given; pass a unit axis for a unit quaternion.
    #[inline]
    pub fn from_rotation_array(r: &[T; 4]) -> Self {
        Self::from_rotation(r[0], Vector3::new(r[1], r[2], r[3]))
    }

    /// Rotation of `angle` degrees about `axis`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinema_math::{Quaternion, Vector3};
    ///
    /// let q = Quaternion::from_rotation(0.0f64, Vector3::new(0.0, 1.0, 0.0));
    /// assert_eq!(q, Quaternion::identity());
    /// ```
    pub fn from_rotation(angle: T, axis: Vector3<T>) -> Self {
        let h = T::PI() * angle / T::lit(360.0);
        let (s, c) = h.sin_cos();
        Self::new(c, s * axis.x(), s * axis.y(), s * axis.z())
    }

    /// Scalar part.
    #[inline]
    pub fn t(&self) -> T {
        self.array[0]
    }

    /// First vector component.
    #[inline]
    pub fn x(&self) -> T {
        self.array[1]
    }

    /// Second vector component.
    #[inline]
    pub fn y(&self) -> T {
        self.array[2]
    }

    /// Third vector component.
    #[inline]
    pub fn z(&self) -> T {
        self.array[3]
    }

    /// Sets the scalar part.
    #[inline]
    pub fn set_t(&mut self, t: T) {
        self.array[0] = t;
    }

    /// Sets the first vector component.
    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.array[1] = x;
    }

    /// Sets the second vector component.
    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.array[2] = y;
    }

    /// Sets the third vector component.
    #[inline]
    pub fn set_z(&mut self, z: T) {
        self.array[3] = z;
    }

    /// Vector part `(x, y, z)`.
    #[inline]
    pub fn vector(&self) -> Vector3<T> {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Copies the components out as `[t, x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        self.array
    }

    /// Interior (dot) product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.array
            .iter()
            .zip(other.array)
            .fold(T::zero(), |acc, (a, b)| acc + *a * b)
    }

    /// Conjugate `(t, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.t(), -self.x(), -self.y(), -self.z())
    }

    /// Hamilton product `self (x) rhs`. Same as `self ^ rhs`.
    pub fn hamilton(self, rhs: Self) -> Self {
        let (t1, v1) = (self.t(), self.vector());
        let (t2, v2) = (rhs.t(), rhs.vector());
        let t = t1 * t2 - v1.dot(v2);
        let v = v2 * t1 + v1 * t2 + v1.cross(v2);
        Self::new(t, v.x(), v.y(), v.z())
    }

    /// Unary plus. Returns a copy of `self`.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// True when `|t - 1| < eps`.
    ///
    /// Call this before [`to_rotation`](Self::to_rotation) or
    /// [`to_angle_axis`](Self::to_angle_axis); the axis of an identity
    /// rotation is undefined.
    #[inline]
    pub fn is_identity(&self, eps: T) -> bool {
        (self.t() - T::one()).abs() < eps
    }

    /// Rotation angle in degrees and axis.
    ///
    /// `angle = 2 acos(t)` and `axis = (x, y, z) / sin(acos(t))`. For an
    /// identity rotation the axis components are infinite or NaN.
    pub fn to_angle_axis(&self) -> (T, Vector3<T>) {
        let h = self.t().acos();
        let angle = T::lit(2.0) * h.to_degrees();
        let csc = T::one() / h.sin();
        (angle, self.vector() * csc)
    }

    /// Rotation as `[angle_degrees, ax, ay, az]`.
    ///
    /// Same precondition as [`to_angle_axis`](Self::to_angle_axis).
    pub fn to_rotation(&self) -> [T; 4] {
        let (angle, axis) = self.to_angle_axis();
        [angle, axis.x(), axis.y(), axis.z()]
    }

    /// Checked [`to_angle_axis`](Self::to_angle_axis).
    ///
    /// Fails with [`Error::UndefinedAxis`] when `|t|` is within `eps` of 1
    /// (a rotation by 0 or 360 degrees).
    pub fn try_to_angle_axis(&self, eps: T) -> Result<(T, Vector3<T>)> {
        let t = self.t();
        if T::one() - t.abs() < eps || t.is_nan() {
            return Err(Error::undefined_axis(t.as_f64()));
        }
        Ok(self.to_angle_axis())
    }

    /// Rotates `v` by this quaternion: `q (x) (0, v) (x) conj(q)`.
    ///
    /// Only a rotation for unit quaternions.
    #[inline]
    pub fn rotate(&self, v: Vector3<T>) -> Vector3<T> {
        (*self ^ Self::from_vector(v) ^ self.conjugate()).vector()
    }

    /// Rotation matrix for column vectors, so that
    /// `q.to_matrix3() * v == q.rotate(v)` for a unit quaternion.
    pub fn to_matrix3(&self) -> Matrix3<T> {
        let (t, x, y, z) = (self.t(), self.x(), self.y(), self.z());
        let (l, two) = (T::one(), T::lit(2.0));
        Matrix3::from_rows([
            [
                l - two * (y * y + z * z),
                two * (x * y - t * z),
                two * (x * z + t * y),
            ],
            [
                two * (x * y + t * z),
                l - two * (x * x + z * z),
                two * (y * z - t * x),
            ],
            [
                two * (x * z - t * y),
                two * (y * z + t * x),
                l - two * (x * x + y * y),
            ],
        ])
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.array.iter().all(|c| c.is_finite())
    }
}

impl<T: Scalar> InnerSpace for Quaternion<T> {
    type Scalar = T;

    #[inline]
    fn dot(self, other: Self) -> T {
        Quaternion::dot(self, other)
    }

    #[inline]
    fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        Self::from_array(self.array.map(f))
    }

    #[inline]
    fn zip_map<F: Fn(T, T) -> T>(self, other: Self, f: F) -> Self {
        let mut out = self;
        for (a, b) in out.array.iter_mut().zip(other.array) {
            *a = f(*a, b);
        }
        out
    }

    #[inline]
    fn zero() -> Self {
        Quaternion::zero()
    }
}

/// Conjugate `(t, -x, -y, -z)`.
#[inline]
pub fn conj<T: Scalar>(q: Quaternion<T>) -> Quaternion<T> {
    q.conjugate()
}

impl<T> Index<usize> for Quaternion<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.array[i]
    }
}

impl<T> IndexMut<usize> for Quaternion<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.array[i]
    }
}

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

// Quaternion * Quaternion (interior product)
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: Self) -> T {
        self.dot(rhs)
    }
}

// Quaternion ^ Quaternion (Hamilton product)
/// Standard Hamilton product `self (x) rhs`, so `i ^ j == k`.
///
/// `(q2 ^ q1).rotate(v)` applies `q1` first. For `rhs (x) self`, swap the
/// operands.
impl<T: Scalar> BitXor for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self.hamilton(rhs)
    }
}

impl<T: Scalar> BitXorAssign for Quaternion<T> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.hamilton(rhs);
    }
}

impl<T: Scalar> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Scalar> Add<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, k: T) -> Self {
        self.map(|c| c + k)
    }
}

impl<T: Scalar> Sub<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, k: T) -> Self {
        self.map(|c| c - k)
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, k: T) -> Self {
        self.map(|c| c * k)
    }
}

impl<T: Scalar> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, k: T) -> Self {
        self.map(|c| c / k)
    }
}

impl<T: Scalar> AddAssign<T> for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, k: T) {
        *self = *self + k;
    }
}

impl<T: Scalar> SubAssign<T> for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, k: T) {
        *self = *self - k;
    }
}

impl<T: Scalar> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, k: T) {
        *self = *self * k;
    }
}

/// Division by exactly zero leaves the zero quaternion.
impl<T: Scalar> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, k: T) {
        *self = if k != T::zero() {
            *self / k
        } else {
            Self::zero()
        };
    }
}

impl<T> From<[T; 4]> for Quaternion<T> {
    #[inline]
    fn from(a: [T; 4]) -> Self {
        Self::from_array(a)
    }
}

impl<T> From<Quaternion<T>> for [T; 4] {
    #[inline]
    fn from(q: Quaternion<T>) -> [T; 4] {
        q.array
    }
}

macro_rules! impl_scalar_lhs_quat {
    ($($t:ty),*) => {$(
        // T * Quaternion
        impl Mul<Quaternion<$t>> for $t {
            type Output = Quaternion<$t>;

            #[inline]
            fn mul(self, rhs: Quaternion<$t>) -> Quaternion<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_quat!(f32, f64);
impl_approx_eq!(Quaternion);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{norm, norml};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn z_axis() -> Vector3<f64> {
        Vector3::new(0.0, 0.0, 1.0)
    }

    #[test]
    fn test_quat_constructors() {
        assert_eq!(Quaternion::<f64>::default(), Quaternion::zero());
        assert_eq!(Quaternion::splat(1.0f32), Quaternion::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(Quaternion::from_xy(2.0f64, 3.0), Quaternion::new(0.0, 2.0, 3.0, 0.0));
        assert_eq!(Quaternion::from_txy(1.0f64, 2.0, 3.0), Quaternion::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(
            Quaternion::from_slice(Some(&[1.0f64, 2.0, 3.0, 4.0][..])),
            Quaternion::new(1.0, 2.0, 3.0, 4.0)
        );
        assert_eq!(Quaternion::<f64>::from_slice(None), Quaternion::zero());
    }

    #[test]
    fn test_quat_index_order() {
        let mut q = Quaternion::new(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(q[0], q.t());
        assert_eq!(q[1], q.x());
        assert_eq!(q[3], q.z());
        q[2] = 9.0;
        assert_eq!(q.y(), 9.0);
    }

    #[test]
    fn test_quat_half_angle() {
        let q = Quaternion::from_rotation(180.0f64, z_axis());
        assert_abs_diff_eq!(q.t(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(q.z(), 1.0, epsilon = 1e-15);
        assert_eq!(q.x(), 0.0);
        assert_eq!(q.y(), 0.0);
        assert!(!q.is_identity(1e-6));

        let r = Quaternion::from_rotation_array(&[180.0f64, 0.0, 0.0, 1.0]);
        assert_eq!(q, r);
    }

    #[test]
    fn test_quat_zero_angle_is_identity() {
        let q = Quaternion::from_rotation(0.0f64, Vector3::new(0.3, 0.4, 0.5));
        assert!(q.is_identity(1e-6));
        assert!(q.try_to_angle_axis(1e-6).is_err());
    }

    #[test]
    fn test_quat_angle_axis_round_trip() {
        let axis = norml(Vector3::new(1.0f64, -2.0, 0.5));
        for angle in [1.0, 45.0, 90.0, 179.0, 180.0, 250.0, 359.0] {
            let q = Quaternion::from_rotation(angle, axis);
            let (a, v) = q.try_to_angle_axis(1e-9).unwrap();
            assert_relative_eq!(a, angle, epsilon = 1e-9);
            assert_relative_eq!(v, axis, epsilon = 1e-9);

            let r = q.to_rotation();
            assert_relative_eq!(r[0], angle, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quat_dot_and_norm() {
        let q = Quaternion::new(1.0f64, 2.0, 3.0, 4.0);
        let p = Quaternion::new(2.0, 0.0, -1.0, 1.0);
        assert_eq!(q * p, 3.0);
        assert_eq!(norm(Quaternion::new(1.0f64, 1.0, 1.0, 1.0)), 2.0);
    }

    #[test]
    fn test_quat_hamilton_basis() {
        let i = Quaternion::new(0.0f64, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(i ^ j, k);
        assert_eq!(j ^ i, -k);
        assert_eq!(j ^ k, i);
        assert_eq!(i ^ i, Quaternion::new(-1.0, 0.0, 0.0, 0.0));

        let mut q = i;
        q ^= j;
        assert_eq!(q, k);
    }

    #[test]
    fn test_quat_composition() {
        let q1 = Quaternion::from_rotation(90.0f64, z_axis());
        let q2 = Quaternion::from_rotation(90.0f64, Vector3::new(1.0, 0.0, 0.0));
        let v = Vector3::new(1.0, 0.0, 0.0);

        // q1 first: x -> y, then q2: y -> z.
        assert_relative_eq!((q2 ^ q1).rotate(v), Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!((q2 ^ q1).rotate(v), q2.rotate(q1.rotate(v)), epsilon = 1e-12);
    }

    #[test]
    fn test_quat_to_matrix3() {
        let q = Quaternion::from_rotation(73.0f64, norml(Vector3::new(0.2, 1.0, -0.4)));
        let m = q.to_matrix3();
        let v = Vector3::new(0.5, -1.5, 2.0);
        assert_relative_eq!(m * v, q.rotate(v), epsilon = 1e-12);
        assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_quat_conj() {
        let q = Quaternion::new(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(conj(q), Quaternion::new(1.0, -2.0, -3.0, -4.0));
        let n = q ^ conj(q);
        assert_eq!(n, Quaternion::new(30.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_quat_scalar_ops() {
        let q = Quaternion::new(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(q + 1.0, Quaternion::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(q - 1.0, Quaternion::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(q * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * q, q * 2.0);
        assert_eq!(q / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(q + q - q, q);
        assert_eq!(-q, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(q.pos(), q);

        let mut p = q;
        p += q;
        p -= 1.0;
        p += 1.0;
        p *= 0.5;
        p -= q;
        assert_eq!(p, Quaternion::zero());
    }

    #[test]
    fn test_quat_div_assign_zero() {
        let mut q = Quaternion::new(1.0f64, 2.0, 3.0, 4.0);
        q /= 2.0;
        assert_eq!(q, Quaternion::new(0.5, 1.0, 1.5, 2.0));
        q /= 0.0;
        assert_eq!(q, Quaternion::zero());
    }

    #[test]
    fn test_quat_f32() {
        let q = Quaternion::from_rotation(90.0f32, Vector3::new(0.0, 1.0, 0.0));
        let v = q.rotate(Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(v, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }
}
