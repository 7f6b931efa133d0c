//! 3D vector type.
//!
//! [`Vector3`] represents positions, directions and normals, and is the
//! vector operand of [`Matrix3`](crate::Matrix3) and
//! [`Quaternion`](crate::Quaternion) rotations.
//!
//! # Usage
//!
//! ```rust
//! use kinema_math::{Vector3, normalv, sin};
//!
//! let x = Vector3::new(1.0, 0.0, 0.0);
//! let y = Vector3::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(x ^ y, Vector3::new(0.0, 0.0, 1.0)); // cross product
//! assert_eq!(x * y, 0.0); // dot product
//! assert_eq!(sin(x, y), 1.0);
//! assert_eq!(normalv(x * 3.0, y), Vector3::new(0.0, 0.0, 1.0));
//! ```

use crate::space::{InnerSpace, inorm, norm, norml};
use crate::vec2::Vector2;
use kinema_core::Scalar;
use std::ops::{
    Add, AddAssign, BitXor, BitXorAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg,
    Sub, SubAssign,
};

/// A 3-component vector.
///
/// # Components
///
/// Access via `.x()`, `.y()`, `.z()` or index `[0]`, `[1]`, `[2]`. Both
/// name the same storage.
///
/// # Example
///
/// ```rust
/// use kinema_math::Vector3;
///
/// let mut v = Vector3::new(0.5, 0.5, 0.5);
/// assert_eq!(v.x(), 0.5);
/// v[2] = 2.0;
/// assert_eq!(v.z(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3<T> {
    array: [T; 3],
}

impl<T> Vector3<T> {
    /// Creates a new vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinema_math::Vector3;
    ///
    /// let v = Vector3::new(1.0f32, 2.0, 3.0);
    /// ```
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { array: [x, y, z] }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(array: [T; 3]) -> Self {
        Self { array }
    }

    /// Borrows the backing array.
    #[inline]
    pub const fn as_array(&self) -> &[T; 3] {
        &self.array
    }

    /// Borrows the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.array
    }
}

impl<T: Scalar> Vector3<T> {
    /// Zero vector (0, 0, 0).
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinema_math::Vector3;
    ///
    /// let gray = Vector3::splat(0.5);
    /// assert_eq!(gray, Vector3::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(k: T) -> Self {
        Self::new(k, k, k)
    }

    /// Creates from raw component storage.
    ///
    /// `None`, or a slice shorter than three elements, gives the zero
    /// vector.
    #[inline]
    pub fn from_slice(v: Option<&[T]>) -> Self {
        match v {
            Some(&[x, y, z, ..]) => Self::new(x, y, z),
            _ => Self::zero(),
        }
    }

    /// Promotes a 2D vector, using `z` for the third component.
    #[inline]
    pub fn from_vector2(v: Vector2<T>, z: T) -> Self {
        Self::new(v.x(), v.y(), z)
    }

    /// Drops the z component.
    #[inline]
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.x(), self.y())
    }

    /// Copies the components out.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        self.array
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self.array[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.array[1]
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.array[2]
    }

    /// Sets the X component.
    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.array[0] = x;
    }

    /// Sets the Y component.
    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.array[1] = y;
    }

    /// Sets the Z component.
    #[inline]
    pub fn set_z(&mut self, z: T) {
        self.array[2] = z;
    }

    /// Mutable X component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.array[0]
    }

    /// Mutable Y component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.array[1]
    }

    /// Mutable Z component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.array[2]
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product. Same as `self ^ other`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Unary plus. Returns a copy of `self`.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Height above this point of a sphere of `radius` centred at the
    /// origin; 0 when the point is outside the sphere.
    pub fn bound(&self, radius: T) -> T {
        let l = self.dot(*self);
        let r = radius * radius;
        if l > r { T::zero() } else { (r - l).sqrt() }
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.array.iter().all(|c| c.is_finite())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.array.iter().any(|c| c.is_nan())
    }
}

impl<T: Scalar> InnerSpace for Vector3<T> {
    type Scalar = T;

    #[inline]
    fn dot(self, other: Self) -> T {
        Vector3::dot(self, other)
    }

    #[inline]
    fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()))
    }

    #[inline]
    fn zip_map<F: Fn(T, T) -> T>(self, other: Self, f: F) -> Self {
        Self::new(
            f(self.x(), other.x()),
            f(self.y(), other.y()),
            f(self.z(), other.z()),
        )
    }

    #[inline]
    fn zero() -> Self {
        Vector3::zero()
    }
}

/// Sine of the angle between `u` and `v`.
///
/// `norm(u ^ v) * inorm(u) * inorm(v)`, always non-negative.
#[inline]
pub fn sin<T: Scalar>(u: Vector3<T>, v: Vector3<T>) -> T {
    norm(u ^ v) * inorm(u) * inorm(v)
}

/// Unit normal to the plane spanned by `u` and `v`.
#[inline]
pub fn normalv<T: Scalar>(u: Vector3<T>, v: Vector3<T>) -> Vector3<T> {
    norml(norml(u) ^ norml(v))
}

/// Unit normal of the plane through the points `u`, `v` and `w`.
///
/// Oriented by the right-hand rule along `u -> v -> w`.
///
/// # Example
///
/// ```rust
/// use kinema_math::{Vector3, normalv3};
///
/// let n = normalv3(
///     Vector3::new(0.0, 0.0, 5.0),
///     Vector3::new(2.0, 0.0, 5.0),
///     Vector3::new(0.0, 7.0, 5.0),
/// );
/// assert_eq!(n, Vector3::new(0.0, 0.0, 1.0));
/// ```
#[inline]
pub fn normalv3<T: Scalar>(u: Vector3<T>, v: Vector3<T>, w: Vector3<T>) -> Vector3<T> {
    normalv(v - u, w - u)
}

// Indexing
impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.array[i]
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.array[i]
    }
}

// Vector3 + Vector3
impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

// Vector3 - Vector3
impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

// Vector3 * Vector3 (dot product)
impl<T: Scalar> Mul for Vector3<T> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: Self) -> T {
        self.dot(rhs)
    }
}

// Vector3 ^ Vector3 (cross product)
impl<T: Scalar> BitXor for Vector3<T> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self.cross(rhs)
    }
}

impl<T: Scalar> BitXorAssign for Vector3<T> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.cross(rhs);
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

// Vector3 + T
impl<T: Scalar> Add<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, k: T) -> Self {
        Self::new(self.x() + k, self.y() + k, self.z() + k)
    }
}

// Vector3 - T
impl<T: Scalar> Sub<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, k: T) -> Self {
        Self::new(self.x() - k, self.y() - k, self.z() - k)
    }
}

// Vector3 * T
impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, k: T) -> Self {
        Self::new(self.x() * k, self.y() * k, self.z() * k)
    }
}

// Vector3 / T
impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(self, k: T) -> Self {
        Self::new(self.x() / k, self.y() / k, self.z() / k)
    }
}

impl<T: Scalar> AddAssign<T> for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, k: T) {
        self.array.iter_mut().for_each(|c| *c += k);
    }
}

impl<T: Scalar> SubAssign<T> for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, k: T) {
        self.array.iter_mut().for_each(|c| *c -= k);
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, k: T) {
        self.array.iter_mut().for_each(|c| *c *= k);
    }
}

/// Division by exactly zero leaves the vector unchanged.
impl<T: Scalar> DivAssign<T> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, k: T) {
        if k != T::zero() {
            self.array.iter_mut().for_each(|c| *c /= k);
        }
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(a: [T; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> [T; 3] {
        v.array
    }
}

impl<T: Scalar> From<(Vector2<T>, T)> for Vector3<T> {
    #[inline]
    fn from((v, z): (Vector2<T>, T)) -> Self {
        Self::from_vector2(v, z)
    }
}

macro_rules! impl_scalar_lhs_vec3 {
    ($($t:ty),*) => {$(
        // T * Vector3
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            #[inline]
            fn mul(self, rhs: Vector3<$t>) -> Vector3<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_vec3!(f32, f64);
impl_approx_eq!(Vector3);
