//! 2D vector type.
//!
//! [`Vector2`] is a point or direction in the plane. It is the building
//! block for [`Vector3`](crate::Vector3) promotion and for arcball-style
//! screen inputs.
//!
//! # Usage
//!
//! ```rust
//! use kinema_math::{Vector2, arg, atan2, cos};
//!
//! let u = Vector2::new(1.0, 0.0);
//! let v = Vector2::new(0.0, 1.0);
//!
//! assert_eq!(cos(u, v), 0.0);
//! assert_eq!(u * v, 0.0); // dot product
//!
//! // `arg` and `atan2` use opposite argument orders.
//! assert_eq!(arg(v), 0.0);
//! assert_eq!(atan2(v), std::f64::consts::FRAC_PI_2);
//! ```

use crate::space::InnerSpace;
use kinema_core::Scalar;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 2-component vector.
///
/// Components live in a single array; `x` and `y` are accessors over
/// indices 0 and 1.
///
/// # Example
///
/// ```rust
/// use kinema_math::Vector2;
///
/// let mut v = Vector2::new(1.0f32, 2.0);
/// assert_eq!(v.x(), v[0]);
/// v.set_y(5.0);
/// assert_eq!(v[1], 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2<T> {
    array: [T; 2],
}

impl<T> Vector2<T> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { array: [x, y] }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(array: [T; 2]) -> Self {
        Self { array }
    }

    /// Borrows the backing array.
    #[inline]
    pub const fn as_array(&self) -> &[T; 2] {
        &self.array
    }

    /// Borrows the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.array
    }
}

impl<T: Scalar> Vector2<T> {
    /// Zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Creates a vector with both components set to `k`.
    #[inline]
    pub fn splat(k: T) -> Self {
        Self::new(k, k)
    }

    /// Creates from raw component storage.
    ///
    /// `None`, or a slice shorter than two elements, gives the zero vector.
    #[inline]
    pub fn from_slice(v: Option<&[T]>) -> Self {
        match v {
            Some(&[x, y, ..]) => Self::new(x, y),
            _ => Self::zero(),
        }
    }

    /// Copies the components out.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
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

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Unary plus. Returns a copy of `self`.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Height above this point of a sphere of `radius` centred at the
    /// origin.
    ///
    /// Returns 0 when the point lies outside the sphere, otherwise
    /// `sqrt(radius^2 - |v|^2)`. Used to lift 2D pointer positions onto an
    /// arcball.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinema_math::Vector2;
    ///
    /// assert_eq!(Vector2::new(3.0, 0.0).bound(5.0), 4.0);
    /// assert_eq!(Vector2::new(6.0, 0.0).bound(5.0), 0.0);
    /// ```
    pub fn bound(&self, radius: T) -> T {
        let l = self.dot(*self);
        let r = radius * radius;
        if l > r { T::zero() } else { (r - l).sqrt() }
    }

    /// Exchanges the x and y components in place.
    #[inline]
    pub fn swap(&mut self) {
        self.array.swap(0, 1);
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.array.iter().all(|c| c.is_finite())
    }
}

impl<T: Scalar> InnerSpace for Vector2<T> {
    type Scalar = T;

    #[inline]
    fn dot(self, other: Self) -> T {
        Vector2::dot(self, other)
    }

    #[inline]
    fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        Self::new(f(self.x()), f(self.y()))
    }

    #[inline]
    fn zip_map<F: Fn(T, T) -> T>(self, other: Self, f: F) -> Self {
        Self::new(f(self.x(), other.x()), f(self.y(), other.y()))
    }

    #[inline]
    fn zero() -> Self {
        Vector2::zero()
    }
}

/// Polar angle measured from the y axis: `atan2(x, y)`.
#[inline]
pub fn arg<T: Scalar>(v: Vector2<T>) -> T {
    v.x().atan2(v.y())
}

/// Polar angle measured from the x axis: `atan2(y, x)`.
#[inline]
pub fn atan2<T: Scalar>(v: Vector2<T>) -> T {
    v.y().atan2(v.x())
}

impl<T> Index<usize> for Vector2<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.array[i]
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.array[i]
    }
}

// Vector2 + Vector2
impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

// Vector2 - Vector2
impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

// Vector2 * Vector2 (dot product)
impl<T: Scalar> Mul for Vector2<T> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: Self) -> T {
        self.dot(rhs)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.array[0] += rhs.x();
        self.array[1] += rhs.y();
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.array[0] -= rhs.x();
        self.array[1] -= rhs.y();
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

// Vector2 + T
impl<T: Scalar> Add<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, k: T) -> Self {
        Self::new(self.x() + k, self.y() + k)
    }
}

// Vector2 - T
impl<T: Scalar> Sub<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, k: T) -> Self {
        Self::new(self.x() - k, self.y() - k)
    }
}

// Vector2 * T
impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, k: T) -> Self {
        Self::new(self.x() * k, self.y() * k)
    }
}

// Vector2 / T
impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn div(self, k: T) -> Self {
        Self::new(self.x() / k, self.y() / k)
    }
}

impl<T: Scalar> AddAssign<T> for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, k: T) {
        self.array.iter_mut().for_each(|c| *c += k);
    }
}

impl<T: Scalar> SubAssign<T> for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, k: T) {
        self.array.iter_mut().for_each(|c| *c -= k);
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    #[inline]
    fn mul_assign(&mut self, k: T) {
        self.array.iter_mut().for_each(|c| *c *= k);
    }
}

/// Division by exactly zero leaves the vector unchanged.
impl<T: Scalar> DivAssign<T> for Vector2<T> {
    #[inline]
    fn div_assign(&mut self, k: T) {
        if k != T::zero() {
            self.array.iter_mut().for_each(|c| *c /= k);
        }
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from(a: [T; 2]) -> Self {
        Self::from_array(a)
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vector2<T>) -> [T; 2] {
        v.array
    }
}

macro_rules! impl_scalar_lhs_vec2 {
    ($($t:ty),*) => {$(
        // T * Vector2
        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            #[inline]
            fn mul(self, rhs: Vector2<$t>) -> Vector2<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_vec2!(f32, f64);
impl_approx_eq!(Vector2);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cos, norm};

    #[test]
    fn test_vec2_constructors() {
        assert_eq!(Vector2::<f64>::default(), Vector2::new(0.0, 0.0));
        assert_eq!(Vector2::splat(2.0f32), Vector2::new(2.0, 2.0));
        assert_eq!(Vector2::from_slice(Some(&[1.0f64, 2.0][..])), Vector2::new(1.0, 2.0));
        assert_eq!(Vector2::<f64>::from_slice(None), Vector2::zero());
        assert_eq!(Vector2::from_slice(Some(&[1.0f64][..])), Vector2::zero());
    }

    #[test]
    fn test_vec2_named_and_indexed() {
        let mut v = Vector2::new(1.0f64, 2.0);
        v[0] = 3.0;
        assert_eq!(v.x(), 3.0);
        *v.y_mut() = 4.0;
        assert_eq!(v[1], 4.0);
        assert_eq!(v.as_slice(), &[3.0, 4.0]);
    }

    #[test]
    fn test_vec2_ops() {
        let a = Vector2::new(1.0f64, 2.0);
        let b = Vector2::new(4.0, 6.0);

        assert_eq!(a + b, Vector2::new(5.0, 8.0));
        assert_eq!(b - a, Vector2::new(3.0, 4.0));
        assert_eq!(a * b, 16.0);
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vector2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2::new(2.0, 3.0));
        assert_eq!(a + 1.0, Vector2::new(2.0, 3.0));
        assert_eq!(a - 1.0, Vector2::new(0.0, 1.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a.pos(), a);
    }

    #[test]
    fn test_vec2_assign_ops() {
        let mut v = Vector2::new(1.0f32, 2.0);
        v += Vector2::splat(1.0);
        assert_eq!(v, Vector2::new(2.0, 3.0));
        v -= Vector2::new(2.0, 2.0);
        assert_eq!(v, Vector2::new(0.0, 1.0));
        v += 1.0;
        v *= 3.0;
        assert_eq!(v, Vector2::new(3.0, 6.0));
        v -= 1.0;
        v /= 2.0;
        assert_eq!(v, Vector2::new(1.0, 2.5));
    }

    #[test]
    fn test_vec2_div_assign_zero_is_noop() {
        let mut v = Vector2::new(1.0f64, 2.0);
        v /= 0.0;
        assert_eq!(v, Vector2::new(1.0, 2.0));

        // The by-value form follows IEEE semantics.
        assert!((v / 0.0).x().is_infinite());
    }

    #[test]
    fn test_vec2_arg_atan2_conventions() {
        let v = Vector2::new(0.0f64, 1.0);
        assert_eq!(arg(v), 0.0);
        assert_eq!(atan2(v), std::f64::consts::FRAC_PI_2);

        let w = Vector2::new(1.0f64, 0.0);
        assert_eq!(arg(w), std::f64::consts::FRAC_PI_2);
        assert_eq!(atan2(w), 0.0);
    }

    #[test]
    fn test_vec2_cos() {
        let u = Vector2::new(1.0f64, 0.0);
        let v = Vector2::new(0.0, 1.0);
        assert_eq!(cos(u, v), 0.0);
    }

    #[test]
    fn test_vec2_bound() {
        assert_eq!(Vector2::new(0.0f64, 0.0).bound(2.0), 2.0);
        assert_eq!(Vector2::new(3.0f64, 4.0).bound(5.0), 0.0);
        assert_eq!(Vector2::new(3.0f64, 4.0).bound(4.0), 0.0);
    }

    #[test]
    fn test_vec2_swap() {
        let mut v = Vector2::new(1.0f32, 2.0);
        v.swap();
        assert_eq!(v, Vector2::new(2.0, 1.0));
        assert_eq!(norm(v), norm(Vector2::new(1.0f32, 2.0)));
    }
}
