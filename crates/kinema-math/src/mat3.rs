//! 3x3 matrix type with a per-instance singularity tolerance.
//!
//! [`Matrix3`] is used for rotations, camera bases and linear color
//! transforms (RGB to XYZ).
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! `v * M` is the row-vector form: each component is `v` dotted with a
//! column of `M`, which equals `transpose(M) * v`.
//!
//! # Tolerance
//!
//! Every matrix carries a tolerance (default `1e-9`). [`inv`] refuses to
//! invert when `|det| < tolerance` and scalar division is skipped when the
//! divisor is below it. In both cases the input comes back unchanged and
//! the event is reported through `tracing`. The `try_*` functions report
//! the same conditions as [`Error`] values instead.
//!
//! # Usage
//!
//! ```rust
//! use kinema_math::{Matrix3, Vector3, det, diag, inv};
//!
//! let m = diag(Vector3::new(2.0, 3.0, 4.0));
//! assert_eq!(det(&m), 24.0);
//!
//! let v = Vector3::new(1.0, 1.0, 1.0);
//! assert_eq!(m * v, Vector3::new(2.0, 3.0, 4.0));
//! assert_eq!(inv(&m) * (m * v), v);
//! ```

use crate::space::{norml, proj};
use crate::vec2::Vector2;
use crate::vec3::Vector3;
use kinema_core::{Error, Result, Scalar};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Sub, SubAssign};
use tracing::{debug, error};

/// A 3x3 matrix.
///
/// Stored in row-major order. Use [`Matrix3::from_rows`],
/// [`Matrix3::from_cols`] or [`Matrix3::from_vectors`] to construct from
/// components.
///
/// Equality compares the nine elements only; the tolerance is not part of
/// the value.
///
/// # Example
///
/// ```rust
/// use kinema_math::{Matrix3, Vector3};
///
/// let identity = Matrix3::identity();
/// let v = Vector3::new(1.0f32, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3<T> {
    array: [T; 9],
    tolerance: T,
}

impl<T: Scalar> Default for Matrix3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> PartialEq for Matrix3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T> Matrix3<T> {
    /// Borrows the elements, row-major.
    #[inline]
    pub const fn as_array(&self) -> &[T; 9] {
        &self.array
    }

    /// Borrows the elements as a slice, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.array
    }
}

impl<T: Scalar> Matrix3<T> {
    /// Zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self::from_row_major([T::zero(); 9])
    }

    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::from_row_major([l, o, o, o, l, o, o, o, l])
    }

    #[inline]
    fn from_row_major(array: [T; 9]) -> Self {
        Self {
            array,
            tolerance: T::SINGULAR_TOLERANCE,
        }
    }

    /// Creates from nine elements.
    ///
    /// With `row_major` the elements are read row by row, otherwise column
    /// by column. `None` gives the zero matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinema_math::Matrix3;
    ///
    /// let e = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    /// let r = Matrix3::from_array(true, Some(&e));
    /// let c = Matrix3::from_array(false, Some(&e));
    /// assert_eq!(r.get(0, 1), 2.0);
    /// assert_eq!(c.get(0, 1), 4.0);
    /// ```
    pub fn from_array(row_major: bool, elements: Option<&[T; 9]>) -> Self {
        let mut m = Self::zero();
        if let Some(e) = elements {
            m.set_matrix(row_major, e);
        }
        m
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub fn from_rows(rows: [[T; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self::from_row_major([
            r0[0], r0[1], r0[2], r1[0], r1[1], r1[2], r2[0], r2[1], r2[2],
        ])
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub fn from_cols(cols: [[T; 3]; 3]) -> Self {
        Self::from_rows(cols).transpose()
    }

    /// Creates a matrix from three vectors, used as rows when `row_major`
    /// is set and as columns otherwise.
    pub fn from_vectors(row_major: bool, a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        let rows = Self::from_rows([a.to_array(), b.to_array(), c.to_array()]);
        if row_major { rows } else { rows.transpose() }
    }

    /// Like [`from_vectors`](Self::from_vectors) with each 2D vector
    /// embedded at `z = 0`.
    ///
    /// As rows the third column is zero; as columns the third row is zero.
    pub fn from_vectors2(row_major: bool, a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) -> Self {
        let z = T::zero();
        Self::from_vectors(
            row_major,
            Vector3::from_vector2(a, z),
            Vector3::from_vector2(b, z),
            Vector3::from_vector2(c, z),
        )
    }

    /// Overwrites all nine elements, read row by row when `row_major` is
    /// set and column by column otherwise. The tolerance is kept.
    pub fn set_matrix(&mut self, row_major: bool, elements: &[T; 9]) {
        if row_major {
            self.array = *elements;
        } else {
            for r in 0..3 {
                for c in 0..3 {
                    self.array[r * 3 + c] = elements[c * 3 + r];
                }
            }
        }
    }

    /// Copies the elements out, row-major.
    #[inline]
    pub fn to_array(&self) -> [T; 9] {
        self.array
    }

    /// Singularity tolerance of this matrix.
    #[inline]
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Sets the singularity tolerance.
    ///
    /// Zero, negative or NaN values reset it to the default `1e-9`.
    pub fn set_tolerance(&mut self, tolerance: T) {
        self.tolerance = if tolerance > T::zero() {
            tolerance
        } else {
            T::SINGULAR_TOLERANCE
        };
    }

    #[inline]
    fn offset(row: usize, col: usize) -> Option<usize> {
        (row < 3 && col < 3).then_some(row * 3 + col)
    }

    /// Element at `(row, col)`.
    ///
    /// Out of range coordinates are logged and give NaN.
    pub fn get(&self, row: usize, col: usize) -> T {
        match Self::offset(row, col) {
            Some(i) => self.array[i],
            None => {
                error!(row, col, "Matrix3 element out of range");
                T::nan()
            }
        }
    }

    /// Checked element read.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        Self::offset(row, col)
            .map(|i| self.array[i])
            .ok_or_else(|| Error::index_out_of_bounds(row, col, 3, 3))
    }

    /// Mutable element at `(row, col)`, `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        Self::offset(row, col).map(|i| &mut self.array[i])
    }

    /// Writes the element at `(row, col)`.
    ///
    /// Out of range writes are logged and ignored.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        match Self::offset(row, col) {
            Some(i) => self.array[i] = value,
            None => error!(row, col, "Matrix3 element out of range, write ignored"),
        }
    }

    /// Returns a row as Vector3, or the zero vector when `i >= 3`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector3<T> {
        if i < 3 {
            Vector3::new(self.array[i * 3], self.array[i * 3 + 1], self.array[i * 3 + 2])
        } else {
            Vector3::zero()
        }
    }

    /// Returns a column as Vector3, or the zero vector when `i >= 3`.
    #[inline]
    pub fn column(&self, i: usize) -> Vector3<T> {
        if i < 3 {
            Vector3::new(self.array[i], self.array[3 + i], self.array[6 + i])
        } else {
            Vector3::zero()
        }
    }

    /// Replaces a row. Ignored when `i >= 3`.
    pub fn set_row(&mut self, i: usize, v: Vector3<T>) {
        if i < 3 {
            self.array[i * 3..i * 3 + 3].copy_from_slice(v.as_slice());
        }
    }

    /// Replaces a column. Ignored when `i >= 3`.
    pub fn set_column(&mut self, i: usize, v: Vector3<T>) {
        if i < 3 {
            for r in 0..3 {
                self.array[r * 3 + i] = v[r];
            }
        }
    }

    /// Returns the transpose of this matrix. Keeps the tolerance.
    #[inline]
    pub fn transpose(&self) -> Self {
        let m = &self.array;
        Self {
            array: [m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]],
            tolerance: self.tolerance,
        }
    }

    /// Computes the determinant by cofactor expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.array;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> T {
        self.array[0] + self.array[4] + self.array[8]
    }

    /// Adjugate scaled by `1/det`. The caller guarantees `det` is usable.
    fn adjugate_over(&self, det: T) -> Self {
        let m = &self.array;
        let k = T::one() / det;
        Self {
            array: [
                (m[4] * m[8] - m[5] * m[7]) * k,
                (m[2] * m[7] - m[1] * m[8]) * k,
                (m[1] * m[5] - m[2] * m[4]) * k,
                (m[5] * m[6] - m[3] * m[8]) * k,
                (m[0] * m[8] - m[2] * m[6]) * k,
                (m[2] * m[3] - m[0] * m[5]) * k,
                (m[3] * m[7] - m[4] * m[6]) * k,
                (m[1] * m[6] - m[0] * m[7]) * k,
                (m[0] * m[4] - m[1] * m[3]) * k,
            ],
            tolerance: self.tolerance,
        }
    }

    /// Checked inverse.
    ///
    /// Fails with [`Error::SingularMatrix`] when `|det| < tolerance` or the
    /// determinant is NaN.
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() < self.tolerance || det.is_nan() {
            return Err(Error::singular(det.as_f64(), self.tolerance.as_f64()));
        }
        Ok(self.adjugate_over(det))
    }

    /// Computes the inverse of this matrix.
    ///
    /// When the matrix is singular the failure is logged and `self` is
    /// returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinema_math::Matrix3;
    ///
    /// let z = Matrix3::<f64>::zero();
    /// assert_eq!(z.inverse(), z);
    /// ```
    pub fn inverse(&self) -> Self {
        match self.try_inverse() {
            Ok(m) => m,
            Err(e) => {
                error!(error = %e, "Matrix3 inverse skipped");
                *self
            }
        }
    }

    /// Gram-Schmidt orthonormalization of the rows, in order.
    ///
    /// Row 0 is normalized as is; row 1 is made orthogonal to it and
    /// normalized; row 2 is made orthogonal to both and normalized.
    pub fn orthonormalized(&self) -> Self {
        let v0 = norml(self.row(0));
        let r1 = self.row(1);
        let v1 = norml(r1 - proj(r1, v0));
        let r2 = self.row(2);
        let v2 = norml(r2 - proj(r2, v0) - proj(r2, v1));

        let mut m = Self::from_vectors(true, v0, v1, v2);
        m.tolerance = self.tolerance;
        m
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.array.iter().all(|x| x.is_finite())
    }

    #[inline]
    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            array: self.array.map(f),
            tolerance: self.tolerance,
        }
    }

    #[inline]
    fn zip_map(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = *self;
        for (a, b) in out.array.iter_mut().zip(other.array) {
            *a = f(*a, b);
        }
        out
    }

    fn divides_by(&self, k: T) -> bool {
        let ok = k >= self.tolerance;
        if !ok {
            debug!(divisor = %k, tolerance = %self.tolerance, "Matrix3 division skipped");
        }
        ok
    }

    /// Checked scalar division.
    pub fn try_div(&self, k: T) -> Result<Self> {
        if k >= self.tolerance {
            Ok(self.map(|x| x / k))
        } else {
            Err(Error::divisor_below_tolerance(
                k.as_f64(),
                self.tolerance.as_f64(),
            ))
        }
    }
}

/// Determinant. See [`Matrix3::determinant`].
#[inline]
pub fn det<T: Scalar>(m: &Matrix3<T>) -> T {
    m.determinant()
}

/// Inverse, or `m` unchanged when singular. See [`Matrix3::inverse`].
#[inline]
pub fn inv<T: Scalar>(m: &Matrix3<T>) -> Matrix3<T> {
    m.inverse()
}

/// Checked inverse. See [`Matrix3::try_inverse`].
#[inline]
pub fn try_inv<T: Scalar>(m: &Matrix3<T>) -> Result<Matrix3<T>> {
    m.try_inverse()
}

/// Transpose.
#[inline]
pub fn tr<T: Scalar>(m: &Matrix3<T>) -> Matrix3<T> {
    m.transpose()
}

/// Diagonal matrix with `v` on the diagonal.
///
/// # Example
///
/// ```rust
/// use kinema_math::{Matrix3, Vector3, diag};
///
/// assert_eq!(diag(Vector3::splat(1.0)), Matrix3::<f64>::identity());
/// ```
#[inline]
pub fn diag<T: Scalar>(v: Vector3<T>) -> Matrix3<T> {
    let o = T::zero();
    Matrix3::from_rows([[v.x(), o, o], [o, v.y(), o], [o, o, v.z()]])
}

/// Row-wise Gram-Schmidt. See [`Matrix3::orthonormalized`].
#[inline]
pub fn orthn_matrix<T: Scalar>(m: &Matrix3<T>) -> Matrix3<T> {
    m.orthonormalized()
}

/// Solves `M x = b` as `inv(M) * b`.
///
/// A singular `M` is not inverted (see [`inv`]), so the result is then
/// `M * b`.
#[inline]
pub fn solve<T: Scalar>(b: Vector3<T>, m: &Matrix3<T>) -> Vector3<T> {
    inv(m) * b
}

/// Checked [`solve`]: fails when `M` is singular.
pub fn try_solve<T: Scalar>(b: Vector3<T>, m: &Matrix3<T>) -> Result<Vector3<T>> {
    Ok(m.try_inverse()? * b)
}

impl<T: Scalar> Index<(usize, usize)> for Matrix3<T> {
    type Output = T;

    /// Out of range coordinates are logged and yield a shared NaN.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match Self::offset(row, col) {
            Some(i) => &self.array[i],
            None => {
                error!(row, col, "Matrix3 element out of range");
                T::sentinel()
            }
        }
    }
}

// Matrix3 + Matrix3
impl<T: Scalar> Add for Matrix3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

// Matrix3 - Matrix3
impl<T: Scalar> Sub for Matrix3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a - b)
    }
}

// Matrix3 * Matrix3
/// Standard product `self . rhs`: `self` is applied after `rhs`.
///
/// For the reversed composition `rhs . self`, write `rhs * self`.
impl<T: Scalar> Mul for Matrix3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = self;
        for i in 0..3 {
            for j in 0..3 {
                result.array[i * 3 + j] = self.array[i * 3] * rhs.array[j]
                    + self.array[i * 3 + 1] * rhs.array[3 + j]
                    + self.array[i * 3 + 2] * rhs.array[6 + j];
            }
        }
        result
    }
}

impl<T: Scalar> AddAssign for Matrix3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Matrix3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Matrix3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Matrix3 * Vector3 (rows dotted with v)
impl<T: Scalar> Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        Vector3::new(self.row(0) * v, self.row(1) * v, self.row(2) * v)
    }
}

// Vector3 * Matrix3 (columns dotted with v)
impl<T: Scalar> Mul<Matrix3<T>> for Vector3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, m: Matrix3<T>) -> Vector3<T> {
        Vector3::new(m.column(0) * self, m.column(1) * self, m.column(2) * self)
    }
}

// Matrix3 + T
impl<T: Scalar> Add<T> for Matrix3<T> {
    type Output = Self;

    #[inline]
    fn add(self, k: T) -> Self {
        self.map(|x| x + k)
    }
}

// Matrix3 - T
impl<T: Scalar> Sub<T> for Matrix3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, k: T) -> Self {
        self.map(|x| x - k)
    }
}

// Matrix3 * T
impl<T: Scalar> Mul<T> for Matrix3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, k: T) -> Self {
        self.map(|x| x * k)
    }
}

/// Applies only when `k >= tolerance`; otherwise returns the matrix
/// unchanged.
impl<T: Scalar> Div<T> for Matrix3<T> {
    type Output = Self;

    #[inline]
    fn div(self, k: T) -> Self {
        if self.divides_by(k) {
            self.map(|x| x / k)
        } else {
            self
        }
    }
}

impl<T: Scalar> AddAssign<T> for Matrix3<T> {
    #[inline]
    fn add_assign(&mut self, k: T) {
        self.array.iter_mut().for_each(|x| *x += k);
    }
}

impl<T: Scalar> SubAssign<T> for Matrix3<T> {
    #[inline]
    fn sub_assign(&mut self, k: T) {
        self.array.iter_mut().for_each(|x| *x -= k);
    }
}

impl<T: Scalar> MulAssign<T> for Matrix3<T> {
    #[inline]
    fn mul_assign(&mut self, k: T) {
        self.array.iter_mut().for_each(|x| *x *= k);
    }
}

impl<T: Scalar> DivAssign<T> for Matrix3<T> {
    #[inline]
    fn div_assign(&mut self, k: T) {
        if self.divides_by(k) {
            self.array.iter_mut().for_each(|x| *x /= k);
        }
    }
}

macro_rules! impl_scalar_lhs_mat3 {
    ($($t:ty),*) => {$(
        // T * Matrix3
        impl Mul<Matrix3<$t>> for $t {
            type Output = Matrix3<$t>;

            #[inline]
            fn mul(self, rhs: Matrix3<$t>) -> Matrix3<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mat3!(f32, f64);
impl_approx_eq!(Matrix3);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Matrix3<f64> {
        Matrix3::from_rows([[2.0, -1.0, 0.5], [0.3, 4.0, 1.0], [-2.0, 0.0, 3.0]])
    }

    #[test]
    fn test_mat3_default_is_zero() {
        let m = Matrix3::<f64>::default();
        assert_eq!(m, Matrix3::zero());
        assert_eq!(m.tolerance(), 1e-9);
        assert_eq!(Matrix3::<f32>::identity().trace(), 3.0);
    }

    #[test]
    fn test_mat3_from_array_order() {
        let e = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let r = Matrix3::from_array(true, Some(&e));
        let c = Matrix3::from_array(false, Some(&e));
        assert_eq!(r.as_array(), &e);
        assert_eq!(c, r.transpose());
        assert_eq!(Matrix3::<f64>::from_array(true, None), Matrix3::zero());
    }

    #[test]
    fn test_mat3_from_vectors() {
        let a = Vector3::new(1.0f64, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        let c = Vector3::new(7.0, 8.0, 9.0);

        let rows = Matrix3::from_vectors(true, a, b, c);
        assert_eq!(rows.row(0), a);
        assert_eq!(rows.row(1), b);
        assert_eq!(rows.row(2), c);

        let cols = Matrix3::from_vectors(false, a, b, c);
        assert_eq!(cols.column(0), a);
        assert_eq!(cols.column(1), b);
        assert_eq!(cols.column(2), c);
        assert_eq!(cols, Matrix3::from_cols([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]));
    }

    #[test]
    fn test_mat3_from_vectors2() {
        let a = Vector2::new(1.0f64, 2.0);
        let b = Vector2::new(3.0, 4.0);
        let c = Vector2::new(5.0, 6.0);

        let rows = Matrix3::from_vectors2(true, a, b, c);
        assert_eq!(rows.column(2), Vector3::zero());
        assert_eq!(rows.row(1), Vector3::new(3.0, 4.0, 0.0));

        let cols = Matrix3::from_vectors2(false, a, b, c);
        assert_eq!(cols.row(2), Vector3::zero());
        assert_eq!(cols.column(2), Vector3::new(5.0, 6.0, 0.0));
    }

    #[test]
    fn test_mat3_element_access() {
        let mut m = sample();
        assert_eq!(m.get(1, 1), 4.0);
        assert_eq!(m[(2, 0)], -2.0);
        assert!(m.get(3, 0).is_nan());
        assert!(m[(0, 3)].is_nan());

        m.set(0, 0, 9.0);
        assert_eq!(m.get(0, 0), 9.0);
        m.set(5, 5, 1.0);
        assert_eq!(m.as_array().iter().filter(|x| **x == 1.0).count(), 1);

        *m.get_mut(2, 2).unwrap() = -1.0;
        assert_eq!(m[(2, 2)], -1.0);
        assert!(m.get_mut(3, 3).is_none());
    }

    #[test]
    fn test_mat3_try_get() {
        let m = sample();
        assert_eq!(m.try_get(0, 1), Ok(-1.0));
        let err = m.try_get(0, 3).unwrap_err();
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_mat3_rows_columns() {
        let mut m = Matrix3::<f64>::zero();
        m.set_row(1, Vector3::new(1.0, 2.0, 3.0));
        m.set_column(2, Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(m.row(1), Vector3::new(1.0, 2.0, 8.0));
        assert_eq!(m.column(2), Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(m.row(3), Vector3::zero());
        assert_eq!(m.column(3), Vector3::zero());

        let before = m;
        m.set_row(3, Vector3::splat(1.0));
        m.set_column(4, Vector3::splat(1.0));
        assert_eq!(m, before);
    }

    #[test]
    fn test_mat3_tolerance() {
        let mut m = Matrix3::<f64>::identity();
        m.set_tolerance(1e-3);
        assert_eq!(m.tolerance(), 1e-3);
        assert_eq!((m * 2.0).tolerance(), 1e-3);
        m.set_tolerance(-1.0);
        assert_eq!(m.tolerance(), 1e-9);
        m.set_tolerance(0.5);
        m.set_tolerance(f64::NAN);
        assert_eq!(m.tolerance(), 1e-9);
    }

    #[test]
    fn test_mat3_determinant() {
        assert_eq!(det(&diag(Vector3::new(2.0f64, 3.0, 4.0))), 24.0);
        assert_eq!(det(&Matrix3::<f64>::zero()), 0.0);
        let m = Matrix3::from_rows([[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        assert_relative_eq!(det(&m), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mat3_inverse() {
        let m = sample();
        let i = inv(&m);
        assert_relative_eq!(m * i, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(i * m, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(inv(&i), m, epsilon = 1e-12);
    }

    #[test]
    fn test_mat3_inverse_diag() {
        let m = diag(Vector3::new(2.0f64, 3.0, 4.0));
        assert_relative_eq!(inv(&m), diag(Vector3::new(0.5, 1.0 / 3.0, 0.25)), epsilon = 1e-15);
    }

    #[test]
    fn test_mat3_inverse_singular_unchanged() {
        let z = Matrix3::<f64>::zero();
        assert_eq!(inv(&z), z);

        let s = Matrix3::from_rows([[1.0f64, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert_eq!(inv(&s), s);
        assert!(try_inv(&s).unwrap_err().is_degenerate());
    }

    #[test]
    fn test_mat3_inverse_negative_det() {
        let m = diag(Vector3::new(-2.0f64, 1.0, 1.0));
        assert_eq!(det(&m), -2.0);
        assert_eq!(inv(&m), diag(Vector3::new(-0.5, 1.0, 1.0)));
    }

    #[test]
    fn test_mat3_inverse_respects_tolerance() {
        let mut m = diag(Vector3::new(1e-2f64, 1.0, 1.0));
        assert_ne!(inv(&m), m);
        m.set_tolerance(0.1);
        assert_eq!(inv(&m), m);
    }

    #[test]
    fn test_mat3_transpose() {
        let m = sample();
        assert_eq!(tr(&m).row(0), m.column(0));
        assert_eq!(tr(&tr(&m)), m);
    }

    #[test]
    fn test_mat3_add_sub() {
        let a = sample();
        let b = Matrix3::identity();
        assert_eq!((a + b).get(0, 0), 3.0);
        assert_eq!((a - b).get(0, 0), 1.0);
        assert_eq!((b - a).get(0, 0), -1.0);
        assert_eq!((a - b).get(0, 1), -1.0);

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_mat3_product_order() {
        let a = Matrix3::from_rows([[1.0f64, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let b = Matrix3::from_rows([[1.0f64, 0.0, 0.0], [3.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(
            a * b,
            Matrix3::from_rows([[7.0, 2.0, 0.0], [3.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
        );
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
        assert_ne!(a * b, b * a);
        assert_eq!(
            b * a,
            Matrix3::from_rows([[1.0, 2.0, 0.0], [3.0, 7.0, 0.0], [0.0, 0.0, 1.0]])
        );
    }

    #[test]
    fn test_mat3_vector_products() {
        let m = Matrix3::from_rows([[1.0f64, 2.0, 3.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let v = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(m * v, Vector3::new(6.0, 1.0, 1.0));
        assert_eq!(v * m, Vector3::new(1.0, 3.0, 4.0));
        assert_eq!(v * m, m.transpose() * v);
    }

    #[test]
    fn test_mat3_scalar_ops() {
        let m = Matrix3::<f64>::identity();
        assert_eq!((m + 1.0).get(0, 1), 1.0);
        assert_eq!((m - 1.0).get(0, 0), 0.0);
        assert_eq!((m * 3.0).get(2, 2), 3.0);
        assert_eq!((3.0 * m).get(2, 2), 3.0);
        assert_eq!((m / 2.0).get(1, 1), 0.5);

        let mut n = m;
        n += 1.0;
        n -= 1.0;
        n *= 4.0;
        n /= 2.0;
        assert_eq!(n, diag(Vector3::splat(2.0)));
    }

    #[test]
    fn test_mat3_division_below_tolerance() {
        let m = sample();
        assert_eq!(m / 0.0, m);
        assert_eq!(m / 1e-12, m);
        assert_eq!(m / -2.0, m);

        let mut n = m;
        n /= 0.0;
        assert_eq!(n, m);

        assert!(m.try_div(0.0).is_err());
        assert_eq!(m.try_div(2.0), Ok(m * 0.5));
    }

    #[test]
    fn test_mat3_orthonormalize() {
        let m = sample();
        let q = orthn_matrix(&m);
        assert_relative_eq!(q * q.transpose(), Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(orthn_matrix(&q), q, epsilon = 1e-12);
        // Row 0 keeps its direction.
        assert_relative_eq!(q.row(0) * norml(m.row(0)), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mat3_solve() {
        let m = sample();
        let x = Vector3::new(1.0, -2.0, 0.5);
        let b = m * x;
        assert_relative_eq!(solve(b, &m), x, epsilon = 1e-12);
        assert_relative_eq!(try_solve(b, &m).unwrap(), x, epsilon = 1e-12);

        let z = Matrix3::<f64>::zero();
        assert_eq!(solve(b, &z), Vector3::zero());
        assert!(try_solve(b, &z).is_err());
    }

    #[test]
    fn test_mat3_nan_propagation() {
        let mut m = Matrix3::<f64>::identity();
        m.set(1, 1, f64::NAN);
        assert!(!m.is_finite());
        assert!(det(&m).is_nan());
        assert!(try_inv(&m).is_err());
    }
}
