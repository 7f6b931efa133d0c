//! 4x3 color matrix: three primaries and a white point.
//!
//! Rows are red, green, blue and white point; columns are the X, Y and Z
//! coordinates. The same layout holds chromaticities (x, y, z) and
//! tristimulus values.
//!
//! ```text
//!          X    Y    Z
//! red    | 0    1    2  |
//! green  | 3    4    5  |
//! blue   | 6    7    8  |
//! white  | 9   10   11  |
//! ```

use kinema_core::{Error, Result, Scalar};
use kinema_math::{Matrix3, Vector3};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Sub, SubAssign};
use tracing::error;

/// Row of a [`ColorMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primary {
    /// Red primary
    Red = 0,
    /// Green primary
    Green = 1,
    /// Blue primary
    Blue = 2,
    /// Reference white
    WhitePoint = 3,
}

/// Primaries and white point, one per row, with X, Y, Z columns.
///
/// # Example
///
/// ```rust
/// use kinema_color::ColorMatrix;
/// use kinema_math::Vector3;
///
/// let m = ColorMatrix::from_vectors(
///     Vector3::new(1.0, 0.0, 0.0),
///     Vector3::new(0.0, 1.0, 0.0),
///     Vector3::new(0.0, 0.0, 1.0),
///     Vector3::new(1.0, 1.0, 1.0),
/// );
/// assert_eq!(m.green(), Vector3::new(0.0, 1.0, 0.0));
/// assert_eq!(m[(3, 2)], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorMatrix<T> {
    array: [T; 12],
}

impl<T> ColorMatrix<T> {
    /// Borrows the elements, row by row.
    #[inline]
    pub const fn as_array(&self) -> &[T; 12] {
        &self.array
    }
}

impl<T: Scalar> ColorMatrix<T> {
    /// Number of rows.
    pub const ROWS: usize = 4;
    /// Number of columns.
    pub const COLS: usize = 3;

    /// All elements zero.
    #[inline]
    pub fn zero() -> Self {
        Self {
            array: [T::zero(); 12],
        }
    }

    /// Creates from twelve row-major elements. `None` gives the zero matrix.
    #[inline]
    pub fn from_array(elements: Option<&[T; 12]>) -> Self {
        match elements {
            Some(e) => Self { array: *e },
            None => Self::zero(),
        }
    }

    /// Creates from a primaries matrix (rows red, green, blue) and a white
    /// point.
    pub fn from_matrix3(primaries: &Matrix3<T>, white: Vector3<T>) -> Self {
        let mut m = Self::zero();
        m.set_primaries(primaries);
        m.set_white_point(white);
        m
    }

    /// Creates from one vector per row.
    pub fn from_vectors(
        red: Vector3<T>,
        green: Vector3<T>,
        blue: Vector3<T>,
        white: Vector3<T>,
    ) -> Self {
        let mut m = Self::zero();
        m.set_row(Primary::Red, red);
        m.set_row(Primary::Green, green);
        m.set_row(Primary::Blue, blue);
        m.set_row(Primary::WhitePoint, white);
        m
    }

    #[inline]
    fn offset(row: usize, col: usize) -> Option<usize> {
        (row < Self::ROWS && col < Self::COLS).then_some(row * Self::COLS + col)
    }

    /// Row as a vector.
    #[inline]
    pub fn row(&self, p: Primary) -> Vector3<T> {
        let i = p as usize * Self::COLS;
        Vector3::new(self.array[i], self.array[i + 1], self.array[i + 2])
    }

    /// Replaces a row.
    #[inline]
    pub fn set_row(&mut self, p: Primary, v: Vector3<T>) {
        let i = p as usize * Self::COLS;
        self.array[i..i + Self::COLS].copy_from_slice(v.as_slice());
    }

    /// Red row.
    #[inline]
    pub fn red(&self) -> Vector3<T> {
        self.row(Primary::Red)
    }

    /// Green row.
    #[inline]
    pub fn green(&self) -> Vector3<T> {
        self.row(Primary::Green)
    }

    /// Blue row.
    #[inline]
    pub fn blue(&self) -> Vector3<T> {
        self.row(Primary::Blue)
    }

    /// White point row.
    #[inline]
    pub fn white_point(&self) -> Vector3<T> {
        self.row(Primary::WhitePoint)
    }

    /// Sets the white point row.
    #[inline]
    pub fn set_white_point(&mut self, v: Vector3<T>) {
        self.set_row(Primary::WhitePoint, v);
    }

    /// Red, green and blue rows as a matrix.
    #[inline]
    pub fn primaries(&self) -> Matrix3<T> {
        Matrix3::from_vectors(true, self.red(), self.green(), self.blue())
    }

    /// Replaces the red, green and blue rows.
    pub fn set_primaries(&mut self, m: &Matrix3<T>) {
        self.set_row(Primary::Red, m.row(0));
        self.set_row(Primary::Green, m.row(1));
        self.set_row(Primary::Blue, m.row(2));
    }

    /// Overwrites all twelve elements, row-major.
    #[inline]
    pub fn set_matrix(&mut self, elements: &[T; 12]) {
        self.array = *elements;
    }

    /// Element at `(row, col)`.
    ///
    /// Out of range coordinates are logged and give NaN.
    pub fn get(&self, row: usize, col: usize) -> T {
        match Self::offset(row, col) {
            Some(i) => self.array[i],
            None => {
                error!(row, col, "ColorMatrix element out of range");
                T::nan()
            }
        }
    }

    /// Checked element read.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        Self::offset(row, col)
            .map(|i| self.array[i])
            .ok_or_else(|| Error::index_out_of_bounds(row, col, Self::ROWS, Self::COLS))
    }

    /// Mutable element, `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        Self::offset(row, col).map(|i| &mut self.array[i])
    }

    /// Writes the element at `(row, col)`; out of range writes are logged
    /// and ignored.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        match Self::offset(row, col) {
            Some(i) => self.array[i] = value,
            None => error!(row, col, "ColorMatrix element out of range, write ignored"),
        }
    }

    /// Copies the elements out, row-major.
    #[inline]
    pub fn to_array(&self) -> [T; 12] {
        self.array
    }

    #[inline]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self {
            array: self.array.map(f),
        }
    }

    #[inline]
    fn zip_map(mut self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        for (a, b) in self.array.iter_mut().zip(rhs.array) {
            *a = f(*a, b);
        }
        self
    }
}

impl<T: Scalar> Index<(usize, usize)> for ColorMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match Self::offset(row, col) {
            Some(i) => &self.array[i],
            None => {
                error!(row, col, "ColorMatrix element out of range");
                T::sentinel()
            }
        }
    }
}

impl<T: Scalar> Index<Primary> for ColorMatrix<T> {
    type Output = [T];

    #[inline]
    fn index(&self, p: Primary) -> &[T] {
        let i = p as usize * Self::COLS;
        &self.array[i..i + Self::COLS]
    }
}

impl<T: Scalar> Add for ColorMatrix<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Sub for ColorMatrix<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> AddAssign for ColorMatrix<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for ColorMatrix<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Add<T> for ColorMatrix<T> {
    type Output = Self;

    #[inline]
    fn add(self, k: T) -> Self {
        self.map(|x| x + k)
    }
}

impl<T: Scalar> Sub<T> for ColorMatrix<T> {
    type Output = Self;

    #[inline]
    fn sub(self, k: T) -> Self {
        self.map(|x| x - k)
    }
}

impl<T: Scalar> Mul<T> for ColorMatrix<T> {
    type Output = Self;

    #[inline]
    fn mul(self, k: T) -> Self {
        self.map(|x| x * k)
    }
}

impl<T: Scalar> Div<T> for ColorMatrix<T> {
    type Output = Self;

    #[inline]
    fn div(self, k: T) -> Self {
        self.map(|x| x / k)
    }
}

impl<T: Scalar> AddAssign<T> for ColorMatrix<T> {
    #[inline]
    fn add_assign(&mut self, k: T) {
        *self = *self + k;
    }
}

impl<T: Scalar> SubAssign<T> for ColorMatrix<T> {
    #[inline]
    fn sub_assign(&mut self, k: T) {
        *self = *self - k;
    }
}

impl<T: Scalar> MulAssign<T> for ColorMatrix<T> {
    #[inline]
    fn mul_assign(&mut self, k: T) {
        *self = *self * k;
    }
}

impl<T: Scalar> DivAssign<T> for ColorMatrix<T> {
    #[inline]
    fn div_assign(&mut self, k: T) {
        *self = *self / k;
    }
}

impl<T> approx::AbsDiffEq for ColorMatrix<T>
where
    T: Scalar + approx::AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.array
            .iter()
            .zip(&other.array)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> approx::RelativeEq for ColorMatrix<T>
where
    T: Scalar + approx::RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.array
            .iter()
            .zip(&other.array)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T> approx::UlpsEq for ColorMatrix<T>
where
    T: Scalar + approx::UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.array
            .iter()
            .zip(&other.array)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
