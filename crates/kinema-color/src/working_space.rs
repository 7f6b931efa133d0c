//! RGB working spaces.
//!
//! A [`WorkingSpace`] is the CIE xy chromaticity of three RGB primaries and
//! a reference white. All built-in spaces use the D65 white point.
//!
//! # Included Working Spaces
//!
//! | Standard | Red | Green | Blue |
//! |----------|-----|-------|------|
//! | Apple | 0.625, 0.340 | 0.280, 0.595 | 0.155, 0.070 |
//! | SMPTE-C | 0.630, 0.340 | 0.310, 0.595 | 0.155, 0.070 |
//! | sRGB | 0.640, 0.330 | 0.300, 0.600 | 0.150, 0.060 |
//! | Rec. 709 | 0.640, 0.330 | 0.300, 0.600 | 0.150, 0.060 |

use crate::chromaticity::chromaticity;
use crate::matrix::ColorMatrix;
use kinema_core::{Error, Result, Scalar};
use kinema_math::Vector2;
use std::fmt;
use std::ops::Index;
use tracing::error;

/// D65 white point chromaticity shared by the built-in working spaces.
pub const D65_XY: [f64; 2] = [0.312713, 0.329016];

/// Built-in working space identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Standard {
    /// Generic Apple RGB
    Apple,
    /// SMPTE-C (North American broadcast)
    SmpteC,
    /// sRGB
    Srgb,
    /// ITU-R BT.709 (HDTV)
    #[default]
    Rec709,
}

impl Standard {
    /// All built-in standards.
    pub const ALL: [Standard; 4] = [Self::Apple, Self::SmpteC, Self::Srgb, Self::Rec709];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Apple => "Apple RGB",
            Self::SmpteC => "SMPTE-C",
            Self::Srgb => "sRGB",
            Self::Rec709 => "Rec. 709",
        }
    }

    /// `[rx, ry, gx, gy, bx, by, wx, wy]`.
    pub const fn xy(self) -> [f64; 8] {
        let [wx, wy] = D65_XY;
        match self {
            Self::Apple => [0.625, 0.34, 0.28, 0.595, 0.155, 0.07, wx, wy],
            Self::SmpteC => [0.63, 0.34, 0.31, 0.595, 0.155, 0.07, wx, wy],
            Self::Srgb | Self::Rec709 => [0.64, 0.33, 0.30, 0.60, 0.15, 0.06, wx, wy],
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Primaries and white point of an RGB space in CIE xy.
///
/// Elements form a 4x2 matrix: rows red, green, blue, white point; columns
/// x, y.
///
/// # Example
///
/// ```rust
/// use kinema_color::{Standard, WorkingSpace};
///
/// let ws = WorkingSpace::<f64>::new(Standard::Srgb);
/// assert_eq!(ws.red().x(), 0.64);
/// assert_eq!(ws.get(3, 1), 0.329016);
/// assert!(ws.get(4, 0).is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkingSpace<T> {
    array: [T; 8],
}

impl<T: Scalar> Default for WorkingSpace<T> {
    fn default() -> Self {
        Self::new(Standard::default())
    }
}

impl<T: Scalar> From<Standard> for WorkingSpace<T> {
    fn from(standard: Standard) -> Self {
        Self::new(standard)
    }
}

impl<T: Scalar> WorkingSpace<T> {
    /// Working space for a built-in standard.
    pub fn new(standard: Standard) -> Self {
        Self {
            array: standard.xy().map(T::lit),
        }
    }

    /// Custom working space from `[rx, ry, gx, gy, bx, by, wx, wy]`.
    #[inline]
    pub fn from_xy(xy: [T; 8]) -> Self {
        Self { array: xy }
    }

    #[inline]
    fn pair(&self, row: usize) -> Vector2<T> {
        Vector2::new(self.array[2 * row], self.array[2 * row + 1])
    }

    /// Red primary.
    #[inline]
    pub fn red(&self) -> Vector2<T> {
        self.pair(0)
    }

    /// Green primary.
    #[inline]
    pub fn green(&self) -> Vector2<T> {
        self.pair(1)
    }

    /// Blue primary.
    #[inline]
    pub fn blue(&self) -> Vector2<T> {
        self.pair(2)
    }

    /// Reference white.
    #[inline]
    pub fn white_point(&self) -> Vector2<T> {
        self.pair(3)
    }

    #[inline]
    fn offset(row: usize, col: usize) -> Option<usize> {
        (row < 4 && col < 2).then_some(2 * row + col)
    }

    /// Element at `(row, col)`; out of range coordinates are logged and
    /// give NaN.
    pub fn get(&self, row: usize, col: usize) -> T {
        match Self::offset(row, col) {
            Some(i) => self.array[i],
            None => {
                error!(row, col, "WorkingSpace element out of range");
                T::nan()
            }
        }
    }

    /// Checked element read.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        Self::offset(row, col)
            .map(|i| self.array[i])
            .ok_or_else(|| Error::index_out_of_bounds(row, col, 4, 2))
    }

    /// Borrows the elements as `[rx, ry, gx, gy, bx, by, wx, wy]`.
    #[inline]
    pub fn as_array(&self) -> &[T; 8] {
        &self.array
    }

    /// Chromaticity matrix `(x, y, 1 - x - y)` of this space.
    #[inline]
    pub fn chromaticity(&self) -> ColorMatrix<T> {
        chromaticity(&self.array)
    }
}

impl<T: Scalar> Index<(usize, usize)> for WorkingSpace<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match Self::offset(row, col) {
            Some(i) => &self.array[i],
            None => {
                error!(row, col, "WorkingSpace element out of range");
                T::sentinel()
            }
        }
    }
}
