//! CIE xy chromaticity coordinates, primaries and white points
//!
//! Primaries and white points are given as (x, y) points in the CIE 1931
//! chromaticity plane. z is implied as 1 - x - y.

use crate::math::Vector3;

/// A point in the CIE xy chromaticity plane
///
/// `x + y <= 1` is expected for physical colors but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    /// Create a new chromaticity pair
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The implied z coordinate, 1 - x - y
    #[inline]
    pub fn z(&self) -> f64 {
        1.0 - (self.x + self.y)
    }

    /// (x, y, z) as a column vector
    #[inline]
    pub fn to_xyz_column(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z())
    }

    /// Check if approximately equal to another chromaticity
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl From<(f64, f64)> for Chromaticity {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Chromaticity {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Red, green and blue primaries plus the reference white
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Primaries {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
    pub white: Chromaticity,
}

impl Primaries {
    /// Create primaries from four chromaticities
    #[inline]
    pub const fn new(
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        white: Chromaticity,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Create primaries from a flat `[rx, ry, gx, gy, bx, by, wx, wy]` table row
    #[inline]
    pub const fn from_rgbw_xy(t: [f64; 8]) -> Self {
        Self {
            red: Chromaticity::new(t[0], t[1]),
            green: Chromaticity::new(t[2], t[3]),
            blue: Chromaticity::new(t[4], t[5]),
            white: Chromaticity::new(t[6], t[7]),
        }
    }

    /// The red, green and blue chromaticities in order
    #[inline]
    pub const fn rgb(&self) -> [Chromaticity; 3] {
        [self.red, self.green, self.blue]
    }
}

// ============================================================================
// White points
// ============================================================================

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Reference white for every space built from primaries unless another white
/// point is supplied.
pub const D65: Chromaticity = Chromaticity::new(0.3127, 0.3290);

/// CIE Standard Illuminant D50 (Horizon Light)
pub const D50: Chromaticity = Chromaticity::new(0.3457, 0.3585);
