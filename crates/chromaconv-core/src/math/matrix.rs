//! 3x3 Matrix operations for color space transforms
//!
//! These matrices are used for RGB↔XYZ conversions and primary matrix
//! derivation. All operations use f64.

use std::ops::{Index, IndexMut, Mul};

use crate::math::Vector3;

/// Determinants below this magnitude are treated as singular
pub const SINGULAR_EPSILON: f64 = 1e-14;

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create a matrix whose columns are `c0`, `c1`, `c2`
    #[inline]
    pub const fn from_columns(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self {
            m: [
                [c0.v[0], c1.v[0], c2.v[0]],
                [c0.v[1], c1.v[1], c2.v[1]],
                [c0.v[2], c1.v[2], c2.v[2]],
            ],
        }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self::diagonal(Vector3::new(1.0, 1.0, 1.0))
    }

    /// Create a zero matrix
    #[inline]
    pub const fn zero() -> Self {
        Self { m: [[0.0; 3]; 3] }
    }

    /// Create a diagonal matrix from a vector
    #[inline]
    pub const fn diagonal(d: Vector3) -> Self {
        Self {
            m: [[d.v[0], 0.0, 0.0], [0.0, d.v[1], 0.0], [0.0, 0.0, d.v[2]]],
        }
    }

    /// Row `i` as a vector
    #[inline]
    pub const fn row(&self, i: usize) -> Vector3 {
        Vector3::from_array(self.m[i])
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: Vector3) -> Vector3 {
        Vector3::new(self.row(0).dot(&v), self.row(1).dot(&v), self.row(2).dot(&v))
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Transpose this matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_columns(self.row(0), self.row(1), self.row(2))
    }

    /// Calculate the determinant
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Calculate the inverse of this matrix
    ///
    /// Returns None if the matrix is singular (|det| < [`SINGULAR_EPSILON`]).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();

        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }

        Some(self.adjugate_inverse())
    }

    /// Closed-form inverse: adjugate divided by the determinant
    ///
    /// No singularity check. A singular matrix yields infinite or NaN
    /// elements; use [`Matrix3x3::inverse`] unless the matrix is known to be
    /// well conditioned.
    pub fn adjugate_inverse(&self) -> Self {
        let inv_det = 1.0 / self.determinant();
        let m = &self.m;

        Self {
            m: [
                [
                    (m[1][1] * m[2][2] - m[2][1] * m[1][2]) * inv_det,
                    (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                    (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
                ],
                [
                    (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                    (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                    (m[1][0] * m[0][2] - m[0][0] * m[1][2]) * inv_det,
                ],
                [
                    (m[1][0] * m[2][1] - m[2][0] * m[1][1]) * inv_det,
                    (m[2][0] * m[0][1] - m[0][0] * m[2][1]) * inv_det,
                    (m[0][0] * m[1][1] - m[1][0] * m[0][1]) * inv_det,
                ],
            ],
        }
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl IndexMut<usize> for Matrix3x3 {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.m[row]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vector3> for Matrix3x3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

impl Mul<Vector3> for &Matrix3x3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

// ============================================================================
// Literature matrices
// http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html
//
// Rounded to 7 decimals, so they differ slightly from a matrix re-derived
// from the same nominal primaries.
// ============================================================================

/// sRGB to XYZ matrix (D65 white point)
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ to sRGB matrix (D65 white point)
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Adobe RGB (1998) to XYZ matrix (D65 white point)
pub const ADOBE_RGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.5767309, 0.1855540, 0.1881852],
    [0.2973769, 0.6273491, 0.0752741],
    [0.0270343, 0.0706872, 0.9911085],
]);

/// XYZ to Adobe RGB (1998) matrix (D65 white point)
pub const XYZ_TO_ADOBE_RGB: Matrix3x3 = Matrix3x3::new([
    [2.0413690, -0.5649464, -0.3446944],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0134474, -0.1183897, 1.0154096],
]);

/// ProPhoto RGB to XYZ matrix (D50 white point)
pub const PROPHOTO_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.7976749, 0.1351917, 0.0313534],
    [0.2880402, 0.7118741, 0.0000857],
    [0.0000000, 0.0000000, 0.8252100],
]);

/// XYZ to ProPhoto RGB matrix (D50 white point)
pub const XYZ_TO_PROPHOTO: Matrix3x3 = Matrix3x3::new([
    [1.3459433, -0.2556075, -0.0511118],
    [-0.5445989, 1.5081673, 0.0205351],
    [0.0000000, 0.0000000, 1.2118128],
]);
