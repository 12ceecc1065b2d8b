//! 3-component vector for tristimulus values
//!
//! The same type carries nonlinear RGB, linear RGB, XYZ and Yxy. Which one a
//! given value holds is decided by the function that produced it.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use bytemuck::{Pod, Zeroable};

/// A 3-element column vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(C)]
pub struct Vector3 {
    /// Components in order
    pub v: [f64; 3],
}

impl Vector3 {
    /// Create a new vector
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { v: [a, b, c] }
    }

    /// Create from an array
    #[inline]
    pub const fn from_array(v: [f64; 3]) -> Self {
        Self { v }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        self.v
    }

    /// All-zero vector
    #[inline]
    pub const fn zero() -> Self {
        Self { v: [0.0; 3] }
    }

    /// Same value in every component
    #[inline]
    pub const fn splat(s: f64) -> Self {
        Self { v: [s, s, s] }
    }

    /// Raise each component to `power`
    ///
    /// `v[i].powf(power)` for each component. Negative components yield NaN.
    #[inline]
    pub fn powf(&self, power: f64) -> Self {
        Self {
            v: [
                self.v[0].powf(power),
                self.v[1].powf(power),
                self.v[2].powf(power),
            ],
        }
    }

    /// Apply `f` to each component
    #[inline]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            v: [f(self.v[0]), f(self.v[1]), f(self.v[2])],
        }
    }

    /// Sum of the components
    #[inline]
    pub fn sum(&self) -> f64 {
        self.v[0] + self.v[1] + self.v[2]
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.v[0] * other.v[0] + self.v[1] * other.v[1] + self.v[2] * other.v[2]
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        self.map(|c| c * s)
    }

    /// Clamp all components to [0, 1]
    #[inline]
    pub fn clamp01(&self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }

    /// True when every component is finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.v.iter().all(|c| c.is_finite())
    }

    /// Check if approximately equal to another vector
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.v[0] - other.v[0]).abs() < epsilon
            && (self.v[1] - other.v[1]).abs() < epsilon
            && (self.v[2] - other.v[2]).abs() < epsilon
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Self::from_array(v)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.v
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, i: usize) -> &Self::Output {
        &self.v[i]
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.v[i]
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.v[0] + rhs.v[0], self.v[1] + rhs.v[1], self.v[2] + rhs.v[2])
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.v[0] - rhs.v[0], self.v[1] - rhs.v[1], self.v[2] - rhs.v[2])
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}
