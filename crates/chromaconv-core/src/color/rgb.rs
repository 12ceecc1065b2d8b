//! 8-bit display colors
//!
//! [`Rgb8`] is the boundary type handed in and out by a UI layer. The
//! conversion math works on [`Vector3`] in the 0.0-1.0 range; [`to_vector`]
//! and [`to_color`] move between the two.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::math::Vector3;
use crate::{Error, Result};

/// RGB display color with 8 bits per channel (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Create a new display color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidHexColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Black color
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White color
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Red primary
    pub const RED: Self = Self::new(255, 0, 0);

    /// Green primary
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Blue primary
    pub const BLUE: Self = Self::new(0, 0, 255);
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        c.to_array()
    }
}

impl FromStr for Rgb8 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Display color to a 0.0-1.0 vector: each channel divided by 255
#[inline]
pub fn to_vector(color: Rgb8) -> Vector3 {
    Vector3::new(
        color.r as f64 / 255.0,
        color.g as f64 / 255.0,
        color.b as f64 / 255.0,
    )
}

/// Vector to display color
///
/// Each component is clamped to [0, 1], scaled by 255 and rounded. Out of
/// gamut values are hard-clipped. NaN maps to 0.
#[inline]
pub fn to_color(v: Vector3) -> Rgb8 {
    let [r, g, b] = v.clamp01().scale(255.0).v;
    Rgb8::new(r.round() as u8, g.round() as u8, b.round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_to_vector() {
        let v = to_vector(Rgb8::new(255, 128, 0));
        assert!((v[0] - 1.0).abs() < EPSILON);
        assert!((v[1] - 128.0 / 255.0).abs() < EPSILON);
        assert!((v[2] - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_u8_roundtrip() {
        for value in 0..=255u8 {
            let c = Rgb8::new(value, 255 - value, value / 2);
            assert_eq!(to_color(to_vector(c)), c);
        }
    }

    #[test]
    fn test_clamp() {
        let c = to_color(Vector3::new(1.5, -0.3, 0.5));
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 128);
    }

    #[test]
    fn test_nan_maps_to_zero() {
        let c = to_color(Vector3::new(f64::NAN, 1.0, f64::NAN));
        assert_eq!(c, Rgb8::new(0, 255, 0));
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb8::from_hex("#8c8c8c").unwrap(), Rgb8::new(140, 140, 140));
        assert_eq!("FF0080".parse::<Rgb8>().unwrap(), Rgb8::new(255, 0, 128));
        assert_eq!(Rgb8::new(1, 2, 255).to_hex(), "#0102ff");
        assert_eq!(Rgb8::BLUE.to_string(), "#0000ff");

        assert!(Rgb8::from_hex("#12345").is_err());
        assert!(Rgb8::from_hex("#gg0000").is_err());
        assert!(Rgb8::from_hex("#ü0000").is_err());
        assert!(Rgb8::from_hex("#+f+f+f").is_err());
        assert!("+fff00".parse::<Rgb8>().is_err());
    }

    #[test]
    fn test_bytemuck_cast() {
        let pixels = [Rgb8::RED, Rgb8::WHITE];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[255, 0, 0, 255, 255, 255]);
    }
}
