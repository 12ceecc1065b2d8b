//! Color value types
//!
//! This module provides:
//! - CIE xy chromaticities, primaries and white points
//! - 8-bit display colors and the vector adapter

pub mod chromaticity;
pub mod rgb;

pub use chromaticity::{Chromaticity, D50, D65, Primaries};
pub use rgb::{Rgb8, to_color, to_vector};
