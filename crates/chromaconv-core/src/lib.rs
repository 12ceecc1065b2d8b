//! # chromaconv - RGB ⇄ XYZ ⇄ xyY conversion
//!
//! Converts color values between RGB color spaces and the device-independent
//! CIE XYZ and Yxy (xyY) representations, and derives the RGB→XYZ matrix of
//! any color space from its primaries and white point (SMPTE RP 177).
//!
//! ## Supported spaces
//!
//! | Space | Matrix source | Gamma |
//! |-------|---------------|-------|
//! | sRGB | literature | 2.4 |
//! | sRGBLinear | literature (sRGB) | 1.0 |
//! | AdobeRGB | literature | 563/256 |
//! | ProPhotoRGB | literature | 1.8 |
//! | Rec709 | derived | 2.4 |
//! | Rec2020 | derived | 2.4 |
//! | DCI-P3 | derived | 2.6 |
//! | AdobeWideGamutRGB | derived | 563/256 |
//!
//! Gamma is a pure power law for every space, sRGB included.
//!
//! ## Quick Start
//!
//! ```
//! use chromaconv_core::{ColorSpaceId, Rgb8, RgbColorSpace, Chromaticity};
//!
//! // Chromaticity of sRGB red
//! let yxy = chromaconv_core::color_to_yxy(Rgb8::RED, &ColorSpaceId::Srgb)?;
//! assert!((yxy[1] - 0.64).abs() < 1e-3);
//!
//! // A custom space against D65
//! let space = RgbColorSpace::from_primaries(
//!     Chromaticity::new(0.68, 0.32),
//!     Chromaticity::new(0.265, 0.69),
//!     Chromaticity::new(0.15, 0.06),
//!     2.2,
//!     "Panel",
//! )?;
//! let back = space.yxy_to_color(space.color_to_yxy(Rgb8::new(140, 140, 140))?)?;
//! assert_eq!(back, Rgb8::new(140, 140, 140));
//! # Ok::<(), chromaconv_core::Error>(())
//! ```

pub mod color;
#[cfg(feature = "serde")]
pub mod config;
pub mod convert;
pub mod derive;
pub mod error;
pub mod math;
pub mod space;

pub use color::{Chromaticity, D50, D65, Primaries, Rgb8, to_color, to_vector};
#[cfg(feature = "serde")]
pub use config::ColorSpaceConfig;
pub use convert::{
    color_to_yxy, linear_rgb_to_xyz, linear_rgb_to_yxy, rgb_to_rgb, rgb_to_yxy, to_linear,
    to_nonlinear, xyz_to_linear_rgb, xyz_to_yxy, yxy_to_color, yxy_to_linear_rgb, yxy_to_rgb,
    yxy_to_xyz,
};
pub use derive::{NpmMatrices, derive_npm, npm_coefficients};
pub use error::{Error, Result};
pub use math::{Matrix3x3, Vector3};
pub use space::{
    ColorSpace, ColorSpaceId, RgbColorSpace, color_space_name, gamma_for, matrices_for,
};

/// Version of chromaconv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
