//! RGB color spaces
//!
//! Standard spaces are identified by [`ColorSpaceId`] and resolved through a
//! read-only table built on first access. Custom spaces are built from
//! primaries with [`RgbColorSpace::from_primaries`].
//!
//! Two kinds of standard entries exist and both are kept:
//! - literature matrices (sRGB, AdobeRGB, ProPhotoRGB): rounded decimal
//!   constants, inverted once at initialization
//! - primaries (Rec709, Rec2020, DCI-P3, AdobeWideGamutRGB): matrices derived
//!   at initialization with SMPTE RP 177
//!
//! A literature matrix is not bit-equal to one re-derived from the same
//! nominal primaries (compare sRGB with Rec709).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use tracing::debug;

use crate::color::{Chromaticity, D50, D65, Primaries, Rgb8};
use crate::convert;
use crate::derive::{NpmMatrices, derive_npm, derive_npm_unchecked};
use crate::math::matrix::{ADOBE_RGB_TO_XYZ, PROPHOTO_TO_XYZ, SRGB_TO_XYZ};
use crate::math::{LINEAR_GAMMA, Matrix3x3, Vector3, validate_gamma};
use crate::{Error, Result};

/// Behavior shared by standard and custom RGB color spaces
///
/// Everything the conversion pipeline needs to know about a space.
pub trait ColorSpace {
    /// Linear RGB → XYZ matrix
    fn rgb_to_xyz(&self) -> Matrix3x3;

    /// XYZ → linear RGB matrix
    fn xyz_to_rgb(&self) -> Matrix3x3;

    /// Power-law gamma exponent
    fn gamma(&self) -> f64;

    /// True when RGB values are already linear (gamma exactly 1)
    fn is_linear(&self) -> bool {
        self.gamma() == LINEAR_GAMMA
    }
}

/// Standard RGB color spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum ColorSpaceId {
    /// sRGB (IEC 61966-2-1), pure-power gamma 2.4
    Srgb,
    /// sRGB primaries with linear values
    SrgbLinear,
    /// Adobe RGB (1998)
    AdobeRgb,
    /// ProPhoto RGB (ROMM), D50 white
    ProPhotoRgb,
    /// ITU-R BT.709
    Rec709,
    /// ITU-R BT.2020
    Rec2020,
    /// DCI-P3 primaries, D65 white
    DciP3,
    /// Adobe Wide Gamut RGB, D50 white
    AdobeWideGamutRgb,
}

impl ColorSpaceId {
    /// Every standard space, in table order
    pub const ALL: [Self; 8] = [
        Self::Srgb,
        Self::SrgbLinear,
        Self::AdobeRgb,
        Self::ProPhotoRgb,
        Self::Rec709,
        Self::Rec2020,
        Self::DciP3,
        Self::AdobeWideGamutRgb,
    ];

    /// Number of standard spaces
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    fn definition(self) -> &'static StandardDefinition {
        &STANDARD_DEFINITIONS[self.index()]
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Tabulated primaries, if the space is defined by primaries
    pub fn primaries(self) -> Option<Primaries> {
        match self.definition().source {
            MatrixSource::Primaries(p) => Some(p),
            MatrixSource::Literature(_) => None,
        }
    }

    /// Both conversion matrices
    pub fn matrices(self) -> NpmMatrices {
        let space = self.space();
        NpmMatrices {
            rgb_to_xyz: space.rgb_to_xyz,
            xyz_to_rgb: space.xyz_to_rgb,
        }
    }

    /// The registry entry for this space
    pub fn space(self) -> &'static RgbColorSpace {
        &REGISTRY[self.index()]
    }

    /// Look up a space by display name
    ///
    /// Case-insensitive; `-`, `_`, `.` and spaces are ignored, so `"DCI-P3"`,
    /// `"dci_p3"` and `"DciP3"` all match.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = normalize_name(name);
        Self::ALL
            .into_iter()
            .find(|id| normalize_name(id.name()) == wanted)
            .ok_or_else(|| Error::UnknownColorSpace(name.to_string()))
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl ColorSpace for ColorSpaceId {
    fn rgb_to_xyz(&self) -> Matrix3x3 {
        self.space().rgb_to_xyz
    }

    fn xyz_to_rgb(&self) -> Matrix3x3 {
        self.space().xyz_to_rgb
    }

    fn gamma(&self) -> f64 {
        self.definition().gamma
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpaceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for ColorSpaceId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::from_name(&s)
    }
}

impl From<ColorSpaceId> for &'static str {
    fn from(id: ColorSpaceId) -> Self {
        id.name()
    }
}

/// Display name of a standard space
pub fn color_space_name(id: ColorSpaceId) -> &'static str {
    id.name()
}

/// RGB→XYZ and XYZ→RGB matrices of a standard space
pub fn matrices_for(id: ColorSpaceId) -> NpmMatrices {
    id.matrices()
}

/// Gamma exponent of a standard space
pub fn gamma_for(id: ColorSpaceId) -> f64 {
    id.gamma()
}

// ============================================================================
// Standard space table
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum MatrixSource {
    Literature(Matrix3x3),
    Primaries(Primaries),
}

#[derive(Debug, Clone, Copy)]
struct StandardDefinition {
    name: &'static str,
    gamma: f64,
    source: MatrixSource,
}

/// Adobe RGB (1998) encoding gamma, 563/256 ≈ 2.2
pub const ADOBE_RGB_GAMMA: f64 = 563.0 / 256.0;

/// Rows are indexed by `ColorSpaceId as usize`.
static STANDARD_DEFINITIONS: [StandardDefinition; ColorSpaceId::COUNT] = [
    StandardDefinition {
        name: "sRGB",
        gamma: 2.4,
        source: MatrixSource::Literature(SRGB_TO_XYZ),
    },
    StandardDefinition {
        name: "sRGBLinear",
        gamma: LINEAR_GAMMA,
        source: MatrixSource::Literature(SRGB_TO_XYZ),
    },
    StandardDefinition {
        name: "AdobeRGB",
        gamma: ADOBE_RGB_GAMMA,
        source: MatrixSource::Literature(ADOBE_RGB_TO_XYZ),
    },
    StandardDefinition {
        name: "ProPhotoRGB",
        gamma: 1.8,
        source: MatrixSource::Literature(PROPHOTO_TO_XYZ),
    },
    StandardDefinition {
        name: "Rec709",
        gamma: 2.4,
        source: MatrixSource::Primaries(REC709_PRIMARIES),
    },
    StandardDefinition {
        name: "Rec2020",
        gamma: 2.4,
        source: MatrixSource::Primaries(REC2020_PRIMARIES),
    },
    StandardDefinition {
        name: "DCI-P3",
        gamma: 2.6,
        source: MatrixSource::Primaries(DCI_P3_PRIMARIES),
    },
    StandardDefinition {
        name: "AdobeWideGamutRGB",
        gamma: ADOBE_RGB_GAMMA,
        source: MatrixSource::Primaries(ADOBE_WIDE_GAMUT_PRIMARIES),
    },
];

/// ITU-R BT.709 primaries, D65 white
pub const REC709_PRIMARIES: Primaries =
    Primaries::from_rgbw_xy([0.64, 0.33, 0.30, 0.60, 0.15, 0.06, D65.x, D65.y]);

/// ITU-R BT.2020 primaries, D65 white
pub const REC2020_PRIMARIES: Primaries =
    Primaries::from_rgbw_xy([0.708, 0.292, 0.170, 0.797, 0.131, 0.046, D65.x, D65.y]);

/// DCI-P3 primaries, D65 white
pub const DCI_P3_PRIMARIES: Primaries =
    Primaries::from_rgbw_xy([0.680, 0.320, 0.265, 0.690, 0.150, 0.060, D65.x, D65.y]);

/// Adobe Wide Gamut RGB primaries, D50 white
pub const ADOBE_WIDE_GAMUT_PRIMARIES: Primaries =
    Primaries::from_rgbw_xy([0.7347, 0.2653, 0.1152, 0.8264, 0.1566, 0.0177, D50.x, D50.y]);

static REGISTRY: LazyLock<[RgbColorSpace; ColorSpaceId::COUNT]> = LazyLock::new(|| {
    let registry = ColorSpaceId::ALL.map(RgbColorSpace::from_definition);
    debug!(count = registry.len(), "initialized standard color space table");
    registry
});

// ============================================================================
// RgbColorSpace
// ============================================================================

/// An RGB color space: conversion matrices, gamma and a name
///
/// Immutable once built. Cloning copies the matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbColorSpace {
    name: String,
    rgb_to_xyz: Matrix3x3,
    xyz_to_rgb: Matrix3x3,
    gamma: f64,
    primaries: Option<Primaries>,
}

impl RgbColorSpace {
    fn from_definition(id: ColorSpaceId) -> Self {
        let def = id.definition();
        let (matrices, primaries) = match def.source {
            MatrixSource::Literature(rgb_to_xyz) => (
                NpmMatrices {
                    rgb_to_xyz,
                    xyz_to_rgb: rgb_to_xyz.adjugate_inverse(),
                },
                None,
            ),
            MatrixSource::Primaries(p) => (derive_npm_unchecked(&p), Some(p)),
        };

        Self {
            name: def.name.to_string(),
            rgb_to_xyz: matrices.rgb_to_xyz,
            xyz_to_rgb: matrices.xyz_to_rgb,
            gamma: def.gamma,
            primaries,
        }
    }

    /// A copy of a standard space
    pub fn standard(id: ColorSpaceId) -> Self {
        id.space().clone()
    }

    /// Build a space from red, green and blue primaries against D65
    pub fn from_primaries(
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        gamma: f64,
        name: impl Into<String>,
    ) -> Result<Self> {
        Self::with_white_point(Primaries::new(red, green, blue, D65), gamma, name)
    }

    /// Build a space from primaries with an explicit white point
    pub fn with_white_point(
        primaries: Primaries,
        gamma: f64,
        name: impl Into<String>,
    ) -> Result<Self> {
        let gamma = validate_gamma(gamma)?;
        let name = name.into();
        let matrices = derive_npm(&primaries)?;
        debug!(name = %name, gamma, "built color space from primaries");

        Ok(Self {
            name,
            rgb_to_xyz: matrices.rgb_to_xyz,
            xyz_to_rgb: matrices.xyz_to_rgb,
            gamma,
            primaries: Some(primaries),
        })
    }

    /// Same matrices with a different gamma
    pub fn with_gamma(&self, gamma: f64) -> Result<Self> {
        Ok(Self {
            gamma: validate_gamma(gamma)?,
            ..self.clone()
        })
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primaries the matrices were derived from, if any
    pub fn primaries(&self) -> Option<&Primaries> {
        self.primaries.as_ref()
    }

    /// Both conversion matrices
    pub fn matrices(&self) -> NpmMatrices {
        NpmMatrices {
            rgb_to_xyz: self.rgb_to_xyz,
            xyz_to_rgb: self.xyz_to_rgb,
        }
    }

    /// Nonlinear RGB → Yxy in this space
    pub fn rgb_to_yxy(&self, rgb: Vector3) -> Result<Vector3> {
        convert::rgb_to_yxy(rgb, self)
    }

    /// Yxy → nonlinear RGB in this space
    pub fn yxy_to_rgb(&self, yxy: Vector3) -> Result<Vector3> {
        convert::yxy_to_rgb(yxy, self)
    }

    /// Display color → Yxy in this space
    pub fn color_to_yxy(&self, color: Rgb8) -> Result<Vector3> {
        convert::color_to_yxy(color, self)
    }

    /// Yxy → clamped display color in this space
    pub fn yxy_to_color(&self, yxy: Vector3) -> Result<Rgb8> {
        convert::yxy_to_color(yxy, self)
    }

    /// Chromaticities of pure red, green and blue
    ///
    /// The corners of the gamut triangle on an xy chromaticity diagram.
    pub fn gamut_triangle(&self) -> Result<[Chromaticity; 3]> {
        let corner = |rgb: Vector3| -> Result<Chromaticity> {
            let yxy = self.rgb_to_yxy(rgb)?;
            Ok(Chromaticity::new(yxy[1], yxy[2]))
        };
        Ok([
            corner(Vector3::new(1.0, 0.0, 0.0))?,
            corner(Vector3::new(0.0, 1.0, 0.0))?,
            corner(Vector3::new(0.0, 0.0, 1.0))?,
        ])
    }

    /// Chromaticity of RGB white (1, 1, 1)
    pub fn white_chromaticity(&self) -> Result<Chromaticity> {
        let yxy = self.rgb_to_yxy(Vector3::splat(1.0))?;
        Ok(Chromaticity::new(yxy[1], yxy[2]))
    }
}

impl ColorSpace for RgbColorSpace {
    fn rgb_to_xyz(&self) -> Matrix3x3 {
        self.rgb_to_xyz
    }

    fn xyz_to_rgb(&self) -> Matrix3x3 {
        self.xyz_to_rgb
    }

    fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl From<ColorSpaceId> for RgbColorSpace {
    fn from(id: ColorSpaceId) -> Self {
        Self::standard(id)
    }
}

impl fmt::Display for RgbColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
