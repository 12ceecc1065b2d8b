//! Serializable color space descriptions
//!
//! Lets an application list the color spaces it offers in a config file:
//!
//! ```json
//! [
//!   { "standard": "sRGB" },
//!   { "standard": "AdobeRGB", "gamma": 1.0 },
//!   {
//!     "name": "Panel",
//!     "red":   { "x": 0.68, "y": 0.32 },
//!     "green": { "x": 0.265, "y": 0.69 },
//!     "blue":  { "x": 0.15, "y": 0.06 },
//!     "gamma": 2.2
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::color::{Chromaticity, D65, Primaries};
use crate::space::{ColorSpaceId, RgbColorSpace};

/// A standard space by name, or a custom one by primaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpaceConfig {
    /// One of the built-in spaces, optionally with a different gamma
    Standard {
        standard: ColorSpaceId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gamma: Option<f64>,
    },
    /// A space derived from primaries; white defaults to D65
    Custom {
        name: String,
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        white: Option<Chromaticity>,
        gamma: f64,
    },
}

impl ColorSpaceConfig {
    /// Build the described color space
    pub fn build(&self) -> Result<RgbColorSpace> {
        match self {
            Self::Standard { standard, gamma } => {
                let space = RgbColorSpace::standard(*standard);
                match gamma {
                    Some(g) => space.with_gamma(*g),
                    None => Ok(space),
                }
            }
            Self::Custom {
                name,
                red,
                green,
                blue,
                white,
                gamma,
            } => {
                let primaries = Primaries::new(*red, *green, *blue, white.unwrap_or(D65));
                RgbColorSpace::with_white_point(primaries, *gamma, name.clone())
            }
        }
    }
}

impl From<ColorSpaceId> for ColorSpaceConfig {
    fn from(id: ColorSpaceId) -> Self {
        Self::Standard {
            standard: id,
            gamma: None,
        }
    }
}
