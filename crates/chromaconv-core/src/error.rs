//! Error types for chromaconv

use thiserror::Error;

/// Result type for chromaconv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chromaconv operations
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Matrix could not be inverted (collinear or duplicate primaries)
    #[error("Singular matrix: determinant {determinant:e} is too close to zero")]
    SingularMatrix { determinant: f64 },

    /// White point chromaticity cannot be projected to unit luminance
    #[error("Invalid white point: ({x}, {y})")]
    InvalidWhitePoint { x: f64, y: f64 },

    /// xyY chromaticity is undefined for this tristimulus value
    #[error("Undefined chromaticity: {reason}")]
    UndefinedChromaticity { reason: &'static str },

    /// Gamma exponent must be finite and positive
    #[error("Invalid gamma: {0}")]
    InvalidGamma(f64),

    /// No standard color space with this name
    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    /// String is not a `#rrggbb` color
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),
}
