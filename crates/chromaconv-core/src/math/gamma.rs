//! Power-law transfer functions
//!
//! Every color space uses a single exponent. sRGB included: there is no
//! IEC 61966-2-1 linear toe, so sRGB results differ slightly from a full
//! piecewise implementation near black.

use crate::math::Vector3;
use crate::{Error, Result};

/// Gamma of a space whose RGB values are already linear
pub const LINEAR_GAMMA: f64 = 1.0;

/// Sign-preserving power: `sign(x) * |x|^power`
///
/// Equal to `x.powf(power)` for `x >= 0`. Negative intermediate values
/// (out-of-gamut colors after an XYZ→RGB matrix) stay finite instead of
/// turning into NaN.
#[inline]
pub fn signed_powf(x: f64, power: f64) -> f64 {
    if x < 0.0 {
        -(-x).powf(power)
    } else {
        x.powf(power)
    }
}

/// Apply [`signed_powf`] to each component
#[inline]
pub fn signed_powf_vec(v: Vector3, power: f64) -> Vector3 {
    v.map(|c| signed_powf(c, power))
}

/// Check that a gamma exponent is usable
///
/// Gamma must be finite and strictly positive.
pub fn validate_gamma(gamma: f64) -> Result<f64> {
    if gamma.is_finite() && gamma > 0.0 {
        Ok(gamma)
    } else {
        Err(Error::InvalidGamma(gamma))
    }
}
