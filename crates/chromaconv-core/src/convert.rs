//! Color conversion pipeline
//!
//! ```text
//! nonlinear RGB ⇄ linear RGB ⇄ XYZ ⇄ Yxy
//!        (gamma)       (matrix)  (projective divide)
//! ```
//!
//! Every function is pure. Intermediate values are never clamped; only
//! [`yxy_to_color`] clips, when it produces a display color.
//!
//! Yxy vectors are ordered (Y, x, y): luminance first, then chromaticity.

use tracing::debug;

use crate::color::{Rgb8, to_color, to_vector};
use crate::math::{Vector3, signed_powf_vec};
use crate::space::ColorSpace;
use crate::{Error, Result};

/// Nonlinear RGB → linear RGB: `rgb .^ (1 / gamma)`
///
/// Identity for linear spaces.
pub fn to_linear<S: ColorSpace + ?Sized>(rgb: Vector3, space: &S) -> Vector3 {
    if space.is_linear() {
        rgb
    } else {
        signed_powf_vec(rgb, 1.0 / space.gamma())
    }
}

/// Linear RGB → nonlinear RGB: `rgb .^ gamma`
///
/// Identity for linear spaces.
pub fn to_nonlinear<S: ColorSpace + ?Sized>(rgb: Vector3, space: &S) -> Vector3 {
    if space.is_linear() {
        rgb
    } else {
        signed_powf_vec(rgb, space.gamma())
    }
}

/// Linear RGB → XYZ
#[inline]
pub fn linear_rgb_to_xyz<S: ColorSpace + ?Sized>(rgb: Vector3, space: &S) -> Vector3 {
    space.rgb_to_xyz() * rgb
}

/// XYZ → linear RGB
#[inline]
pub fn xyz_to_linear_rgb<S: ColorSpace + ?Sized>(xyz: Vector3, space: &S) -> Vector3 {
    space.xyz_to_rgb() * xyz
}

/// XYZ → Yxy
///
/// Returns (Y, X/(X+Y+Z), Y/(X+Y+Z)). Chromaticity is undefined when
/// X+Y+Z = 0 (black).
pub fn xyz_to_yxy(xyz: Vector3) -> Result<Vector3> {
    let sum = xyz.sum();
    if sum == 0.0 {
        debug!(xyz = ?xyz.v, "xyY undefined for zero tristimulus sum");
        return Err(Error::UndefinedChromaticity {
            reason: "X + Y + Z is zero",
        });
    }
    Ok(Vector3::new(xyz[1], xyz[0] / sum, xyz[1] / sum))
}

/// Yxy → XYZ
///
/// X = (Y/y)·x, Z = (Y/y)·(1 - x - y). Undefined when y = 0.
pub fn yxy_to_xyz(yxy: Vector3) -> Result<Vector3> {
    let [big_y, x, y] = yxy.v;
    if y == 0.0 {
        debug!(yxy = ?yxy.v, "XYZ undefined for zero y chromaticity");
        return Err(Error::UndefinedChromaticity {
            reason: "chromaticity y is zero",
        });
    }
    let scale = big_y / y;
    Ok(Vector3::new(scale * x, big_y, scale * (1.0 - x - y)))
}

/// Linear RGB → Yxy
pub fn linear_rgb_to_yxy<S: ColorSpace + ?Sized>(rgb: Vector3, space: &S) -> Result<Vector3> {
    xyz_to_yxy(linear_rgb_to_xyz(rgb, space))
}

/// Yxy → linear RGB
pub fn yxy_to_linear_rgb<S: ColorSpace + ?Sized>(yxy: Vector3, space: &S) -> Result<Vector3> {
    Ok(xyz_to_linear_rgb(yxy_to_xyz(yxy)?, space))
}

/// Nonlinear RGB → Yxy
pub fn rgb_to_yxy<S: ColorSpace + ?Sized>(rgb: Vector3, space: &S) -> Result<Vector3> {
    linear_rgb_to_yxy(to_linear(rgb, space), space)
}

/// Yxy → nonlinear RGB
pub fn yxy_to_rgb<S: ColorSpace + ?Sized>(yxy: Vector3, space: &S) -> Result<Vector3> {
    Ok(to_nonlinear(yxy_to_linear_rgb(yxy, space)?, space))
}

/// Display color → Yxy
pub fn color_to_yxy<S: ColorSpace + ?Sized>(color: Rgb8, space: &S) -> Result<Vector3> {
    rgb_to_yxy(to_vector(color), space)
}

/// Yxy → display color, clamping out-of-gamut channels
pub fn yxy_to_color<S: ColorSpace + ?Sized>(yxy: Vector3, space: &S) -> Result<Rgb8> {
    Ok(to_color(yxy_to_rgb(yxy, space)?))
}

/// Nonlinear RGB in one space → nonlinear RGB in another, through XYZ
///
/// No white point adaptation is applied.
pub fn rgb_to_rgb<S, D>(rgb: Vector3, from: &S, to: &D) -> Vector3
where
    S: ColorSpace + ?Sized,
    D: ColorSpace + ?Sized,
{
    let xyz = linear_rgb_to_xyz(to_linear(rgb, from), from);
    to_nonlinear(xyz_to_linear_rgb(xyz, to), to)
}
