//! Reference implementation wrappers
//!
//! Conversions computed with the `palette` crate, for parity checks.

use chromaconv_core::Vector3;
use palette::white_point::D65;
use palette::{IntoColor, LinSrgb, Srgb, Xyz, Yxy};

/// Linear sRGB → XYZ (D65) using palette
pub fn linear_srgb_to_xyz(rgb: Vector3) -> Vector3 {
    let xyz: Xyz<D65, f64> = LinSrgb::new(rgb[0], rgb[1], rgb[2]).into_color();
    Vector3::new(xyz.x, xyz.y, xyz.z)
}

/// XYZ → Yxy ordered (Y, x, y), using palette
pub fn xyz_to_yxy(xyz: Vector3) -> Vector3 {
    let yxy: Yxy<D65, f64> = Xyz::<D65, f64>::new(xyz[0], xyz[1], xyz[2]).into_color();
    Vector3::new(yxy.luma, yxy.x, yxy.y)
}

/// Encoded sRGB → linear with the IEC 61966-2-1 piecewise curve
pub fn srgb_decode(rgb: Vector3) -> Vector3 {
    let linear: LinSrgb<f64> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_linear();
    Vector3::new(linear.red, linear.green, linear.blue)
}
