//! Normalized Primary Matrix derivation
//!
//! Derives the RGB→XYZ matrix of a color space from the chromaticities of
//! its primaries and white point, following SMPTE RP 177-1993 section 3.3.
//! Exact linear algebra: the same inputs always give the same matrices.

use std::convert::Infallible;

use tracing::{debug, warn};

use crate::color::Primaries;
use crate::math::{Matrix3x3, Vector3};
use crate::{Error, Result};

/// RGB→XYZ matrix and its inverse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpmMatrices {
    /// Normalized primary matrix (linear RGB → XYZ)
    pub rgb_to_xyz: Matrix3x3,
    /// Inverse of the normalized primary matrix (XYZ → linear RGB)
    pub xyz_to_rgb: Matrix3x3,
}

/// Matrix P whose columns are the (x, y, z) of each primary
pub fn primary_matrix(primaries: &Primaries) -> Matrix3x3 {
    let [r, g, b] = primaries.rgb();
    Matrix3x3::from_columns(r.to_xyz_column(), g.to_xyz_column(), b.to_xyz_column())
}

/// White point projected to unit luminance: [Wx/Wy, 1, Wz/Wy]
pub fn white_vector(primaries: &Primaries) -> Result<Vector3> {
    let w = primaries.white;
    if w.y == 0.0 || !w.y.is_finite() || !w.x.is_finite() {
        warn!(x = w.x, y = w.y, "white point cannot be normalized");
        return Err(Error::InvalidWhitePoint { x: w.x, y: w.y });
    }
    Ok(unit_white(primaries))
}

#[inline]
fn unit_white(primaries: &Primaries) -> Vector3 {
    let w = primaries.white;
    Vector3::new(w.x / w.y, 1.0, w.z() / w.y)
}

/// Per-primary scale coefficients C = P⁻¹ · W
pub fn npm_coefficients(primaries: &Primaries) -> Result<Vector3> {
    let white = white_vector(primaries)?;
    coefficients_with(primaries, white, invert)
}

fn coefficients_with<E>(
    primaries: &Primaries,
    white: Vector3,
    invert: impl Fn(&Matrix3x3) -> std::result::Result<Matrix3x3, E>,
) -> std::result::Result<Vector3, E> {
    Ok(invert(&primary_matrix(primaries))? * white)
}

/// NPM = P · diag(P⁻¹ · W), then its inverse
///
/// Both the checked and the unchecked derivation go through here; only the
/// white vector and the inversion differ.
fn derive_with<E>(
    primaries: &Primaries,
    white: Vector3,
    invert: impl Fn(&Matrix3x3) -> std::result::Result<Matrix3x3, E>,
) -> std::result::Result<(Vector3, NpmMatrices), E> {
    let c = coefficients_with(primaries, white, &invert)?;
    let rgb_to_xyz = primary_matrix(primaries) * Matrix3x3::diagonal(c);
    let xyz_to_rgb = invert(&rgb_to_xyz)?;
    Ok((
        c,
        NpmMatrices {
            rgb_to_xyz,
            xyz_to_rgb,
        },
    ))
}

/// Derive the normalized primary matrix and its inverse
///
/// Collinear or duplicate primaries make P (and the NPM) singular and return
/// [`Error::SingularMatrix`].
pub fn derive_npm(primaries: &Primaries) -> Result<NpmMatrices> {
    let white = white_vector(primaries)?;
    let (c, matrices) = derive_with(primaries, white, invert)?;

    debug!(
        coefficients = ?c.v,
        npm = ?matrices.rgb_to_xyz.m,
        "derived normalized primary matrix"
    );

    Ok(matrices)
}

/// Derive the normalized primary matrix without validating the inputs
///
/// Same arithmetic as [`derive_npm`]. Degenerate primaries or a white point
/// with y = 0 produce infinite or NaN elements. Used for the tabulated
/// standard spaces, whose primaries are known to be well formed.
pub fn derive_npm_unchecked(primaries: &Primaries) -> NpmMatrices {
    let unchecked = |m: &Matrix3x3| Ok::<_, Infallible>(m.adjugate_inverse());
    match derive_with(primaries, unit_white(primaries), unchecked) {
        Ok((_, matrices)) => matrices,
        Err(never) => match never {},
    }
}

/// Invert a matrix, mapping a singular one to [`Error::SingularMatrix`]
pub(crate) fn invert(m: &Matrix3x3) -> Result<Matrix3x3> {
    m.inverse().ok_or_else(|| {
        let determinant = m.determinant();
        warn!(determinant, "matrix is not invertible");
        Error::SingularMatrix { determinant }
    })
}
