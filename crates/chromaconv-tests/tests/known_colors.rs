//! Known Color Tests
//!
//! Primaries, grays and display-color edge cases with known answers.

use chromaconv_core::{
    ColorSpace, ColorSpaceId, D50, D65, Error, Rgb8, RgbColorSpace, Vector3, color_to_yxy,
    to_color, to_linear, to_nonlinear, to_vector, yxy_to_color, yxy_to_rgb,
};
use chromaconv_tests::patterns::generate_colors;
use chromaconv_tests::{Sample, generate_samples};

#[test]
fn test_srgb_primaries() {
    let cases = [
        (Rgb8::RED, "red", 0.64, 0.33),
        (Rgb8::GREEN, "green", 0.30, 0.60),
        (Rgb8::BLUE, "blue", 0.15, 0.06),
    ];
    for (color, label, x, y) in cases {
        let yxy = color_to_yxy(color, &ColorSpaceId::Srgb).unwrap();
        eprintln!("{label}: Y={:.6} x={:.6} y={:.6}", yxy[0], yxy[1], yxy[2]);
        assert!((yxy[1] - x).abs() < 1e-3, "{label} x");
        assert!((yxy[2] - y).abs() < 1e-3, "{label} y");
    }
}

#[test]
fn test_primary_luminances_sum_to_one() {
    for id in ColorSpaceId::ALL {
        let sum: f64 = [Rgb8::RED, Rgb8::GREEN, Rgb8::BLUE]
            .into_iter()
            .map(|c| color_to_yxy(c, &id).unwrap()[0])
            .sum();
        assert!((sum - 1.0).abs() < 1e-4, "{id}: {sum}");
    }
}

#[test]
fn test_white_points() {
    for id in ColorSpaceId::ALL {
        let white = RgbColorSpace::from(id).white_chromaticity().unwrap();
        let expected = match id {
            ColorSpaceId::ProPhotoRgb | ColorSpaceId::AdobeWideGamutRgb => D50,
            _ => D65,
        };
        assert!(white.approx_eq(&expected, 1e-3), "{id}: {white:?}");
    }
}

#[test]
fn test_every_gray_roundtrips_through_display_color() {
    for id in ColorSpaceId::ALL {
        for gray in generate_colors(Sample::Grayscale, 0) {
            let yxy = color_to_yxy(gray, &id).unwrap();
            assert_eq!(yxy_to_color(yxy, &id).unwrap(), gray, "{id}");
        }
    }
}

#[test]
fn test_gray_140() {
    let gray = Rgb8::new(140, 140, 140);
    let yxy = color_to_yxy(gray, &ColorSpaceId::Srgb).unwrap();
    // Neutral: chromaticity is the white point
    assert!((yxy[1] - 0.3127).abs() < 1e-3);
    assert!((yxy[2] - 0.3290).abs() < 1e-3);
    assert_eq!(yxy_to_color(yxy, &ColorSpaceId::Srgb).unwrap(), gray);
}

#[test]
fn test_black_has_no_chromaticity() {
    for id in ColorSpaceId::ALL {
        assert!(matches!(
            color_to_yxy(Rgb8::BLACK, &id),
            Err(Error::UndefinedChromaticity { .. })
        ));
    }
}

#[test]
fn test_display_color_clamping() {
    assert_eq!(to_color(Vector3::new(1.5, -0.3, 0.5)), Rgb8::new(255, 0, 128));
    assert_eq!(to_color(Vector3::new(f64::NAN, 1.0, 0.0)), Rgb8::new(0, 255, 0));

    // A saturated Rec2020 green is outside sRGB and clips
    let yxy = color_to_yxy(Rgb8::GREEN, &ColorSpaceId::Rec2020).unwrap();
    let rgb = yxy_to_rgb(yxy, &ColorSpaceId::Srgb).unwrap();
    assert!(rgb[0] < 0.0 && rgb[1] > 1.0);
    let clipped = yxy_to_color(yxy, &ColorSpaceId::Srgb).unwrap();
    assert_eq!((clipped.r, clipped.g), (0, 255));
}

#[test]
fn test_linear_space_gamma_identity() {
    let id = ColorSpaceId::SrgbLinear;
    assert!(id.is_linear());
    for v in generate_samples(Sample::Random(5), 200) {
        assert_eq!(to_linear(v, &id), v);
        assert_eq!(to_nonlinear(v, &id), v);
    }
}

#[test]
fn test_negative_values_stay_finite() {
    let v = Vector3::new(-0.25, 0.5, -1.0);
    let linear = to_linear(v, &ColorSpaceId::Srgb);
    assert!(linear.is_finite());
    assert!(linear[0] < 0.0 && linear[2] < 0.0);
    assert!(to_nonlinear(linear, &ColorSpaceId::Srgb).approx_eq(&v, 1e-12));
}

#[test]
fn test_hex_colors() {
    let color: Rgb8 = "#8C8C8C".parse().unwrap();
    assert_eq!(color, Rgb8::new(140, 140, 140));
    assert_eq!(color.to_hex(), "#8c8c8c");
    assert_eq!(to_color(to_vector(color)), color);
}
