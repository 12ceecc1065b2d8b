//! Color space configuration files
//!
//! A list of standard and custom spaces described in JSON, as an application
//! would ship it.

use anyhow::Result;
use chromaconv_core::{
    Chromaticity, ColorSpace, ColorSpaceConfig, ColorSpaceId, D50, Rgb8, RgbColorSpace,
};
use chromaconv_tests::init_tracing;

const SPACES_JSON: &str = r#"[
    { "standard": "sRGB" },
    { "standard": "AdobeRGB", "gamma": 1.0 },
    { "standard": "DCI-P3" },
    {
        "name": "Panel",
        "red":   { "x": 0.68,  "y": 0.32 },
        "green": { "x": 0.265, "y": 0.69 },
        "blue":  { "x": 0.15,  "y": 0.06 },
        "gamma": 2.2
    },
    {
        "name": "Print proof",
        "red":   { "x": 0.7347, "y": 0.2653 },
        "green": { "x": 0.1152, "y": 0.8264 },
        "blue":  { "x": 0.1566, "y": 0.0177 },
        "white": { "x": 0.3457, "y": 0.3585 },
        "gamma": 1.8
    }
]"#;

fn load_spaces() -> Result<Vec<RgbColorSpace>> {
    let configs: Vec<ColorSpaceConfig> = serde_json::from_str(SPACES_JSON)?;
    let spaces = configs
        .iter()
        .map(ColorSpaceConfig::build)
        .collect::<chromaconv_core::Result<Vec<_>>>()?;
    Ok(spaces)
}

#[test]
fn test_load_space_list() -> Result<()> {
    init_tracing();
    let spaces = load_spaces()?;
    let names: Vec<&str> = spaces.iter().map(RgbColorSpace::name).collect();
    assert_eq!(names, ["sRGB", "AdobeRGB", "DCI-P3", "Panel", "Print proof"]);

    assert_eq!(spaces[0], RgbColorSpace::standard(ColorSpaceId::Srgb));
    assert!(spaces[1].is_linear());
    assert_eq!(spaces[1].rgb_to_xyz(), ColorSpaceId::AdobeRgb.rgb_to_xyz());
    Ok(())
}

#[test]
fn test_custom_white_point() -> Result<()> {
    let spaces = load_spaces()?;
    let proof = &spaces[4];
    assert!(proof.white_chromaticity()?.approx_eq(&D50, 1e-12));
    // Same primaries and white as the built-in wide gamut space
    assert!(
        proof
            .rgb_to_xyz()
            .approx_eq(&ColorSpaceId::AdobeWideGamutRgb.rgb_to_xyz(), 1e-15)
    );
    Ok(())
}

#[test]
fn test_loaded_spaces_convert() -> Result<()> {
    let gray = Rgb8::new(140, 140, 140);
    for space in load_spaces()? {
        let yxy = space.color_to_yxy(gray)?;
        assert_eq!(space.yxy_to_color(yxy)?, gray, "{space}");
    }
    Ok(())
}

#[test]
fn test_config_roundtrip_through_json() -> Result<()> {
    let configs = vec![
        ColorSpaceConfig::from(ColorSpaceId::Rec2020),
        ColorSpaceConfig::Custom {
            name: "Panel".to_string(),
            red: Chromaticity::new(0.68, 0.32),
            green: Chromaticity::new(0.265, 0.69),
            blue: Chromaticity::new(0.15, 0.06),
            white: None,
            gamma: 2.2,
        },
    ];
    let json = serde_json::to_string_pretty(&configs)?;
    assert!(json.contains(r#""standard": "Rec2020""#));
    assert!(!json.contains("white"));

    let back: Vec<ColorSpaceConfig> = serde_json::from_str(&json)?;
    assert_eq!(back, configs);
    Ok(())
}

#[test]
fn test_bad_entries_are_rejected() {
    let unknown = r#"[{ "standard": "Rec601" }]"#;
    assert!(serde_json::from_str::<Vec<ColorSpaceConfig>>(unknown).is_err());

    let collinear = r#"{
        "name": "flat",
        "red":   { "x": 0.2, "y": 0.2 },
        "green": { "x": 0.4, "y": 0.4 },
        "blue":  { "x": 0.3, "y": 0.3 },
        "gamma": 2.2
    }"#;
    let config: ColorSpaceConfig = serde_json::from_str(collinear).unwrap();
    assert!(matches!(
        config.build(),
        Err(chromaconv_core::Error::SingularMatrix { .. })
    ));
}
