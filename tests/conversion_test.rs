//! Tests for the conversion service and output rendering.

mod common;

use common::{fixtures, fixtures::wavelengths};
use pretty_assertions::assert_eq;
use prism::error::ConvertError;
use prism::services::render;

#[test]
fn test_wavelength_dominant_channels() {
    let converter = fixtures::converter(&fixtures::lenient_config());

    let red = converter.wavelength(wavelengths::RED).unwrap();
    let green = converter.wavelength(wavelengths::GREEN).unwrap();
    let blue = converter.wavelength(wavelengths::BLUE).unwrap();

    assert_eq!(common::dominant_channel(&red), 0);
    assert_eq!(common::dominant_channel(&green), 1);
    assert_eq!(common::dominant_channel(&blue), 2);
}

#[test]
fn test_visible_spectrum_is_well_formed() {
    let converter = fixtures::converter(&fixtures::strict_config());

    for nm in (380..=700).step_by(10) {
        let conversion = converter.wavelength(nm as f64).unwrap();
        common::assert_normalized(&conversion);
        common::assert_css_consistent(&conversion);
        assert!(conversion.xyz.is_some());
    }
}

#[test]
fn test_hsv_hue_circle() {
    let converter = fixtures::converter(&fixtures::strict_config());

    let expected = [
        (0.0, "#ff0000"),
        (1.0 / 6.0, "#ffff00"),
        (2.0 / 6.0, "#00ff00"),
        (3.0 / 6.0, "#00ffff"),
        (4.0 / 6.0, "#0000ff"),
        (5.0 / 6.0, "#ff00ff"),
    ];
    for (h, css) in expected {
        let conversion = converter.hsv(h, 1.0, 1.0).unwrap();
        assert_eq!(conversion.css, css, "hue {h}");
        common::assert_css_consistent(&conversion);
    }
}

#[test]
fn test_strict_rejects_what_lenient_accepts() {
    let lenient = fixtures::converter(&fixtures::lenient_config());
    let strict = fixtures::converter(&fixtures::strict_config());

    assert!(lenient.hsv(-0.25, 1.0, 1.0).is_ok());
    assert!(matches!(
        strict.hsv(-0.25, 1.0, 1.0),
        Err(ConvertError::Color(_))
    ));

    assert!(lenient.wavelength(1200.0).is_ok());
    assert!(matches!(
        strict.wavelength(1200.0),
        Err(ConvertError::InvalidArgument(_))
    ));
}

#[test]
fn test_xyz_white_point() {
    let converter = fixtures::converter(&fixtures::lenient_config());
    let conversion = converter.xyz(0.95047, 1.0, 1.08883).unwrap();

    assert_eq!(conversion.bytes, [255, 255, 255]);
    assert_eq!(conversion.css, "#ffffff");
}

#[test]
fn test_css_then_hsv_agree() {
    let converter = fixtures::converter(&fixtures::lenient_config());

    let parsed = converter.css("#F00").unwrap();
    let computed = converter.hsv(0.0, 1.0, 1.0).unwrap();

    assert_eq!(parsed.bytes, computed.bytes);
    assert_eq!(parsed.css, computed.css);
}

#[test]
fn test_render_text_output() {
    let config = fixtures::lenient_config();
    let conversion = fixtures::converter(&config).css("#ff0080").unwrap();

    let text = render(&conversion, &config).unwrap();
    assert_eq!(
        text,
        "input: css #ff0080\n\
         rgb:   1.0000 0.0000 0.5020\n\
         bytes: 255 0 128\n\
         css:   #ff0080"
    );
}

#[test]
fn test_render_json_output() {
    let config = fixtures::json_config();
    let conversion = fixtures::converter(&config)
        .wavelength(wavelengths::GREEN)
        .unwrap();

    let json = render(&conversion, &config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["input"], "wavelength 530 nm");
    assert_eq!(value["css"], conversion.css.as_str());
    assert_eq!(value["xyz"].as_array().map(|a| a.len()), Some(3));
    assert_eq!(value["bytes"].as_array().map(|a| a.len()), Some(3));
}
