use crate::error::ConvertError;
use crate::models::{AppConfig, Conversion};
use spectral_color::{Hsv, Rgb, Rgb8, Xyz};
use std::ops::RangeInclusive;

/// Wavelengths covered by the CIE 1931 tabulation, in nm
pub const CIE_RANGE: RangeInclusive<f64> = 360.0..=830.0;

/// Runs conversions for the CLI and packages the results.
///
/// In strict mode out-of-domain input is an error; otherwise it is logged
/// and converted anyway.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    strict: bool,
}

impl Converter {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            strict: config.strict,
        }
    }

    /// Monochromatic light at `nm` nanometers
    pub fn wavelength(&self, nm: f64) -> Result<Conversion, ConvertError> {
        if !CIE_RANGE.contains(&nm) {
            self.reject(format!(
                "wavelength {nm} nm outside {}..={} nm",
                CIE_RANGE.start(),
                CIE_RANGE.end()
            ))?;
        }

        let xyz = Xyz::from_wavelength(nm);
        let rgb = Rgb::from(xyz);
        tracing::debug!(nm, ?xyz, ?rgb, "Converted wavelength");

        build(format!("wavelength {nm} nm"), Some(xyz.to_array()), rgb)
    }

    /// HSV with all components as fractions
    pub fn hsv(&self, h: f64, s: f64, v: f64) -> Result<Conversion, ConvertError> {
        let hsv = match Hsv::try_new(h, s, v) {
            Ok(hsv) => hsv,
            Err(e) if self.strict => return Err(e.into()),
            Err(e) => {
                tracing::warn!(%e, "HSV input outside its domain, converting anyway");
                Hsv::new(h, s, v)
            }
        };

        let rgb = Rgb::from(hsv);
        tracing::debug!(?hsv, ?rgb, "Converted HSV");

        build(format!("hsv {h} {s} {v}"), None, rgb)
    }

    /// CIE 1931 XYZ tristimulus values
    pub fn xyz(&self, x: f64, y: f64, z: f64) -> Result<Conversion, ConvertError> {
        if ![x, y, z].iter().all(|c| c.is_finite()) {
            self.reject(format!("xyz components must be finite, got {x} {y} {z}"))?;
        }

        let xyz = Xyz::new(x, y, z);
        let rgb = Rgb::from(xyz);
        tracing::debug!(?xyz, ?rgb, "Converted XYZ");

        build(format!("xyz {x} {y} {z}"), Some(xyz.to_array()), rgb)
    }

    /// A CSS hex color such as `#ff0080` or `f08`
    pub fn css(&self, input: &str) -> Result<Conversion, ConvertError> {
        let bytes: Rgb8 = input.parse()?;
        let rgb = Rgb::from(bytes);
        tracing::debug!(input, ?bytes, "Parsed CSS color");

        Ok(Conversion {
            input: format!("css {}", input.trim()),
            xyz: None,
            rgb: rgb.to_array(),
            bytes: bytes.to_bytes(),
            css: bytes.to_css(),
        })
    }

    fn reject(&self, message: String) -> Result<(), ConvertError> {
        if self.strict {
            return Err(ConvertError::InvalidArgument(message));
        }
        tracing::warn!(%message, "Input outside its domain, converting anyway");
        Ok(())
    }
}

fn build(input: String, xyz: Option<[f64; 3]>, rgb: Rgb) -> Result<Conversion, ConvertError> {
    let bytes = rgb.to_rgb8()?;
    Ok(Conversion {
        input,
        xyz,
        rgb: rgb.to_array(),
        bytes: bytes.to_bytes(),
        css: bytes.to_css(),
    })
}
