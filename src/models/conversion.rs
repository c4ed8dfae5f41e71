use serde::Serialize;

/// Result of one conversion, as printed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Human-readable description of the input, e.g. `wavelength 650 nm`
    pub input: String,

    /// CIE XYZ tristimulus values, when the conversion passes through XYZ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xyz: Option<[f64; 3]>,

    /// Normalized sRGB components (0..=1)
    pub rgb: [f64; 3],

    /// Byte components (0..=255)
    pub bytes: [u8; 3],

    /// CSS hex string `#rrggbb`
    pub css: String,
}
