//! Test fixtures and constants.

use prism::models::{AppConfig, OutputFormat};
use prism::services::Converter;
use std::io::Write;
use tempfile::NamedTempFile;

/// Wavelengths (nm) with a known dominant sRGB channel
pub mod wavelengths {
    /// Red end of the spectrum
    pub const RED: f64 = 650.0;

    /// Green peak
    pub const GREEN: f64 = 530.0;

    /// Blue
    pub const BLUE: f64 = 450.0;
}

/// Config with defaults (text output, lenient)
pub fn lenient_config() -> AppConfig {
    AppConfig::default()
}

/// Config that rejects out-of-domain input
pub fn strict_config() -> AppConfig {
    AppConfig {
        strict: true,
        ..AppConfig::default()
    }
}

/// Config producing JSON output
pub fn json_config() -> AppConfig {
    AppConfig {
        format: OutputFormat::Json,
        ..AppConfig::default()
    }
}

pub fn converter(config: &AppConfig) -> Converter {
    Converter::new(config)
}

/// Write YAML content to a temporary config file
pub fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}
