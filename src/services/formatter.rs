use crate::error::ConvertError;
use crate::models::{AppConfig, Conversion, OutputFormat};
use std::fmt::Write;

/// Render a conversion in the configured output format
pub fn render(conversion: &Conversion, config: &AppConfig) -> Result<String, ConvertError> {
    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(conversion)?),
        OutputFormat::Text => Ok(render_text(conversion, config.precision)),
    }
}

fn render_text(conversion: &Conversion, precision: usize) -> String {
    let components = |values: &[f64; 3]| {
        values
            .iter()
            .map(|v| format!("{v:.precision$}"))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "input: {}", conversion.input);
    if let Some(xyz) = &conversion.xyz {
        let _ = writeln!(out, "xyz:   {}", components(xyz));
    }
    let _ = writeln!(out, "rgb:   {}", components(&conversion.rgb));
    let [r, g, b] = conversion.bytes;
    let _ = writeln!(out, "bytes: {r} {g} {b}");
    let _ = write!(out, "css:   {}", conversion.css);
    out
}
