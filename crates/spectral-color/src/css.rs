//! Hex and CSS string formatting for byte colors

/// Format a byte as a two-digit lowercase hex string.
///
/// # Example
/// ```
/// use spectral_color::byte_to_hex;
/// assert_eq!(byte_to_hex(16), "10");
/// assert_eq!(byte_to_hex(255), "ff");
/// ```
#[inline]
pub fn byte_to_hex(x: u8) -> String {
    hex::encode([x])
}

/// Format byte components as a CSS color string `#rrggbb`.
///
/// # Example
/// ```
/// use spectral_color::rgb_to_css;
/// assert_eq!(rgb_to_css(255, 0, 128), "#ff0080");
/// ```
pub fn rgb_to_css(r: u8, g: u8, b: u8) -> String {
    let mut css = String::with_capacity(7);
    css.push('#');
    css.push_str(&byte_to_hex(r));
    css.push_str(&byte_to_hex(g));
    css.push_str(&byte_to_hex(b));
    css
}

/// Format a byte triple `[r, g, b]` as a CSS color string `#rrggbb`.
#[inline]
pub fn rgb_array_to_css(rgb: [u8; 3]) -> String {
    rgb_to_css(rgb[0], rgb[1], rgb[2])
}
