//! Normalized and byte RGB types
//!
//! [`Rgb`] holds gamma-encoded sRGB components in 0.0..=1.0, [`Rgb8`] holds
//! the same color as bytes. Scaling between the two uses `floor(x * 255.9)`
//! so that 1.0 lands on 255 instead of being floored to 254.

use std::fmt;
use std::str::FromStr;

use crate::css::rgb_array_to_css;
use crate::error::{ColorError, ParseColorError};

/// Multiplier used when scaling a normalized component to a byte.
const BYTE_SCALE: f64 = 255.9;

/// Scale a normalized component to the byte range: `floor(x * 255.9)`.
///
/// Nothing is clamped; inputs outside 0.0..=1.0 give results outside
/// 0..=255. The cast to `i32` saturates for non-finite or huge inputs.
#[inline]
fn scale_to_byte(x: f64) -> i32 {
    (x * BYTE_SCALE).floor() as i32
}

/// Convert normalized RGB components (0.0..=1.0) to the byte range.
///
/// Each component maps to `floor(x * 255.9)`. Out-of-range input produces
/// out-of-range output; use [`Rgb::to_rgb8`] for a checked conversion.
///
/// # Example
/// ```
/// use spectral_color::rgb_to_255;
/// assert_eq!(rgb_to_255(1.0, 1.0, 1.0), [255, 255, 255]);
/// assert_eq!(rgb_to_255(0.0, 0.5, 1.0), [0, 127, 255]);
/// ```
#[inline]
pub fn rgb_to_255(r: f64, g: f64, b: f64) -> [i32; 3] {
    [scale_to_byte(r), scale_to_byte(g), scale_to_byte(b)]
}

/// Array form of [`rgb_to_255`].
#[inline]
pub fn rgb_array_to_255(rgb: [f64; 3]) -> [i32; 3] {
    rgb_to_255(rgb[0], rgb[1], rgb[2])
}

/// A normalized sRGB color.
///
/// Values are gamma-encoded and expected in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (0.0..=1.0)
    pub r: f64,
    /// Green channel (0.0..=1.0)
    pub g: f64,
    /// Blue channel (0.0..=1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new color from normalized components.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from an array `[r, g, b]`.
    #[inline]
    pub fn from_array(rgb: [f64; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    /// Components as an array `[r, g, b]`.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Unchecked byte scaling, see [`rgb_to_255`].
    #[inline]
    pub fn to_255(self) -> [i32; 3] {
        rgb_array_to_255(self.to_array())
    }

    /// Scale to bytes, failing if any scaled component leaves 0..=255.
    ///
    /// # Example
    /// ```
    /// use spectral_color::{Rgb, Rgb8};
    ///
    /// let bytes = Rgb::new(1.0, 0.0, 0.5).to_rgb8().unwrap();
    /// assert_eq!(bytes, Rgb8::new(255, 0, 127));
    ///
    /// assert!(Rgb::new(1.2, 0.0, 0.0).to_rgb8().is_err());
    /// ```
    pub fn to_rgb8(self) -> Result<Rgb8, ColorError> {
        let [r, g, b] = self.to_255();
        Ok(Rgb8::new(
            checked_byte("r", r, self.r)?,
            checked_byte("g", g, self.g)?,
            checked_byte("b", b, self.b)?,
        ))
    }

    /// Format as a CSS hex string, failing for out-of-range components.
    pub fn to_css(self) -> Result<String, ColorError> {
        Ok(self.to_rgb8()?.to_css())
    }
}

fn checked_byte(component: &'static str, scaled: i32, value: f64) -> Result<u8, ColorError> {
    // NaN scales to 0 under the saturating cast, so check it explicitly
    if value.is_nan() {
        return Err(ColorError::OutOfRange { component, value });
    }
    u8::try_from(scaled).map_err(|_| ColorError::OutOfRange { component, value })
}

impl From<[f64; 3]> for Rgb {
    fn from(rgb: [f64; 3]) -> Self {
        Self::from_array(rgb)
    }
}

impl From<Rgb8> for Rgb {
    /// Normalize bytes by dividing by 255.
    fn from(bytes: Rgb8) -> Self {
        Self {
            r: bytes.r as f64 / 255.0,
            g: bytes.g as f64 / 255.0,
            b: bytes.b as f64 / 255.0,
        }
    }
}

/// A color as three bytes, the form used for CSS strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Create a new byte color.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a byte color from an array `[r, g, b]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[r, g, b]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as a lowercase CSS hex string `#rrggbb`.
    #[inline]
    pub fn to_css(self) -> String {
        rgb_array_to_css(self.to_bytes())
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Rgb8 {
    type Err = ParseColorError;

    /// Parse a CSS hex color.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive, with
    /// surrounding whitespace trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use spectral_color::Rgb8;
    ///
    /// let pink: Rgb8 = "#FF0080".parse().unwrap();
    /// assert_eq!(pink.to_bytes(), [255, 0, 128]);
    ///
    /// let red: Rgb8 = "f00".parse().unwrap();
    /// assert_eq!(red.to_css(), "#ff0000");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Length is checked in bytes; reject multi-byte input before slicing
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        let mut bytes = [0u8; 3];
        match s.len() {
            // Shorthand: f08 -> ff0088
            3 => {
                let doubled: String = s.chars().flat_map(|c| [c, c]).collect();
                hex::decode_to_slice(doubled, &mut bytes)?;
            }
            6 => hex::decode_to_slice(s, &mut bytes)?,
            _ => return Err(ParseColorError::InvalidLength),
        }
        Ok(Self::from_bytes(bytes))
    }
}
