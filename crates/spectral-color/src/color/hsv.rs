//! HSV to RGB conversion
//!
//! Hue is a fraction of the full circle (0.0..1.0), not degrees. The hue
//! circle is split into six sectors; within each sector one channel is at
//! `v`, one at `p = v(1-s)` and one ramps between them.

use super::rgb::{rgb_array_to_255, Rgb};
use crate::error::ColorError;

/// Convert HSV to normalized RGB.
///
/// Preconditions: `s` and `v` in 0.0..=1.0, `h` in 0.0..1.0. Any finite `h`
/// outside that range wraps around the hue circle, so `h = 1.0` gives the
/// same color as `h = 0.0` and `h = -1/6` the same as `h = 5/6`. Out-of-range
/// `s` or `v` are not checked and produce out-of-range output.
///
/// # Example
/// ```
/// use spectral_color::hsv_to_rgb;
///
/// let [r, g, b] = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
/// assert!(r.abs() < 1e-12 && (g - 1.0).abs() < 1e-12 && b.abs() < 1e-12);
/// ```
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let scaled = h * 6.0;
    let floor = scaled.floor();
    let f = scaled - floor;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (floor as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Array form of [`hsv_to_rgb`].
#[inline]
pub fn hsv_array_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    hsv_to_rgb(hsv[0], hsv[1], hsv[2])
}

/// Convert HSV to byte-range RGB.
///
/// The normalized result of [`hsv_to_rgb`] scaled with
/// [`rgb_array_to_255`](crate::rgb_array_to_255).
#[inline]
pub fn hsv_to_rgb_255(h: f64, s: f64, v: f64) -> [i32; 3] {
    rgb_array_to_255(hsv_to_rgb(h, s, v))
}

/// An HSV color with all components as fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue as a fraction of the full circle (0.0..1.0)
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Value (0.0..=1.0)
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV color without validation.
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Create a new HSV color, rejecting components outside their domains.
    ///
    /// `h` must lie in 0.0..1.0, `s` and `v` in 0.0..=1.0.
    ///
    /// # Example
    /// ```
    /// use spectral_color::Hsv;
    ///
    /// assert!(Hsv::try_new(0.5, 1.0, 1.0).is_ok());
    /// assert!(Hsv::try_new(1.0, 1.0, 1.0).is_err());
    /// ```
    pub fn try_new(h: f64, s: f64, v: f64) -> Result<Self, ColorError> {
        if !(0.0..1.0).contains(&h) {
            return Err(ColorError::OutOfRange {
                component: "h",
                value: h,
            });
        }
        if !(0.0..=1.0).contains(&s) {
            return Err(ColorError::OutOfRange {
                component: "s",
                value: s,
            });
        }
        if !(0.0..=1.0).contains(&v) {
            return Err(ColorError::OutOfRange {
                component: "v",
                value: v,
            });
        }
        Ok(Self { h, s, v })
    }

    /// Create an HSV color from an array `[h, s, v]`.
    #[inline]
    pub fn from_array(hsv: [f64; 3]) -> Self {
        Self::new(hsv[0], hsv[1], hsv[2])
    }

    /// Components as an array `[h, s, v]`.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        Rgb::from_array(hsv_array_to_rgb(hsv.to_array()))
    }
}
