//! CIE 1931 XYZ to sRGB conversion
//!
//! The matrix and transfer function follow IEC 61966-2-1 (sRGB). Linear
//! components are hard-clipped to 0.0..=1.0 before gamma encoding, so colors
//! outside the sRGB gamut lose their relative magnitude.

use super::rgb::Rgb;

/// Linear segment cutoff of the sRGB encoding curve.
const LINEAR_THRESHOLD: f64 = 0.0031308;

/// Slope of the linear segment near black.
const LINEAR_SLOPE: f64 = 12.92;

/// Offset of the power segment.
const SRGB_A: f64 = 0.055;

/// Power segment exponent, 1/2.4.
const INV_GAMMA: f64 = 1.0 / 2.4;

/// XYZ (D65) to linear sRGB, row-major.
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [3.2406255, -1.5372080, -0.4986286],
    [-0.9689307, 1.8757561, 0.0415175],
    [0.0557101, -0.2040211, 1.0569959],
];

/// Clip a linear sRGB component to 0.0..=1.0 and apply the sRGB transfer
/// function.
///
/// Below the 0.0031308 cutoff the curve is linear (`12.92c`), above it is
/// `1.055 c^(1/2.4) - 0.055`. NaN passes through unchanged.
#[inline]
pub fn xyz_to_rgb_post_process(c: f64) -> f64 {
    let c = if c > 1.0 {
        1.0
    } else if c < 0.0 {
        0.0
    } else {
        c
    };

    if c <= LINEAR_THRESHOLD {
        c * LINEAR_SLOPE
    } else {
        (1.0 + SRGB_A) * c.powf(INV_GAMMA) - SRGB_A
    }
}

/// Convert CIE XYZ to normalized sRGB.
///
/// # Example
/// ```
/// use spectral_color::xyz_to_rgb;
///
/// // D65 white point
/// let [r, g, b] = xyz_to_rgb(0.95047, 1.0, 1.08883);
/// assert!((r - 1.0).abs() < 1e-3 && (g - 1.0).abs() < 1e-3 && (b - 1.0).abs() < 1e-3);
/// ```
pub fn xyz_to_rgb(x: f64, y: f64, z: f64) -> [f64; 3] {
    let [rr, gr, br] = XYZ_TO_LINEAR_SRGB;
    let r = rr[0] * x + rr[1] * y + rr[2] * z;
    let g = gr[0] * x + gr[1] * y + gr[2] * z;
    let b = br[0] * x + br[1] * y + br[2] * z;

    [
        xyz_to_rgb_post_process(r),
        xyz_to_rgb_post_process(g),
        xyz_to_rgb_post_process(b),
    ]
}

/// Array form of [`xyz_to_rgb`].
#[inline]
pub fn xyz_array_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    xyz_to_rgb(xyz[0], xyz[1], xyz[2])
}

/// A color in CIE 1931 XYZ.
///
/// Components are unbounded, roughly 0.0..=1.0 for visible light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create an XYZ color from an array `[x, y, z]`.
    #[inline]
    pub fn from_array(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }

    /// Components as an array `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<Xyz> for Rgb {
    fn from(xyz: Xyz) -> Self {
        Rgb::from_array(xyz_array_to_rgb(xyz.to_array()))
    }
}
