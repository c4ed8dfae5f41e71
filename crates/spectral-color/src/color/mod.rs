//! Color types and conversion functions
//!
//! Each conversion is available as a plain function over arrays (and
//! scalar arguments) and as a `From` impl between the typed wrappers.
//!
//! # Color Spaces
//!
//! - [`Rgb`]: gamma-encoded sRGB, components in 0.0..=1.0
//! - [`Rgb8`]: the same as bytes, the form used for CSS strings
//! - [`Hsv`]: hue/saturation/value, all components fractions
//! - [`Xyz`]: CIE 1931 tristimulus values
//!
//! # Example
//!
//! ```
//! use spectral_color::{Hsv, Rgb};
//!
//! let rgb = Rgb::from(Hsv::new(0.0, 1.0, 1.0));
//! assert_eq!(rgb.to_css().unwrap(), "#ff0000");
//! ```

mod hsv;
mod rgb;
mod xyz;

pub use hsv::{hsv_array_to_rgb, hsv_to_rgb, hsv_to_rgb_255, Hsv};
pub use rgb::{rgb_array_to_255, rgb_to_255, Rgb, Rgb8};
pub use xyz::{xyz_array_to_rgb, xyz_to_rgb, xyz_to_rgb_post_process, Xyz};
