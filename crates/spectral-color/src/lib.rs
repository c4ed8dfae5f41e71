//! spectral-color: pure color conversions
//!
//! Converts between physical wavelengths, CIE 1931 XYZ, HSV, normalized
//! sRGB, byte RGB and CSS hex strings. Every function is a pure computation
//! with no shared state.
//!
//! # Quick Start
//!
//! ```
//! use spectral_color::{rgb_array_to_255, wavelength_to_rgb};
//!
//! let rgb = wavelength_to_rgb(650.0);
//! let [r, g, b] = rgb_array_to_255(rgb);
//! assert!(r > g && r > b);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! wavelength (nm)
//!     |
//!     v
//! cie1931_wavelength_to_xyz_fit   (multi-lobe Gaussian fit)
//!     |
//!     v
//! XYZ --> linear sRGB             (IEC 61966-2-1 matrix)
//!     |
//!     v
//! clip to 0..=1, sRGB gamma       (xyz_to_rgb_post_process)
//!     |
//!     v
//! normalized RGB --> bytes --> "#rrggbb"
//! ```
//!
//! HSV input joins the pipeline at normalized RGB via [`hsv_to_rgb`].
//!
//! # Input Domains
//!
//! The plain functions do not validate input. Out-of-domain components are
//! documented preconditions: they produce out-of-range output rather than
//! errors. Checked alternatives are [`Hsv::try_new`] and [`Rgb::to_rgb8`],
//! and CSS strings are parsed with `str::parse::<Rgb8>()`.

pub mod color;
pub mod css;
pub mod error;
pub mod spectrum;

pub use color::{
    hsv_array_to_rgb, hsv_to_rgb, hsv_to_rgb_255, rgb_array_to_255, rgb_to_255,
    xyz_array_to_rgb, xyz_to_rgb, xyz_to_rgb_post_process, Hsv, Rgb, Rgb8, Xyz,
};
pub use css::{byte_to_hex, rgb_array_to_css, rgb_to_css};
pub use error::{ColorError, ParseColorError};
pub use spectrum::{cie1931_wavelength_to_xyz_fit, wavelength_to_rgb};
