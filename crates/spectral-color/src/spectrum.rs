//! Wavelength to color conversion
//!
//! The CIE 1931 2° standard observer is approximated with the multi-lobe
//! piecewise Gaussian fit of Wyman, Sloan and Shirley, "Simple Analytic
//! Approximations to the CIE XYZ Color Matching Functions", JCGT vol. 2
//! no. 2, 2013. Each lobe is a Gaussian with a different width on either
//! side of its center.

use crate::color::{xyz_array_to_rgb, Xyz};

/// One asymmetric Gaussian lobe of the fit.
struct Lobe {
    amplitude: f64,
    center: f64,
    /// Inverse width below the center
    left: f64,
    /// Inverse width at and above the center
    right: f64,
}

impl Lobe {
    const fn new(amplitude: f64, center: f64, left: f64, right: f64) -> Self {
        Self {
            amplitude,
            center,
            left,
            right,
        }
    }

    #[inline]
    fn eval(&self, wavelength: f64) -> f64 {
        let width = if wavelength < self.center {
            self.left
        } else {
            self.right
        };
        let t = (wavelength - self.center) * width;
        self.amplitude * (-0.5 * t * t).exp()
    }
}

// The negative amplitude on the third X lobe is part of the fit.
const X_LOBES: [Lobe; 3] = [
    Lobe::new(0.362, 442.0, 0.0624, 0.0374),
    Lobe::new(1.056, 599.8, 0.0264, 0.0323),
    Lobe::new(-0.065, 501.1, 0.0490, 0.0382),
];

const Y_LOBES: [Lobe; 2] = [
    Lobe::new(0.821, 568.8, 0.0213, 0.0247),
    Lobe::new(0.286, 530.9, 0.0613, 0.0322),
];

const Z_LOBES: [Lobe; 2] = [
    Lobe::new(1.217, 437.0, 0.0845, 0.0278),
    Lobe::new(0.681, 459.0, 0.0385, 0.0725),
];

fn sum_lobes(lobes: &[Lobe], wavelength: f64) -> f64 {
    lobes.iter().map(|lobe| lobe.eval(wavelength)).sum()
}

/// Approximate the CIE 1931 color matching functions at a wavelength in nm.
///
/// Returns `[x, y, z]`. The fit is meaningful across the visible range
/// (roughly 380..=700 nm) and extrapolates smoothly outside it. Results are
/// not normalized or clamped; the subtracted X lobe pulls X close to zero
/// around 500 nm.
///
/// # Example
/// ```
/// use spectral_color::cie1931_wavelength_to_xyz_fit;
///
/// // Luminance peaks near 555 nm
/// let [_, y, _] = cie1931_wavelength_to_xyz_fit(555.0);
/// assert!((y - 1.0).abs() < 0.05);
/// ```
pub fn cie1931_wavelength_to_xyz_fit(wavelength: f64) -> [f64; 3] {
    [
        sum_lobes(&X_LOBES, wavelength),
        sum_lobes(&Y_LOBES, wavelength),
        sum_lobes(&Z_LOBES, wavelength),
    ]
}

/// Convert a visible-light wavelength in nm to a displayable sRGB color.
///
/// Composes [`cie1931_wavelength_to_xyz_fit`] with
/// [`xyz_to_rgb`](crate::xyz_to_rgb). Output components are in 0.0..=1.0.
///
/// # Example
/// ```
/// use spectral_color::wavelength_to_rgb;
///
/// let [r, g, b] = wavelength_to_rgb(650.0);
/// assert!(r > g && r > b);
/// ```
pub fn wavelength_to_rgb(wavelength: f64) -> [f64; 3] {
    xyz_array_to_rgb(cie1931_wavelength_to_xyz_fit(wavelength))
}

impl Xyz {
    /// Tristimulus values of monochromatic light, see
    /// [`cie1931_wavelength_to_xyz_fit`].
    #[inline]
    pub fn from_wavelength(wavelength: f64) -> Self {
        Self::from_array(cie1931_wavelength_to_xyz_fit(wavelength))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn dominant(rgb: [f64; 3]) -> usize {
        let mut best = 0;
        for i in 1..3 {
            if rgb[i] > rgb[best] {
                best = i;
            }
        }
        best
    }

    #[test]
    fn test_lobe_asymmetry() {
        let lobe = Lobe::new(1.0, 500.0, 0.1, 0.01);
        assert_eq!(lobe.eval(500.0), 1.0);
        // Narrow on the left, wide on the right
        assert!(lobe.eval(490.0) < lobe.eval(510.0));
    }

    /// Reference values of the CIE 1931 2° observer; the fit stays within
    /// a few percent of the peak.
    #[test]
    fn test_fit_tracks_cie_tables() {
        let cases = [
            (450.0, [0.3362, 0.0380, 1.7721]),
            (500.0, [0.0049, 0.3230, 0.2720]),
            (550.0, [0.4334, 0.9950, 0.0087]),
            (600.0, [1.0622, 0.6310, 0.0008]),
            (650.0, [0.2835, 0.1070, 0.0000]),
        ];
        for (nm, expected) in cases {
            let xyz = cie1931_wavelength_to_xyz_fit(nm);
            for c in 0..3 {
                assert!(
                    (xyz[c] - expected[c]).abs() < 0.06,
                    "{nm} nm component {c}: fit {} vs table {}",
                    xyz[c],
                    expected[c]
                );
            }
        }
    }

    /// The subtracted lobe pulls X down to almost nothing around 500 nm.
    #[test]
    fn test_x_trough_near_500() {
        let [x, y, _] = cie1931_wavelength_to_xyz_fit(505.0);
        assert!(x.abs() < 0.01, "x = {x}");
        assert!(y > 0.3, "y = {y}");
    }

    #[test]
    fn test_far_outside_visible_is_dark() {
        for nm in [200.0, 1000.0] {
            let xyz = cie1931_wavelength_to_xyz_fit(nm);
            assert!(xyz.iter().all(|c| c.abs() < 1e-3), "{nm} nm -> {xyz:?}");
            assert!(wavelength_to_rgb(nm).iter().all(|c| *c < 1e-6));
        }
    }

    #[test]
    fn test_dominant_channels() {
        assert_eq!(dominant(wavelength_to_rgb(650.0)), 0);
        assert_eq!(dominant(wavelength_to_rgb(530.0)), 1);
        assert_eq!(dominant(wavelength_to_rgb(450.0)), 2);
    }

    #[test]
    fn test_red_strictly_dominant_at_650() {
        let [r, g, b] = wavelength_to_rgb(650.0);
        assert!(r > g && r > b, "650 nm -> {:?}", [r, g, b]);
    }

    #[test]
    fn test_output_normalized_across_spectrum() {
        for nm in (380..=700).step_by(5) {
            for c in wavelength_to_rgb(nm as f64) {
                assert!((0.0..=1.0).contains(&c), "{nm} nm -> {c}");
            }
        }
    }

    #[test]
    fn test_repeatable() {
        for nm in [380.0, 455.5, 589.3, 700.0] {
            let first = wavelength_to_rgb(nm);
            let second = wavelength_to_rgb(nm);
            assert_eq!(first.map(f64::to_bits), second.map(f64::to_bits));
        }
    }

    #[test]
    fn test_composition() {
        let nm = 575.0;
        let via_types = Rgb::from(Xyz::from_wavelength(nm));
        assert_eq!(via_types.to_array(), wavelength_to_rgb(nm));
    }
}
