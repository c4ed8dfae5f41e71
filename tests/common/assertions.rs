//! Assertion helpers for tests.

use prism::models::Conversion;

/// Index of the largest byte component (0 = red, 1 = green, 2 = blue)
pub fn dominant_channel(conversion: &Conversion) -> usize {
    let bytes = conversion.bytes;
    let mut best = 0;
    for i in 1..3 {
        if bytes[i] > bytes[best] {
            best = i;
        }
    }
    best
}

/// Assert the CSS string is well-formed and agrees with the byte components
pub fn assert_css_consistent(conversion: &Conversion) {
    let css = &conversion.css;
    assert_eq!(css.len(), 7, "CSS string {css:?} is not #rrggbb");
    assert!(css.starts_with('#'), "CSS string {css:?} lacks '#'");
    assert_eq!(
        css.to_lowercase(),
        *css,
        "CSS string {css:?} is not lowercase"
    );

    let [r, g, b] = conversion.bytes;
    assert_eq!(*css, format!("#{r:02x}{g:02x}{b:02x}"));
}

/// Assert all normalized components are within 0..=1
pub fn assert_normalized(conversion: &Conversion) {
    for c in conversion.rgb {
        assert!(
            (0.0..=1.0).contains(&c),
            "component {c} out of range in {conversion:?}"
        );
    }
}
