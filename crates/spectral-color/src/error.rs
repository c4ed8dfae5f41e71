//! Error types for color parsing and checked conversions
//!
//! The plain conversion functions never fail. These errors are only returned
//! by the checked constructors and by CSS parsing.

use std::fmt;

/// Why a CSS hex color such as `#ff0080` or `f08` was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Not 3 or 6 ASCII characters once `#` and whitespace are removed
    InvalidLength,
    /// A character that is not a hex digit, signs included
    InvalidHex(hex::FromHexError),
}

impl From<hex::FromHexError> for ParseColorError {
    fn from(err: hex::FromHexError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                f.write_str("CSS color must have 3 or 6 hex digits")
            }
            ParseColorError::InvalidHex(err) => write!(f, "CSS color is not hex: {err}"),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            ParseColorError::InvalidLength => None,
        }
    }
}

/// Error type for checked color construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A component fell outside its documented domain
    OutOfRange {
        /// Component name, e.g. `"h"` or `"g"`
        component: &'static str,
        /// The offending value
        value: f64,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::OutOfRange { component, value } => {
                write!(f, "component {} out of range: {}", component, value)
            }
        }
    }
}

impl std::error::Error for ColorError {}
