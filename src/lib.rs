//! Prism - color conversions from the command line
//!
//! Wraps the `spectral-color` conversions with configuration, input
//! validation and output formatting.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
