use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Output format for conversion results
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned `key: value` lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Reject out-of-domain input instead of converting it anyway
    #[serde(default)]
    pub strict: bool,

    /// Decimal places for normalized components in text output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    4
}

impl AppConfig {
    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration, falling back to defaults when no file is given
    /// or the file cannot be used
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    format = ?config.format,
                    strict = config.strict,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply command-line overrides on top of the file values.
    ///
    /// `None` keeps what the file says; `Some(false)` turns strict mode off
    /// even when the file enables it.
    pub fn with_overrides(mut self, format: Option<OutputFormat>, strict: Option<bool>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(strict) = strict {
            self.strict = strict;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            strict: false,
            precision: default_precision(),
        }
    }
}
