use spectral_color::{ColorError, ParseColorError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Invalid CSS color: {0}")]
    Parse(#[from] ParseColorError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument() {
        let error = ConvertError::InvalidArgument("h must be in [0, 1)".to_string());
        assert_eq!(error.to_string(), "Invalid argument: h must be in [0, 1)");
    }

    #[test]
    fn test_from_color_error() {
        let color_error = ColorError::OutOfRange {
            component: "r",
            value: 2.0,
        };
        let error: ConvertError = color_error.into();
        assert_eq!(
            error.to_string(),
            "Color error: component r out of range: 2"
        );
    }

    #[test]
    fn test_from_parse_error() {
        let error: ConvertError = ParseColorError::InvalidLength.into();
        match error {
            ConvertError::Parse(_) => {}
            _ => panic!("Expected Parse variant"),
        }
        assert!(error.to_string().starts_with("Invalid CSS color: "));
    }

    #[test]
    fn test_config_io_error() {
        let error = ConfigError::Io {
            path: PathBuf::from("prism.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "Failed to read prism.yaml: missing");
    }
}
