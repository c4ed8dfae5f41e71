pub mod config;
pub mod conversion;

pub use config::{AppConfig, OutputFormat};
pub use conversion::Conversion;
