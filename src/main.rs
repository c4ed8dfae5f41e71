use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prism::models::{AppConfig, OutputFormat};
use prism::services::{render, Converter};

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Prism - convert wavelengths, XYZ, HSV and CSS colors")]
struct Cli {
    /// YAML config file (format, strict, precision)
    #[arg(long, global = true, env = "PRISM_CONFIG")]
    config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Reject out-of-domain input instead of converting it anyway
    #[arg(long, global = true, overrides_with = "lenient")]
    strict: bool,

    /// Convert out-of-domain input with a warning, even if the config file sets strict
    #[arg(long, global = true, overrides_with = "strict")]
    lenient: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a wavelength of visible light to sRGB
    #[command(allow_negative_numbers = true)]
    Wavelength {
        /// Wavelength in nanometers (e.g. 650)
        #[arg(value_name = "NM")]
        nm: f64,
    },
    /// Convert HSV to sRGB (hue, saturation and value all in 0..1)
    #[command(allow_negative_numbers = true)]
    Hsv {
        /// Hue as a fraction of the full circle (0.5 = 180 degrees)
        h: f64,
        /// Saturation
        s: f64,
        /// Value
        v: f64,
    },
    /// Convert CIE 1931 XYZ to sRGB
    #[command(allow_negative_numbers = true)]
    Xyz {
        /// X tristimulus value
        x: f64,
        /// Y tristimulus value (luminance)
        y: f64,
        /// Z tristimulus value
        z: f64,
    },
    /// Parse a CSS hex color (#rrggbb or #rgb)
    Css {
        /// Color string, e.g. "#ff0080"
        #[arg(value_name = "HEX")]
        hex: String,
    },
    /// Show version and effective configuration
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prism=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli.config;
    let strict = match (cli.strict, cli.lenient) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let config = AppConfig::load(config_path.as_deref()).with_overrides(cli.format, strict);
    let converter = Converter::new(&config);

    let conversion = match cli.command {
        Some(Commands::Wavelength { nm }) => converter
            .wavelength(nm)
            .with_context(|| format!("Failed to convert wavelength {nm} nm"))?,
        Some(Commands::Hsv { h, s, v }) => converter
            .hsv(h, s, v)
            .with_context(|| format!("Failed to convert hsv {h} {s} {v}"))?,
        Some(Commands::Xyz { x, y, z }) => converter
            .xyz(x, y, z)
            .with_context(|| format!("Failed to convert xyz {x} {y} {z}"))?,
        Some(Commands::Css { hex }) => converter
            .css(&hex)
            .with_context(|| format!("Failed to parse CSS color {hex:?}"))?,
        Some(Commands::Status) | None => {
            run_status_command(config_path.as_deref(), &config);
            return Ok(());
        }
    };

    let output = render(&conversion, &config).context("Failed to render output")?;
    println!("{output}");

    Ok(())
}

/// Display version and configuration information
fn run_status_command(config_path: Option<&Path>, config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Prism v{VERSION}");
    println!("Color conversions: wavelength, XYZ, HSV, CSS\n");

    println!("Configuration:");
    let source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found, using defaults)", path.display()),
        None => "(not set)".to_string(),
    };
    println!("  PRISM_CONFIG = {source}");
    println!("  format       = {:?}", config.format);
    println!("  strict       = {}", config.strict);
    println!("  precision    = {}", config.precision);

    println!("\nCommands:");
    println!("  prism wavelength <NM>   Convert a wavelength to sRGB");
    println!("  prism hsv <H> <S> <V>   Convert HSV to sRGB");
    println!("  prism xyz <X> <Y> <Z>   Convert CIE XYZ to sRGB");
    println!("  prism css <HEX>         Parse a CSS hex color");
    println!("\nRun 'prism --help' for more details.");
}
