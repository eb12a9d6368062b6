//! Configuration management for the energy density calculator.
//!
//! Handles:
//! - Command-line argument parsing
//! - The optional TOML config file
//! - Merging both into one effective configuration

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::validation::ValidationPolicy;

/// How a result is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for the calculator
#[derive(Debug, Default, Parser)]
#[command(name = "energy-density")]
#[command(about = "Energy density of an electric field: U = ½ × ε₀ × εᵣ × E²")]
#[command(version)]
pub struct Args {
    /// Relative permittivity of the medium
    #[arg(long, short = 'p', allow_hyphen_values = true, help = "Relative permittivity εᵣ (e.g. 2.1 for PTFE)")]
    pub permittivity: Option<String>,

    /// Electric field strength
    #[arg(long, short = 'e', allow_hyphen_values = true, help = "Electric field strength E in V/m (e.g. '1e6' or '1e6 V/m')")]
    pub field: Option<String>,

    /// Output format
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Require a strictly positive field strength
    #[arg(long, help = "Reject negative field strengths as well as zero")]
    pub strict: bool,

    /// Config file to use instead of the default location
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level for the calculator
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from the TOML config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub validation: Option<ValidationPolicy>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Parse config content from a TOML string
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        toml::from_str(content)
            .with_context(|| format!("Failed to parse config TOML: {}", source_path.display()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, path)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Relative permittivity exactly as typed
    pub permittivity: Option<String>,
    /// Field strength exactly as typed
    pub field: Option<String>,
    pub policy: ValidationPolicy,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // An explicit path must exist; the default location is optional
        let (file, config_path) = match args.config {
            Some(path) => (FileConfig::load(&path)?, Some(path)),
            None => match default_config_path().filter(|path| path.is_file()) {
                Some(path) => (FileConfig::load(&path)?, Some(path)),
                None => (FileConfig::default(), None),
            },
        };

        let policy = if args.strict {
            ValidationPolicy::StrictPositive
        } else {
            file.validation.unwrap_or_default()
        };

        Ok(Config {
            permittivity: args.permittivity,
            field: args.field,
            policy,
            format: args.format.or(file.format).unwrap_or_default(),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| "warn".to_string()),
            config_path,
        })
    }
}

/// `<config dir>/energy-density/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("energy-density").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_config() {
        let content = r#"
validation = "strict-positive"
format = "json"
log_level = "debug"
"#;
        let file = FileConfig::parse(content, Path::new("config.toml")).expect("parse config");
        assert_eq!(file.validation, Some(ValidationPolicy::StrictPositive));
        assert_eq!(file.format, Some(OutputFormat::Json));
        assert_eq!(file.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = FileConfig::parse("precision = 8\n", Path::new("config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "energy-density",
            "--permittivity",
            "2.1",
            "--field",
            "-1e6 V/m",
            "--format",
            "json",
            "--strict",
        ]);
        assert_eq!(args.permittivity.as_deref(), Some("2.1"));
        assert_eq!(args.field.as_deref(), Some("-1e6 V/m"));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.strict);
    }
}
