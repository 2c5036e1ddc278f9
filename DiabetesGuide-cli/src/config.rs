use std::path::PathBuf;

use clap::ValueEnum;
use thiserror::Error;

use crate::cli::{Cli, OutputFormat};

/// Environment variable naming the dataset CSV
pub const DATA_PATH_VAR: &str = "DIABETES_GUIDE_DATA";
/// Environment variable selecting the output format
pub const FORMAT_VAR: &str = "DIABETES_GUIDE_FORMAT";
/// Dataset loaded when nothing else is configured
pub const DEFAULT_DATA_PATH: &str = "diabetes.csv";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Unrecognized output format
    #[error("{var} must be \"text\" or \"json\", got \"{value}\"")]
    InvalidFormat { var: &'static str, value: String },
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Dataset CSV path
    pub data_path: PathBuf,
    /// Whether to load the dataset at start-up
    pub load_dataset: bool,
    /// Output format
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            load_dataset: true,
            format: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.data_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(FORMAT_VAR) {
            config.format = OutputFormat::from_str(value.trim(), true).map_err(|_| ConfigError::InvalidFormat {
                var: FORMAT_VAR,
                value,
            })?;
        }

        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.data {
            self.data_path = path.clone();
        }
        if cli.no_data {
            self.load_dataset = false;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        self
    }
}
