//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied by the caller)       │
//! │     --output json                                                      │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SPLITBILL_OUTPUT=json                                              │
//! │     SPLITBILL_CURRENCY_SYMBOL=NT$                                      │
//! │     SPLITBILL_LOG=debug                                                │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/splitbill/config.toml (Linux)                            │
//! │     ~/Library/Application Support/com.splitbill.splitbill/ (macOS)     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! currency_symbol = "NT$"
//! output = "text"       # text | json
//! log_filter = "warn,splitbill=info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable names.
pub const ENV_CURRENCY_SYMBOL: &str = "SPLITBILL_CURRENCY_SYMBOL";
pub const ENV_OUTPUT: &str = "SPLITBILL_OUTPUT";
pub const ENV_LOG: &str = "SPLITBILL_LOG";

// =============================================================================
// Output Format
// =============================================================================

/// How the split bill is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// The `BillOutput` record as pretty JSON.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// CLI Configuration
// =============================================================================

/// Settings for the `splitbill` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Printed before every amount in text output.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Default output format.
    #[serde(default)]
    pub output: OutputFormat,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_log_filter() -> String {
    "warn,splitbill=info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            currency_symbol: default_currency_symbol(),
            output: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist; the platform default may be
    /// missing.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// [`CliConfig::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            self.currency_symbol = symbol;
        }

        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output = output.parse()?;
        }

        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "currency_symbol must not be empty".into(),
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue("log_filter must not be empty".into()));
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "splitbill", "splitbill")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidValue(String),

    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
