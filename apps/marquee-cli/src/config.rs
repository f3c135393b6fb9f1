//! # CLI Configuration
//!
//! Configuration management for the statement printer.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --format html --on-error skip                                      │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     MARQUEE_FORMAT=html                                                │
//! │     MARQUEE_ON_ERROR=skip                                              │
//! │     MARQUEE_LOG=debug                                                  │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/marquee/marquee.toml (Linux)                             │
//! │     ~/Library/Application Support/com.marquee.marquee/marquee.toml     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     text output, abort on the first bad invoice, "warn" logging        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [output]
//! format = "text"      # text | html | json
//!
//! [billing]
//! on_error = "abort"   # abort | skip
//!
//! [logging]
//! filter = "warn"      # RUST_LOG still wins when set
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use marquee_render::OutputFormat;

use crate::error::{CliError, CliResult};

// =============================================================================
// Failure Policy
// =============================================================================

/// What to do when one invoice in a batch cannot be priced.
///
/// The core never recovers from `UnknownPlay` / `UnknownGenre`; this is the
/// caller-side decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failing invoice and exit non-zero.
    #[default]
    Abort,

    /// Log the failure and continue with the next invoice.
    Skip,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" | "fail" => Ok(FailurePolicy::Abort),
            "skip" | "continue" => Ok(FailurePolicy::Skip),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown failure policy: '{}'. Valid options: abort, skip",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Billing behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingSettings {
    #[serde(default)]
    pub on_error: FailurePolicy,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub billing: BillingSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl MarqueeConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (an explicit path must exist; the default path may not)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigNotFound(path));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    ///
    /// The logging filter must be a non-empty, parseable `EnvFilter` directive.
    pub fn validate(&self) -> CliResult<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }
        EnvFilter::try_new(&self.logging.filter).map_err(|e| {
            CliError::InvalidConfig(format!(
                "logging.filter '{}' is not a valid filter: {}",
                self.logging.filter, e
            ))
        })?;
        Ok(())
    }

    /// Applies `MARQUEE_*` overrides from `lookup` (the process environment
    /// in production). Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("MARQUEE_FORMAT") {
            match format.parse::<OutputFormat>() {
                Ok(parsed) => {
                    debug!(format = %parsed, "Overriding output format from environment");
                    self.output.format = parsed;
                }
                Err(e) => warn!(format = %format, error = %e, "Ignoring MARQUEE_FORMAT"),
            }
        }

        if let Some(policy) = lookup("MARQUEE_ON_ERROR") {
            match policy.parse::<FailurePolicy>() {
                Ok(parsed) => {
                    debug!(policy = %parsed, "Overriding failure policy from environment");
                    self.billing.on_error = parsed;
                }
                Err(e) => warn!(policy = %policy, error = %e, "Ignoring MARQUEE_ON_ERROR"),
            }
        }

        if let Some(filter) = lookup("MARQUEE_LOG") {
            if filter.trim().is_empty() {
                warn!("Ignoring empty MARQUEE_LOG");
            } else if let Err(e) = EnvFilter::try_new(&filter) {
                warn!(filter = %filter, error = %e, "Ignoring MARQUEE_LOG");
            } else {
                self.logging.filter = filter;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "marquee", "marquee")
            .map(|dirs| dirs.config_dir().join("marquee.toml"))
    }
}
