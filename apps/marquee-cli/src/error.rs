//! Error types for the Marquee CLI.

use std::io;
use std::path::PathBuf;

use marquee_core::{CoreError, ValidationError};
use marquee_render::RenderError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid data in {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    // =========================================================================
    // Billing Errors
    // =========================================================================
    /// An invoice could not be priced (with `on_error = "abort"`).
    #[error("Cannot bill {customer}: {source}")]
    Statement {
        customer: String,
        #[source]
        source: CoreError,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
