//! CLI error types

use sampler_core::SamplingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `sampler` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
