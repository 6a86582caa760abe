//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid timestamp.
    #[error("Invalid timestamp: {0}. Use RFC 3339, e.g. 2025-01-15T00:00:00Z.")]
    InvalidTimestamp(String),

    /// Issuance input file could not be read.
    #[error("Cannot read issuance input {path}: {source}")]
    InputRead {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Issuance input was not valid JSON.
    #[error("Invalid issuance input: {0}")]
    InputParse(#[from] serde_json::Error),

    /// Strict validation failed.
    #[error("{count} validation error(s) in {subject}")]
    Invalid {
        /// What was validated.
        subject: String,
        /// Number of problems found.
        count: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] btrust_config::ConfigError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
