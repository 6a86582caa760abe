//! Configuration error types.

use std::path::PathBuf;

use btrust_core::validation::{Validate, ValidationError};
use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("Configuration not found: {}", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {}", join(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// File could not be parsed.
    #[error("Failed to parse {format} configuration: {message}")]
    Parse {
        /// Source format (`toml` or `json`).
        format: &'static str,
        /// Parser message.
        message: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            format: "toml",
            message: err.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ConfigError::Parse {
                format: "json",
                message: err.to_string(),
            }
        } else {
            ConfigError::Serialization(err.to_string())
        }
    }
}

/// Turns validation findings into a [`ConfigError`].
pub trait ValidateExt: Validate {
    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

impl<T: Validate + ?Sized> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Findings(Vec<ValidationError>);

    impl Validate for Findings {
        fn validate(&self) -> Vec<ValidationError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_no_findings_is_ok() {
        assert!(Findings(vec![]).validate_or_error().is_ok());
    }

    #[test]
    fn test_single_finding() {
        let err = Findings(vec![ValidationError::new("fee_bps", "too large")])
            .validate_or_error()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "fee_bps"));
    }

    #[test]
    fn test_multiple_findings() {
        let err = Findings(vec![
            ValidationError::new("a", "bad"),
            ValidationError::new("b", "worse"),
        ])
        .validate_or_error()
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("a: bad"));
        assert!(message.contains("b: worse"));
    }
}
