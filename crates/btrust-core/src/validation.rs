//! Validation trait shared by configuration and issuance terms.

use std::fmt;

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trait for values that can check their own consistency.
pub trait Validate {
    /// Validates the value.
    ///
    /// Returns every problem found, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the value is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysBad;

    impl Validate for AlwaysBad {
        fn validate(&self) -> Vec<ValidationError> {
            vec![ValidationError::with_rule("principal", "must be positive", "positive")]
        }
    }

    #[test]
    fn test_display_with_rule() {
        let err = ValidationError::with_rule("supply", "must be positive", "positive");
        assert_eq!(err.to_string(), "supply: must be positive (rule: positive)");
    }

    #[test]
    fn test_display_without_rule() {
        let err = ValidationError::new("supply", "must be positive");
        assert_eq!(err.to_string(), "supply: must be positive");
    }

    #[test]
    fn test_is_valid() {
        assert!(!AlwaysBad.is_valid());
    }
}
