//! Field-level error currency shared across crates.

use crate::validation::ValidationError;
use std::fmt;

/// Validation failure details for one record field.
///
/// Carries the reported field name and the violated constraint; this is the
/// single error value the domain layers produce and the CLI renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name that failed validation.
    pub field: &'static str,
    /// Human-readable description of the violated constraint.
    pub message: Box<str>,
}

impl FieldError {
    /// Create a field error from a field name and constraint description.
    pub fn new(field: &'static str, message: impl Into<Box<str>>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

impl ValidationError for FieldError {
    fn empty(field: &'static str) -> Self {
        Self::new(field, "value must be non-empty")
    }

    fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::new(field, reason)
    }

    fn out_of_range(
        field: &'static str,
        _value: String,
        min: Option<String>,
        max: Option<String>,
    ) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => format!("value must be between {min} and {max}"),
            (Some(min), None) => format!("value must be at least {min}"),
            (None, Some(max)) => format!("value must be at most {max}"),
            (None, None) => "value is out of range".to_string(),
        };
        Self::new(field, message)
    }
}
