//! Error types for the calorie calculator

use thiserror::Error;

use crate::validation::get_field_display_label;

/// Calculator error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalorieError {
    /// Input rejected before any arithmetic ran
    #[error("Invalid input: {}: {message}", get_field_display_label(.field))]
    InvalidInput { field: String, message: String },

    /// Options could not be assembled from their sources
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalorieError {
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        CalorieError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's values (map to a 400-style response)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalorieError::InvalidInput { .. })
    }

    /// Name of the offending field, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalorieError::InvalidInput { field, .. } => Some(field),
            CalorieError::Config(_) => None,
        }
    }
}

impl From<config::ConfigError> for CalorieError {
    fn from(err: config::ConfigError) -> Self {
        CalorieError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display_uses_label() {
        let err = CalorieError::invalid_input("weight_lbs", "must be greater than 0");
        assert_eq!(err.to_string(), "Invalid input: Weight: must be greater than 0");
        assert!(err.is_invalid_input());
        assert_eq!(err.field(), Some("weight_lbs"));
    }

    #[test]
    fn test_config_error() {
        let err = CalorieError::Config("missing field `gender`".to_string());
        assert!(!err.is_invalid_input());
        assert_eq!(err.field(), None);
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
