//! Validation error types

use std::fmt;

/// Validation error for request parameters and bodies
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Numeric parameter must be zero or positive
    Negative { field: &'static str, value: i64 },

    /// Query string failed to parse
    InvalidParams { reason: String },

    /// Request body missing or malformed
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { field, value } => {
                write!(f, "{} must be greater than or equal to 0, got {}", field, value)
            }
            Self::InvalidParams { reason } => {
                write!(f, "invalid query parameters: {}", reason)
            }
            Self::InvalidBody { reason } => {
                write!(f, "invalid request body: {}", reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Negative {
            field: "skip",
            value: -3,
        };
        assert_eq!(
            err.to_string(),
            "skip must be greater than or equal to 0, got -3"
        );
    }
}
