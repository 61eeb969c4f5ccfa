//! Error types for waitcost.
//!
//! The estimation formulas themselves never fail: utilisation reaching 1
//! produces the sentinel wait rather than an error. Errors exist only at
//! the boundary, for inputs outside the documented domain and for
//! configuration loading.

use thiserror::Error;

/// Result type alias for waitcost operations.
pub type WaitResult<T> = Result<T, WaitError>;

/// Unified error type for all waitcost operations.
#[derive(Debug, Error)]
pub enum WaitError {
    /// Input outside the documented domain: a utilisation strictly
    /// outside `[0, 1]`, or a negative volume, wait, or cost field.
    #[error("invalid input: {field} = {value} must be {expected}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was supplied.
        value: f64,
        /// Description of the accepted range.
        expected: &'static str,
    },

    /// Invalid configuration beyond per-field schema checks.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaitError {
    /// Create an invalid-input error for a named field.
    #[must_use]
    pub const fn invalid_input(field: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidInput {
            field,
            value,
            expected,
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error reports an out-of-domain input value.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
