//! Configuration errors.

use finaml_core::types::ValuationError;
use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error reading {path}: {message}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying IO error
        message: String,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("Parse error: {0}")]
    Parse(String),

    /// One or more values are out of range.
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// An instrument entry was rejected by its constructor.
    #[error("Invalid instrument #{index}: {message}")]
    Instrument {
        /// Position in the `[[instruments]]` array
        index: usize,
        /// Constructor error
        message: String,
    },
}

impl From<ConfigError> for ValuationError {
    fn from(err: ConfigError) -> Self {
        ValuationError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = ConfigError::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Validation errors: a; b");
    }

    #[test]
    fn test_into_valuation_error() {
        let err: ValuationError = ConfigError::Parse("bad".to_string()).into();
        assert_eq!(err, ValuationError::Configuration("Parse error: bad".to_string()));
    }
}
