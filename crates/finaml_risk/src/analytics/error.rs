//! Risk analytics errors.

use finaml_core::types::ValuationError;
use thiserror::Error;

/// Risk analytics errors.
///
/// Every variant maps to `ValuationError::InvalidParameter`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticsError {
    /// A simulation result must hold at least one trial.
    #[error("Simulation result is empty")]
    EmptyResult,

    /// A trial value is NaN or infinite.
    #[error("Non-finite trial value {value} at index {index}")]
    NonFiniteValue {
        /// Trial index
        index: usize,
        /// Offending value
        value: f64,
    },

    /// Confidence level outside (0, 1).
    #[error("Invalid confidence level: {level} (must lie in (0, 1))")]
    InvalidConfidenceLevel {
        /// The invalid level
        level: f64,
    },

    /// Quantile outside [0, 1].
    #[error("Invalid quantile: {quantile} (must lie in [0, 1])")]
    InvalidQuantile {
        /// The invalid quantile
        quantile: f64,
    },
}

impl From<AnalyticsError> for ValuationError {
    fn from(err: AnalyticsError) -> Self {
        ValuationError::InvalidParameter(err.to_string())
    }
}
