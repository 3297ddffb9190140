//! Simulation errors.

use finaml_core::types::ValuationError;
use thiserror::Error;

/// Portfolio simulation errors.
///
/// Every variant maps to `ValuationError::InvalidParameter`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Discount rate not finite or not above -1.
    #[error("Invalid discount rate: {rate} (must be finite and > -1)")]
    InvalidDiscountRate {
        /// The invalid rate
        rate: f64,
    },

    /// Growth rate not finite or not above -1.
    #[error("Invalid growth rate: {rate} (must be finite and > -1)")]
    InvalidGrowthRate {
        /// The invalid rate
        rate: f64,
    },

    /// Horizon not finite or not positive.
    #[error("Invalid horizon: {periods} periods (must be finite and > 0)")]
    InvalidHorizon {
        /// The invalid horizon
        periods: f64,
    },

    /// Zero trials requested.
    #[error("Trial count must be positive")]
    ZeroTrials,

    /// Rate-sampler volatility not finite or negative.
    #[error("Invalid {name} volatility: {value}")]
    InvalidVolatility {
        /// Which rate the volatility applies to
        name: &'static str,
        /// The invalid volatility
        value: f64,
    },
}

impl From<SimulationError> for ValuationError {
    fn from(err: SimulationError) -> Self {
        ValuationError::InvalidParameter(err.to_string())
    }
}
