//! Error types for analytical pricing.

use finaml_core::types::ValuationError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every variant maps to `ValuationError::InvalidParameter`.
///
/// # Examples
/// ```
/// use finaml_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Spot price negative or not finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price
        spot: f64,
    },

    /// Strike negative or not finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike
        strike: f64,
    },

    /// Volatility negative or not finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility
        volatility: f64,
    },

    /// Risk-free rate negative or not finite.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate
        rate: f64,
    },

    /// Time to maturity not finite.
    #[error("Invalid time to maturity: T = {expiry}")]
    InvalidMaturity {
        /// The invalid maturity
        expiry: f64,
    },
}

impl From<AnalyticalError> for ValuationError {
    fn from(err: AnalyticalError) -> Self {
        ValuationError::InvalidParameter(err.to_string())
    }
}
