//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValuationError`: the crate-wide error returned at public boundaries
//! - `DegenerateInput`: a non-error flag raised when a pricer leaves the
//!   general analytic path for a closed-form fallback

use std::fmt;
use thiserror::Error;

/// Categorised valuation errors.
///
/// Every public fallible function in the workspace returns this type (or a
/// module error that converts into it via `From`).
///
/// # Variants
/// - `InvalidInstrument`: instrument construction rejected its arguments
/// - `InvalidParameter`: a market or simulation parameter is out of domain
/// - `Configuration`: a configuration file could not be loaded or validated
///
/// # Examples
/// ```
/// use finaml_core::types::ValuationError;
///
/// let err = ValuationError::InvalidInstrument("negative price: -1".to_string());
/// assert_eq!(format!("{}", err), "Invalid instrument: negative price: -1");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValuationError {
    /// Instrument arguments failed validation at construction.
    #[error("Invalid instrument: {0}")]
    InvalidInstrument(String),

    /// Non-finite or out-of-domain parameter.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration loading or validation failure.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ValuationError {
    /// Create an invalid instrument error
    pub fn invalid_instrument(msg: impl Into<String>) -> Self {
        Self::InvalidInstrument(msg.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Returns true for `InvalidInstrument`.
    #[inline]
    pub fn is_invalid_instrument(&self) -> bool {
        matches!(self, Self::InvalidInstrument(_))
    }

    /// Returns true for `InvalidParameter`.
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

/// Degenerate pricing inputs.
///
/// Not an error: the pricer still returns a well-defined value, but it comes
/// from a closed-form fallback instead of the general formula. Callers can
/// observe which fallback fired through the pricing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegenerateInput {
    /// Time to maturity is zero or negative; intrinsic value is returned.
    ZeroMaturity,
    /// Volatility is zero; discounted intrinsic (intrinsic plus carry) is returned.
    ZeroVolatility,
    /// Spot or strike is zero; the log-moneyness term is undefined.
    ZeroPriceLevel,
}

impl DegenerateInput {
    /// Short identifier used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroMaturity => "zero_maturity",
            Self::ZeroVolatility => "zero_volatility",
            Self::ZeroPriceLevel => "zero_price_level",
        }
    }
}

impl fmt::Display for DegenerateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaturity => write!(f, "zero time to maturity"),
            Self::ZeroVolatility => write!(f, "zero volatility"),
            Self::ZeroPriceLevel => write!(f, "zero spot or strike"),
        }
    }
}
