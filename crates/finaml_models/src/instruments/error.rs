//! Instrument error types.
//!
//! Structured errors for instrument construction. Every variant maps to
//! `ValuationError::InvalidInstrument` at the crate boundary.

use finaml_core::types::ValuationError;
use thiserror::Error;

/// Instrument construction errors.
///
/// # Examples
/// ```
/// use finaml_models::instruments::InstrumentError;
///
/// let err = InstrumentError::NegativePrice { price: -1.5 };
/// assert!(format!("{}", err).contains("-1.5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Quoted price is negative or not finite.
    #[error("Invalid price: P = {price}")]
    NegativePrice {
        /// The rejected price
        price: f64,
    },

    /// Face value is negative or not finite.
    #[error("Invalid face value: F = {face_value}")]
    NegativeFaceValue {
        /// The rejected face value
        face_value: f64,
    },

    /// Coupon rate is not finite or does not exceed -1.
    #[error("Invalid coupon rate: c = {coupon_rate} (must be finite and > -1)")]
    InvalidCouponRate {
        /// The rejected coupon rate
        coupon_rate: f64,
    },

    /// Strike is negative or not finite.
    #[error("Invalid strike: K = {strike}")]
    NegativeStrike {
        /// The rejected strike
        strike: f64,
    },

    /// Volatility is negative or not finite.
    #[error("Invalid volatility: σ = {volatility}")]
    NegativeVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Unrecognised option kind label.
    #[error("Unknown option kind: {0}")]
    UnknownOptionKind(String),
}

impl From<InstrumentError> for ValuationError {
    fn from(err: InstrumentError) -> Self {
        ValuationError::InvalidInstrument(err.to_string())
    }
}
