//! Core types for valuation and risk.
//!
//! - [`error`]: `ValuationError` and the `DegenerateInput` flag
//! - [`time`]: `Expiration` and ACT/365 year fractions

pub mod error;
pub mod time;

pub use error::{DegenerateInput, ValuationError};
pub use time::{year_fraction_act365, Expiration};
