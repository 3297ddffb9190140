//! Closed-form option pricing.
//!
//! - Standard normal CDF and PDF
//! - Black-Scholes for European calls and puts, with limit formulas for
//!   zero maturity, zero volatility and zero price levels
//!
//! Options are never priced by the valuation engine; this module is the only
//! source of option prices.

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::{
    black_scholes_price, price_with_diagnostics, BlackScholes, OptionValuation, PricingRegime,
};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
