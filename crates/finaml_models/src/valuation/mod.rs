//! Valuation engine.
//!
//! Present value, future value and discounted-cash-flow functions.
//!
//! | Shape  | Present value               | Future value                        |
//! |--------|-----------------------------|-------------------------------------|
//! | Stock  | `price`                     | `price * (1 + g)^n`                 |
//! | Bond   | `face / (1 + coupon)`       | `face * (1 + coupon)^n`             |
//! | Option | `0`                         | `0`                                 |
//!
//! Options are valued at zero here on purpose: option prices come from
//! [`crate::analytical::black_scholes_price`], never from this module.

mod cashflows;

pub use cashflows::{npv, sensitivity_analysis, CashFlowSeries};

use finaml_core::traits::Valuable;

use crate::instruments::Instrument;

/// Growth rate applied to stocks when none is supplied.
pub const DEFAULT_GROWTH_RATE: f64 = 0.05;

/// Present value of an instrument.
///
/// # Examples
/// ```
/// use finaml_models::instruments::Instrument;
/// use finaml_models::valuation::present_value;
///
/// let bond = Instrument::bond("XYZ", 1000.0, 0.05).unwrap();
/// assert!((present_value(&bond) - 952.38).abs() < 0.01);
/// ```
#[inline]
pub fn present_value(instrument: &Instrument) -> f64 {
    instrument.present_value()
}

/// Future value of an instrument after `periods` at `growth_rate`.
///
/// Bonds compound at their own coupon rate and ignore `growth_rate`.
#[inline]
pub fn future_value(instrument: &Instrument, periods: f64, growth_rate: f64) -> f64 {
    instrument.future_value(periods, growth_rate)
}

/// Future value at [`DEFAULT_GROWTH_RATE`].
///
/// # Examples
/// ```
/// use finaml_models::instruments::Instrument;
/// use finaml_models::valuation::future_value_default;
///
/// let stock = Instrument::stock("AAPL", 150.0).unwrap();
/// assert!((future_value_default(&stock, 5.0) - 191.44).abs() < 0.01);
/// ```
#[inline]
pub fn future_value_default(instrument: &Instrument, periods: f64) -> f64 {
    future_value(instrument, periods, DEFAULT_GROWTH_RATE)
}

/// Sum of present values, accumulated in slice order.
pub fn total_present_value(instruments: &[Instrument]) -> f64 {
    instruments.iter().map(present_value).sum()
}
