//! Financial instrument definitions.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects):
//! - `Instrument` is a closed variant over exactly three shapes
//! - Every consumer matches exhaustively, so a new shape cannot be silently
//!   ignored
//! - Each shape implements `finaml_core::traits::Valuable`
//!
//! Instruments are immutable once constructed. Constructors validate their
//! arguments, so an `Instrument` value is always well formed.
//!
//! # Examples
//!
//! ```
//! use finaml_models::instruments::{Instrument, InstrumentKind, OptionKind};
//!
//! let portfolio = vec![
//!     Instrument::stock("AAPL", 150.0).unwrap(),
//!     Instrument::bond("XYZ", 1000.0, 0.05).unwrap(),
//!     Instrument::option(OptionKind::Call, "AAPL", 160.0, "2023-12-31", 0.2).unwrap(),
//! ];
//!
//! let kinds: Vec<InstrumentKind> = portfolio.iter().map(Instrument::kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![InstrumentKind::Stock, InstrumentKind::Bond, InstrumentKind::Option]
//! );
//! ```

mod bond;
mod error;
mod option;
mod stock;

pub use bond::Bond;
pub use error::InstrumentError;
pub use option::{EquityOption, OptionKind};
pub use stock::Stock;

use std::fmt;

use finaml_core::traits::Valuable;
use finaml_core::types::Expiration;

/// Discriminant of an [`Instrument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    /// Listed stock
    Stock,
    /// Fixed-coupon bond
    Bond,
    /// Vanilla option
    Option,
}

impl InstrumentKind {
    /// Lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Bond => "bond",
            Self::Option => "option",
        }
    }
}

/// Unified instrument enum for static dispatch.
///
/// # Variants
/// - `Stock`: listed equity at a quoted price
/// - `Bond`: fixed-coupon bond
/// - `Option`: vanilla call or put
#[derive(Debug, Clone, PartialEq)]
pub enum Instrument {
    /// Listed stock
    Stock(Stock),
    /// Fixed-coupon bond
    Bond(Bond),
    /// Vanilla option
    Option(EquityOption),
}

impl Instrument {
    /// Creates a stock instrument.
    pub fn stock(ticker: impl Into<String>, price: f64) -> Result<Self, InstrumentError> {
        Stock::new(ticker, price).map(Instrument::Stock)
    }

    /// Creates a bond instrument.
    pub fn bond(
        ticker: impl Into<String>,
        face_value: f64,
        coupon_rate: f64,
    ) -> Result<Self, InstrumentError> {
        Bond::new(ticker, face_value, coupon_rate).map(Instrument::Bond)
    }

    /// Creates an option instrument.
    pub fn option(
        kind: OptionKind,
        underlying: impl Into<String>,
        strike: f64,
        expiration: impl Into<Expiration>,
        volatility: f64,
    ) -> Result<Self, InstrumentError> {
        EquityOption::new(kind, underlying, strike, expiration, volatility).map(Instrument::Option)
    }

    /// Returns the discriminant.
    #[inline]
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Instrument::Stock(_) => InstrumentKind::Stock,
            Instrument::Bond(_) => InstrumentKind::Bond,
            Instrument::Option(_) => InstrumentKind::Option,
        }
    }

    /// Ticker of the instrument (the underlying's ticker for options).
    #[inline]
    pub fn ticker(&self) -> &str {
        match self {
            Instrument::Stock(stock) => stock.ticker(),
            Instrument::Bond(bond) => bond.ticker(),
            Instrument::Option(option) => option.underlying(),
        }
    }

    /// Returns the option payload, if this is an option.
    #[inline]
    pub fn as_option(&self) -> Option<&EquityOption> {
        match self {
            Instrument::Option(option) => Some(option),
            Instrument::Stock(_) | Instrument::Bond(_) => None,
        }
    }
}

impl Valuable for Instrument {
    #[inline]
    fn present_value(&self) -> f64 {
        match self {
            Instrument::Stock(stock) => stock.present_value(),
            Instrument::Bond(bond) => bond.present_value(),
            Instrument::Option(option) => option.present_value(),
        }
    }

    #[inline]
    fn future_value(&self, periods: f64, growth_rate: f64) -> f64 {
        match self {
            Instrument::Stock(stock) => stock.future_value(periods, growth_rate),
            Instrument::Bond(bond) => bond.future_value(periods, growth_rate),
            Instrument::Option(option) => option.future_value(periods, growth_rate),
        }
    }
}

impl From<Stock> for Instrument {
    fn from(stock: Stock) -> Self {
        Instrument::Stock(stock)
    }
}

impl From<Bond> for Instrument {
    fn from(bond: Bond) -> Self {
        Instrument::Bond(bond)
    }
}

impl From<EquityOption> for Instrument {
    fn from(option: EquityOption) -> Self {
        Instrument::Option(option)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instrument::Stock(stock) => fmt::Display::fmt(stock, f),
            Instrument::Bond(bond) => fmt::Display::fmt(bond, f),
            Instrument::Option(option) => fmt::Display::fmt(option, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_discriminator() {
        assert_eq!(
            Instrument::stock("AAPL", 1.0).unwrap().kind(),
            InstrumentKind::Stock
        );
        assert_eq!(
            Instrument::bond("XYZ", 1.0, 0.0).unwrap().kind(),
            InstrumentKind::Bond
        );
        assert_eq!(
            Instrument::option(OptionKind::Put, "AAPL", 1.0, "2024-01-01", 0.1)
                .unwrap()
                .kind(),
            InstrumentKind::Option
        );
    }

    #[test]
    fn test_ticker_of_option_is_underlying() {
        let opt = Instrument::option(OptionKind::Call, "MSFT", 300.0, "2024-03-15", 0.25).unwrap();
        assert_eq!(opt.ticker(), "MSFT");
    }

    #[test]
    fn test_as_option() {
        let stock = Instrument::stock("AAPL", 150.0).unwrap();
        assert!(stock.as_option().is_none());

        let opt = Instrument::option(OptionKind::Call, "AAPL", 160.0, "2023-12-31", 0.2).unwrap();
        assert_eq!(opt.as_option().map(EquityOption::strike), Some(160.0));
    }

    #[test]
    fn test_constructor_errors_propagate() {
        assert!(Instrument::stock("AAPL", -150.0).is_err());
        assert!(Instrument::bond("XYZ", -1000.0, 0.05).is_err());
        assert!(Instrument::option(OptionKind::Call, "AAPL", -1.0, "x", 0.2).is_err());
    }

    #[test]
    fn test_valuable_dispatch() {
        let bond = Instrument::bond("XYZ", 1000.0, 0.0).unwrap();
        assert_eq!(bond.present_value(), 1000.0);
        assert_eq!(bond.future_value(3.0, 0.5), 1000.0);
    }

    #[test]
    fn test_display_delegates() {
        let stock: Instrument = Stock::new("AAPL", 150.0).unwrap().into();
        assert_eq!(stock.to_string(), "Stock(ticker=AAPL, price=150)");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(InstrumentKind::Stock.name(), "stock");
        assert_eq!(InstrumentKind::Bond.name(), "bond");
        assert_eq!(InstrumentKind::Option.name(), "option");
    }
}
