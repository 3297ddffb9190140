//! Vanilla option definitions.
//!
//! Options carry their contract terms only. The valuation engine values them
//! at zero; prices come from `analytical::black_scholes_price`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use finaml_core::traits::Valuable;
use finaml_core::types::Expiration;

use super::error::InstrumentError;

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionKind {
    /// Payoff at expiry for a given spot: `max(S-K, 0)` or `max(K-S, 0)`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns true for `Call`.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

impl FromStr for OptionKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(InstrumentError::UnknownOptionKind(s.to_string())),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

/// Vanilla equity option.
///
/// # Examples
/// ```
/// use finaml_models::instruments::{EquityOption, OptionKind};
/// use chrono::NaiveDate;
///
/// let call = EquityOption::new(OptionKind::Call, "AAPL", 160.0, "2023-12-31", 0.2).unwrap();
/// assert_eq!(call.strike(), 160.0);
///
/// let valuation = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let tau = call.time_to_maturity(valuation).unwrap();
/// assert!((tau - 364.0 / 365.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EquityOption {
    kind: OptionKind,
    underlying: String,
    strike: f64,
    expiration: Expiration,
    volatility: f64,
}

impl EquityOption {
    /// Creates an option.
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `underlying` - Ticker of the underlying
    /// * `strike` - Strike price (finite, non-negative)
    /// * `expiration` - Expiration date or opaque label
    /// * `volatility` - Annualised volatility (finite, non-negative)
    ///
    /// # Errors
    /// - `InstrumentError::NegativeStrike`
    /// - `InstrumentError::NegativeVolatility`
    pub fn new(
        kind: OptionKind,
        underlying: impl Into<String>,
        strike: f64,
        expiration: impl Into<Expiration>,
        volatility: f64,
    ) -> Result<Self, InstrumentError> {
        if !strike.is_finite() || strike < 0.0 {
            return Err(InstrumentError::NegativeStrike { strike });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(InstrumentError::NegativeVolatility { volatility });
        }
        Ok(Self {
            kind,
            underlying: underlying.into(),
            strike,
            expiration: expiration.into(),
            volatility,
        })
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the underlying ticker.
    #[inline]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the expiration.
    #[inline]
    pub fn expiration(&self) -> &Expiration {
        &self.expiration
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// ACT/365 time to maturity from `valuation_date`, `None` for opaque expirations.
    pub fn time_to_maturity(&self, valuation_date: NaiveDate) -> Option<f64> {
        self.expiration.year_fraction_from(valuation_date)
    }

    /// Intrinsic value at the given spot.
    #[inline]
    pub fn intrinsic_value(&self, spot: f64) -> f64 {
        self.kind.intrinsic(spot, self.strike)
    }
}

// Options are priced by the analytical module, never by the valuation engine.
impl Valuable for EquityOption {
    #[inline]
    fn present_value(&self) -> f64 {
        0.0
    }

    #[inline]
    fn future_value(&self, _periods: f64, _growth_rate: f64) -> f64 {
        0.0
    }
}

impl fmt::Display for EquityOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Option(kind={}, underlying={}, strike={}, expiration={}, volatility={})",
            self.kind, self.underlying, self.strike, self.expiration, self.volatility
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call() -> EquityOption {
        EquityOption::new(OptionKind::Call, "AAPL", 160.0, "2023-12-31", 0.2).unwrap()
    }

    #[test]
    fn test_accessors() {
        let opt = call();
        assert_eq!(opt.kind(), OptionKind::Call);
        assert_eq!(opt.underlying(), "AAPL");
        assert_eq!(opt.strike(), 160.0);
        assert_eq!(opt.volatility(), 0.2);
        assert!(opt.expiration().date().is_some());
    }

    #[test]
    fn test_negative_strike_rejected() {
        let result = EquityOption::new(OptionKind::Put, "AAPL", -1.0, "2023-12-31", 0.2);
        assert!(matches!(result, Err(InstrumentError::NegativeStrike { .. })));
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let result = EquityOption::new(OptionKind::Put, "AAPL", 100.0, "2023-12-31", -0.2);
        assert!(matches!(
            result,
            Err(InstrumentError::NegativeVolatility { .. })
        ));
    }

    #[test]
    fn test_zero_volatility_allowed() {
        assert!(EquityOption::new(OptionKind::Call, "AAPL", 100.0, "2023-12-31", 0.0).is_ok());
    }

    #[test]
    fn test_valuation_placeholder_is_zero() {
        let opt = call();
        assert_eq!(opt.present_value(), 0.0);
        assert_eq!(opt.future_value(5.0, 0.05), 0.0);
    }

    #[test]
    fn test_intrinsic_value() {
        let opt = call();
        assert_eq!(opt.intrinsic_value(170.0), 10.0);
        assert_eq!(opt.intrinsic_value(150.0), 0.0);
        assert_eq!(OptionKind::Put.intrinsic(150.0, 160.0), 10.0);
    }

    #[test]
    fn test_time_to_maturity_opaque() {
        let opt = EquityOption::new(OptionKind::Call, "AAPL", 160.0, "Dec-23", 0.2).unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert!(opt.time_to_maturity(today).is_none());
    }

    #[test]
    fn test_option_kind_from_str() {
        assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("PUT".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert!("straddle".parse::<OptionKind>().is_err());
    }

    #[test]
    fn test_display() {
        let opt = call();
        assert_eq!(
            opt.to_string(),
            "Option(kind=Call, underlying=AAPL, strike=160, expiration=2023-12-31, volatility=0.2)"
        );
    }
}
