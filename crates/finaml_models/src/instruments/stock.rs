//! Equity instruments quoted at a single price.

use std::fmt;

use finaml_core::traits::Valuable;

use super::error::InstrumentError;

/// Listed stock.
///
/// # Examples
/// ```
/// use finaml_models::instruments::Stock;
/// use finaml_core::traits::Valuable;
///
/// let stock = Stock::new("AAPL", 150.0).unwrap();
/// assert_eq!(stock.present_value(), 150.0);
/// assert!(Stock::new("AAPL", -1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    ticker: String,
    price: f64,
}

impl Stock {
    /// Creates a stock.
    ///
    /// # Errors
    /// - `InstrumentError::NegativePrice` if `price` is negative or not finite
    pub fn new(ticker: impl Into<String>, price: f64) -> Result<Self, InstrumentError> {
        if !price.is_finite() || price < 0.0 {
            return Err(InstrumentError::NegativePrice { price });
        }
        Ok(Self {
            ticker: ticker.into(),
            price,
        })
    }

    /// Returns the ticker symbol.
    #[inline]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the quoted price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Valuable for Stock {
    #[inline]
    fn present_value(&self) -> f64 {
        self.price
    }

    #[inline]
    fn future_value(&self, periods: f64, growth_rate: f64) -> f64 {
        self.price * (1.0 + growth_rate).powf(periods)
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stock(ticker={}, price={})", self.ticker, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_valid() {
        let stock = Stock::new("AAPL", 150.0).unwrap();
        assert_eq!(stock.ticker(), "AAPL");
        assert_eq!(stock.price(), 150.0);
    }

    #[test]
    fn test_zero_price_allowed() {
        assert!(Stock::new("DEAD", 0.0).is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        match Stock::new("AAPL", -0.01) {
            Err(InstrumentError::NegativePrice { price }) => assert_eq!(price, -0.01),
            other => panic!("Expected NegativePrice, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_price_rejected() {
        assert!(Stock::new("AAPL", f64::NAN).is_err());
        assert!(Stock::new("AAPL", f64::INFINITY).is_err());
    }

    #[test]
    fn test_future_value_compounds() {
        let stock = Stock::new("AAPL", 150.0).unwrap();
        // 150 * 1.05^5
        assert_relative_eq!(stock.future_value(5.0, 0.05), 191.442234375, epsilon = 1e-9);
    }

    #[test]
    fn test_future_value_zero_periods_is_price() {
        let stock = Stock::new("MSFT", 320.0).unwrap();
        assert_eq!(stock.future_value(0.0, 0.25), 320.0);
    }

    #[test]
    fn test_display() {
        let stock = Stock::new("AAPL", 150.0).unwrap();
        assert_eq!(stock.to_string(), "Stock(ticker=AAPL, price=150)");
    }
}
