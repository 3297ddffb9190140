//! Ordered instrument collections.
//!
//! Valuation sums are commutative, but the order is preserved so that
//! floating-point accumulation (and therefore every seeded simulation) is
//! reproducible.

use finaml_models::instruments::Instrument;
use finaml_models::valuation::total_present_value;

/// Ordered collection of instruments.
///
/// # Examples
///
/// ```
/// use finaml_risk::portfolio::Portfolio;
/// use finaml_models::instruments::Instrument;
///
/// let portfolio = Portfolio::new()
///     .with(Instrument::stock("AAPL", 150.0).unwrap())
///     .with(Instrument::bond("XYZ", 1000.0, 0.05).unwrap());
///
/// assert_eq!(portfolio.len(), 2);
/// assert!((portfolio.present_value() - 1102.38).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    instruments: Vec<Instrument>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an instrument, builder style.
    pub fn with(mut self, instrument: Instrument) -> Self {
        self.instruments.push(instrument);
        self
    }

    /// Appends an instrument.
    pub fn push(&mut self, instrument: Instrument) {
        self.instruments.push(instrument);
    }

    /// Instruments in insertion order.
    #[inline]
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instrument> {
        self.instruments.iter()
    }

    /// Number of instruments.
    #[inline]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// True when the portfolio holds no instruments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// See [`portfolio_present_value`].
    #[inline]
    pub fn present_value(&self) -> f64 {
        portfolio_present_value(self)
    }
}

/// Sum of instrument present values in portfolio order.
///
/// Options contribute zero.
pub fn portfolio_present_value(portfolio: &Portfolio) -> f64 {
    total_present_value(portfolio.instruments())
}

impl From<Vec<Instrument>> for Portfolio {
    fn from(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }
}

impl FromIterator<Instrument> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Instrument>>(iter: I) -> Self {
        Self {
            instruments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Instrument;
    type IntoIter = std::slice::Iter<'a, Instrument>;

    fn into_iter(self) -> Self::IntoIter {
        self.instruments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use finaml_models::instruments::OptionKind;

    fn sample() -> Portfolio {
        vec![
            Instrument::stock("AAPL", 150.0).unwrap(),
            Instrument::bond("XYZ", 1000.0, 0.05).unwrap(),
            Instrument::option(OptionKind::Call, "AAPL", 160.0, "2023-12-31", 0.2).unwrap(),
        ]
        .into()
    }

    #[test]
    fn test_present_value_ignores_options() {
        assert_relative_eq!(
            sample().present_value(),
            150.0 + 1000.0 / 1.05,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_order_preserved() {
        let portfolio = sample();
        let tickers: Vec<&str> = portfolio.iter().map(Instrument::ticker).collect();
        assert_eq!(tickers, vec!["AAPL", "XYZ", "AAPL"]);
    }

    #[test]
    fn test_empty() {
        let p = Portfolio::new();
        assert!(p.is_empty());
        assert_eq!(p.present_value(), 0.0);
    }

    #[test]
    fn test_push_and_collect() {
        let mut p: Portfolio = std::iter::once(Instrument::stock("A", 1.0).unwrap()).collect();
        p.push(Instrument::stock("B", 2.0).unwrap());
        assert_eq!(p.len(), 2);
        assert_eq!((&p).into_iter().count(), 2);
    }
}
