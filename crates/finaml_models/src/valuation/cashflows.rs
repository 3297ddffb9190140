//! Discounted cash flows.
//!
//! Cash flow `i` is discounted by `(1 + r)^i`; the first flow is undiscounted.
//! Sums are accumulated strictly in index order so results are reproducible
//! bit for bit.

/// Net present value of `cash_flows` at `discount_rate`.
///
/// # Examples
/// ```
/// use finaml_models::valuation::npv;
///
/// let value = npv(&[100.0, 100.0, 100.0], 0.1);
/// assert!((value - 273.5537).abs() < 1e-4);
/// ```
pub fn npv(cash_flows: &[f64], discount_rate: f64) -> f64 {
    let growth = 1.0 + discount_rate;
    let mut factor = 1.0;
    let mut total = 0.0;
    for (i, cash_flow) in cash_flows.iter().enumerate() {
        if i > 0 {
            factor *= growth;
        }
        total += cash_flow / factor;
    }
    total
}

/// NPV at each rate, returned as `(rate, npv)` pairs in input order.
///
/// # Examples
/// ```
/// use finaml_models::valuation::sensitivity_analysis;
///
/// let sweep = sensitivity_analysis(&[-100.0, 60.0, 60.0], &[0.0, 0.1]);
/// assert_eq!(sweep.len(), 2);
/// assert_eq!(sweep[0], (0.0, 20.0));
/// ```
pub fn sensitivity_analysis(cash_flows: &[f64], rates: &[f64]) -> Vec<(f64, f64)> {
    rates
        .iter()
        .map(|&rate| (rate, npv(cash_flows, rate)))
        .collect()
}

/// Owned, ordered sequence of periodic cash flows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CashFlowSeries(Vec<f64>);

impl CashFlowSeries {
    /// Wraps a sequence of cash flows.
    pub fn new(cash_flows: Vec<f64>) -> Self {
        Self(cash_flows)
    }

    /// Cash flows in period order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no cash flows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// See [`npv`].
    #[inline]
    pub fn npv(&self, discount_rate: f64) -> f64 {
        npv(&self.0, discount_rate)
    }

    /// See [`sensitivity_analysis`].
    #[inline]
    pub fn sensitivity(&self, rates: &[f64]) -> Vec<(f64, f64)> {
        sensitivity_analysis(&self.0, rates)
    }
}

impl From<Vec<f64>> for CashFlowSeries {
    fn from(cash_flows: Vec<f64>) -> Self {
        Self(cash_flows)
    }
}

impl FromIterator<f64> for CashFlowSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
