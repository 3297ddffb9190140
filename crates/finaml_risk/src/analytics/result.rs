//! Simulation output.

use super::error::AnalyticsError;

/// Portfolio values, one per trial, in trial order.
///
/// Immutable once built: every statistic reads the same snapshot. Never empty
/// and never contains a non-finite value.
///
/// # Examples
///
/// ```
/// use finaml_risk::analytics::SimulationResult;
///
/// let result = SimulationResult::new(vec![3.0, 1.0, 2.0]).unwrap();
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.sorted(), vec![1.0, 2.0, 3.0]);
/// assert!(SimulationResult::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult(Vec<f64>);

impl SimulationResult {
    /// Wraps trial values.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::EmptyResult` for an empty vector
    /// - `AnalyticsError::NonFiniteValue` for the first NaN or infinite entry
    pub fn new(values: Vec<f64>) -> Result<Self, AnalyticsError> {
        if values.is_empty() {
            return Err(AnalyticsError::EmptyResult);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(AnalyticsError::NonFiniteValue { index, value });
        }
        Ok(Self(values))
    }

    /// Trial values in trial order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Number of trials.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending copy of the values.
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.0.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Unwraps the values.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl TryFrom<Vec<f64>> for SimulationResult {
    type Error = AnalyticsError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl AsRef<[f64]> for SimulationResult {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
