//! One-pass risk report.

use std::fmt;

use finaml_core::types::ValuationError;

use super::result::SimulationResult;
use super::statistics::{check_confidence, mean, shortfall_sorted, stddev, var_sorted};
use crate::config::{RiskParameters, SimulationConfig};
use crate::portfolio::Portfolio;
use crate::simulation::run_trials_parallel;

/// Summary statistics of one simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskReport {
    /// Number of trials.
    pub trials: usize,
    /// Mean portfolio value.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest trial value.
    pub min: f64,
    /// Largest trial value.
    pub max: f64,
    /// Confidence level used for VaR and ES.
    pub confidence_level: f64,
    /// Value-at-Risk.
    pub value_at_risk: f64,
    /// Expected Shortfall.
    pub expected_shortfall: f64,
}

impl RiskReport {
    /// Computes every statistic from one sorted snapshot of `result`.
    ///
    /// # Errors
    ///
    /// `ValuationError::InvalidParameter` unless `0 < confidence_level < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use finaml_risk::analytics::{RiskReport, SimulationResult};
    ///
    /// let result = SimulationResult::new((1..=100).map(f64::from).collect()).unwrap();
    /// let report = RiskReport::from_result(&result, 0.95).unwrap();
    ///
    /// assert_eq!(report.trials, 100);
    /// assert_eq!(report.min, 1.0);
    /// assert!(report.expected_shortfall <= report.value_at_risk);
    /// ```
    pub fn from_result(
        result: &SimulationResult,
        confidence_level: f64,
    ) -> Result<Self, ValuationError> {
        check_confidence(confidence_level)?;
        let sorted = result.sorted();
        let value_at_risk = var_sorted(&sorted, confidence_level);
        Ok(Self {
            trials: result.len(),
            mean: mean(result),
            std_dev: stddev(result),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            confidence_level,
            value_at_risk,
            expected_shortfall: shortfall_sorted(&sorted, value_at_risk),
        })
    }
}

impl fmt::Display for RiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trials:             {}", self.trials)?;
        writeln!(f, "Mean:               {:.2}", self.mean)?;
        writeln!(f, "Std deviation:      {:.2}", self.std_dev)?;
        writeln!(f, "Range:              [{:.2}, {:.2}]", self.min, self.max)?;
        writeln!(
            f,
            "VaR ({:.0}%):          {:.2}",
            self.confidence_level * 100.0,
            self.value_at_risk
        )?;
        write!(
            f,
            "ES ({:.0}%):           {:.2}",
            self.confidence_level * 100.0,
            self.expected_shortfall
        )
    }
}

/// Simulates the portfolio once and summarises the distribution.
///
/// VaR and ES come from the same simulated distribution; nothing is
/// re-sampled between them.
///
/// # Errors
///
/// See [`run_trials_parallel`].
pub fn assess_portfolio(
    portfolio: &Portfolio,
    params: &RiskParameters,
    config: &SimulationConfig,
) -> Result<RiskReport, ValuationError> {
    let result = run_trials_parallel(portfolio, params, config)?;
    RiskReport::from_result(&result, params.confidence_level())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{expected_shortfall, value_at_risk};
    use finaml_models::instruments::Instrument;

    #[test]
    fn test_report_matches_standalone_functions() {
        let result = SimulationResult::new(vec![9.0, 1.0, 5.0, 3.0, 7.0, 2.0]).unwrap();
        let report = RiskReport::from_result(&result, 0.8).unwrap();
        assert_eq!(report.value_at_risk, value_at_risk(&result, 0.8).unwrap());
        assert_eq!(
            report.expected_shortfall,
            expected_shortfall(&result, 0.8).unwrap()
        );
        assert_eq!(report.mean, 27.0 / 6.0);
        assert_eq!(report.min, 1.0);
        assert_eq!(report.max, 9.0);
    }

    #[test]
    fn test_report_rejects_bad_confidence() {
        let result = SimulationResult::new(vec![1.0]).unwrap();
        assert!(RiskReport::from_result(&result, 1.0).is_err());
    }

    #[test]
    fn test_assess_portfolio() {
        let portfolio = Portfolio::new()
            .with(Instrument::stock("AAPL", 150.0).unwrap())
            .with(Instrument::bond("XYZ", 1000.0, 0.05).unwrap());
        let params = RiskParameters::builder().trials(2_000).build().unwrap();
        let config = SimulationConfig::default();

        let report = assess_portfolio(&portfolio, &params, &config).unwrap();
        assert_eq!(report.trials, 2_000);
        assert!(report.min <= report.expected_shortfall);
        assert!(report.expected_shortfall <= report.value_at_risk);
        assert!(report.value_at_risk <= report.mean);
        assert!(report.std_dev > 0.0);

        let again = assess_portfolio(&portfolio, &params, &config).unwrap();
        assert_eq!(report, again);
    }

    #[test]
    fn test_display() {
        let result = SimulationResult::new(vec![100.0, 200.0]).unwrap();
        let text = RiskReport::from_result(&result, 0.95).unwrap().to_string();
        assert!(text.contains("Trials:             2"));
        assert!(text.contains("VaR (95%)"));
    }
}
