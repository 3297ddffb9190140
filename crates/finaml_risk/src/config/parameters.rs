//! Risk parameters: rates, confidence level, trial count and horizon.

use serde::Deserialize;
use tracing::warn;

use super::error::ConfigError;

/// Default discount rate.
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.10;

/// Default confidence level for VaR and ES.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default number of Monte Carlo trials.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Default horizon in periods.
pub const DEFAULT_HORIZON_PERIODS: f64 = 5.0;

/// Caller-supplied risk parameters.
///
/// `discount_rate` and `growth_rate` are the centres of the sampled rate
/// distributions; with zero sampler volatility they are used verbatim.
///
/// # Examples
///
/// ```rust
/// use finaml_risk::config::RiskParameters;
///
/// let params = RiskParameters::builder()
///     .trials(5_000)
///     .confidence_level(0.99)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.trials(), 5_000);
/// assert_eq!(params.discount_rate(), 0.10);
/// assert_eq!(params.horizon_periods(), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskParameters {
    discount_rate: f64,
    growth_rate: f64,
    confidence_level: f64,
    trials: usize,
    horizon_periods: f64,
}

impl Default for RiskParameters {
    fn default() -> Self {
        Self {
            discount_rate: DEFAULT_DISCOUNT_RATE,
            growth_rate: finaml_models::valuation::DEFAULT_GROWTH_RATE,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            trials: DEFAULT_TRIALS,
            horizon_periods: DEFAULT_HORIZON_PERIODS,
        }
    }
}

impl RiskParameters {
    /// Creates a builder seeded with the defaults.
    #[inline]
    pub fn builder() -> RiskParametersBuilder {
        RiskParametersBuilder::default()
    }

    /// Returns the discount rate.
    #[inline]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Returns the growth rate.
    #[inline]
    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    /// Returns the confidence level.
    #[inline]
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Returns the number of trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the horizon in periods.
    #[inline]
    pub fn horizon_periods(&self) -> f64 {
        self.horizon_periods
    }

    /// Validates every field and reports all failures together.
    ///
    /// # Errors
    ///
    /// `ConfigError::Validation` if:
    /// - either rate is not finite or not greater than -1
    /// - `confidence_level` is outside the open interval (0, 1)
    /// - `trials` is zero
    /// - `horizon_periods` is not finite or not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !self.discount_rate.is_finite() || self.discount_rate <= -1.0 {
            errors.push(format!(
                "discount_rate {} must be finite and > -1",
                self.discount_rate
            ));
        }
        if !self.growth_rate.is_finite() || self.growth_rate <= -1.0 {
            errors.push(format!(
                "growth_rate {} must be finite and > -1",
                self.growth_rate
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            errors.push(format!(
                "confidence_level {} must lie in (0, 1)",
                self.confidence_level
            ));
        }
        if self.trials == 0 {
            errors.push("trials must be greater than 0".to_string());
        }
        if !self.horizon_periods.is_finite() || self.horizon_periods <= 0.0 {
            errors.push(format!(
                "horizon_periods {} must be finite and > 0",
                self.horizon_periods
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Applies `FINAML_TRIALS` and `FINAML_CONFIDENCE` through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("FINAML_TRIALS") {
            match raw.trim().parse() {
                Ok(trials) => self.trials = trials,
                Err(_) => warn!(variable = "FINAML_TRIALS", value = %raw, "ignoring unparseable override"),
            }
        }
        if let Some(raw) = lookup("FINAML_CONFIDENCE") {
            match raw.trim().parse() {
                Ok(level) => self.confidence_level = level,
                Err(_) => warn!(variable = "FINAML_CONFIDENCE", value = %raw, "ignoring unparseable override"),
            }
        }
        self
    }

    /// Applies overrides from the process environment.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }
}

/// Builder for [`RiskParameters`].
///
/// Unset fields keep their defaults; [`build`](Self::build) validates.
#[derive(Clone, Debug, Default)]
pub struct RiskParametersBuilder {
    params: RiskParameters,
}

impl RiskParametersBuilder {
    /// Sets the discount rate.
    #[inline]
    pub fn discount_rate(mut self, rate: f64) -> Self {
        self.params.discount_rate = rate;
        self
    }

    /// Sets the growth rate.
    #[inline]
    pub fn growth_rate(mut self, rate: f64) -> Self {
        self.params.growth_rate = rate;
        self
    }

    /// Sets the confidence level, in (0, 1).
    #[inline]
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.params.confidence_level = level;
        self
    }

    /// Sets the number of trials.
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.params.trials = trials;
        self
    }

    /// Sets the horizon in periods.
    #[inline]
    pub fn horizon_periods(mut self, periods: f64) -> Self {
        self.params.horizon_periods = periods;
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    ///
    /// See [`RiskParameters::validate`].
    pub fn build(self) -> Result<RiskParameters, ConfigError> {
        self.params.validate()?;
        Ok(self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = RiskParameters::default();
        assert_eq!(params.discount_rate(), 0.10);
        assert_eq!(params.growth_rate(), 0.05);
        assert_eq!(params.confidence_level(), 0.95);
        assert_eq!(params.trials(), 10_000);
        assert_eq!(params.horizon_periods(), 5.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let params = RiskParameters::builder()
            .discount_rate(0.08)
            .growth_rate(0.02)
            .horizon_periods(3.0)
            .build()
            .unwrap();
        assert_eq!(params.discount_rate(), 0.08);
        assert_eq!(params.growth_rate(), 0.02);
        assert_eq!(params.horizon_periods(), 3.0);
    }

    #[test]
    fn test_confidence_bounds_are_exclusive() {
        for level in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(
                RiskParameters::builder().confidence_level(level).build().is_err(),
                "{level}"
            );
        }
    }

    #[test]
    fn test_collects_all_failures() {
        let result = RiskParameters::builder()
            .trials(0)
            .discount_rate(-1.0)
            .horizon_periods(0.0)
            .build();
        match result {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides_from_lookup() {
        let params = RiskParameters::default().with_overrides(|name| match name {
            "FINAML_TRIALS" => Some("250".to_string()),
            "FINAML_CONFIDENCE" => Some(" 0.99 ".to_string()),
            _ => None,
        });
        assert_eq!(params.trials(), 250);
        assert_eq!(params.confidence_level(), 0.99);
    }

    #[test]
    fn test_unparseable_override_ignored() {
        let params = RiskParameters::default().with_overrides(|name| match name {
            "FINAML_TRIALS" => Some("lots".to_string()),
            _ => None,
        });
        assert_eq!(params.trials(), DEFAULT_TRIALS);
    }

    #[test]
    fn test_deserialize_partial_table() {
        let params: RiskParameters = toml::from_str("trials = 500\nhorizon_periods = 2.5").unwrap();
        assert_eq!(params.trials(), 500);
        assert_eq!(params.horizon_periods(), 2.5);
        assert_eq!(params.discount_rate(), DEFAULT_DISCOUNT_RATE);
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        assert!(toml::from_str::<RiskParameters>("trails = 500").is_err());
    }
}
