//! Simulation settings: seed, rate-sampler volatilities and batching.

use serde::Deserialize;
use tracing::warn;

use super::error::ConfigError;
use crate::parallel::{ParallelConfig, DEFAULT_BATCH_SIZE, DEFAULT_PARALLEL_THRESHOLD};

/// Default top-level seed.
pub const DEFAULT_SEED: u64 = 42;

/// Default log-volatility of the sampled gross growth rate.
pub const DEFAULT_GROWTH_VOLATILITY: f64 = 0.15;

/// Default log-volatility of the sampled gross discount rate.
pub const DEFAULT_DISCOUNT_VOLATILITY: f64 = 0.02;

/// Upper bound on either sampled-rate volatility.
///
/// Above this the log-normal gross-rate shock can underflow far enough that
/// a sampled rate rounds to -1.
pub const MAX_RATE_VOLATILITY: f64 = 3.0;

/// Monte Carlo simulation configuration.
///
/// # Examples
///
/// ```rust
/// use finaml_risk::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .seed(7)
///     .growth_volatility(0.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.seed(), 7);
/// assert_eq!(config.growth_volatility(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    seed: u64,
    growth_volatility: f64,
    discount_volatility: f64,
    batch_size: usize,
    parallel_threshold: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            growth_volatility: DEFAULT_GROWTH_VOLATILITY,
            discount_volatility: DEFAULT_DISCOUNT_VOLATILITY,
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SimulationConfig {
    /// Creates a builder seeded with the defaults.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the top-level seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the growth-rate volatility.
    #[inline]
    pub fn growth_volatility(&self) -> f64 {
        self.growth_volatility
    }

    /// Returns the discount-rate volatility.
    #[inline]
    pub fn discount_volatility(&self) -> f64 {
        self.discount_volatility
    }

    /// Returns the number of trials per batch.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the trial count from which batches run on the Rayon pool.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Batching settings for [`crate::parallel::process_in_batches`].
    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig::new(self.batch_size, self.parallel_threshold)
    }

    /// Validates every field and reports all failures together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("growth_volatility", self.growth_volatility),
            ("discount_volatility", self.discount_volatility),
        ] {
            if !(0.0..=MAX_RATE_VOLATILITY).contains(&value) {
                errors.push(format!(
                    "{name} {value} must be finite and in [0, {MAX_RATE_VOLATILITY}]"
                ));
            }
        }
        if self.batch_size == 0 {
            errors.push("batch_size must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Applies `FINAML_SEED` through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("FINAML_SEED") {
            match raw.trim().parse() {
                Ok(seed) => self.seed = seed,
                Err(_) => warn!(variable = "FINAML_SEED", value = %raw, "ignoring unparseable override"),
            }
        }
        self
    }

    /// Applies overrides from the process environment.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Sets the top-level seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets the growth-rate volatility.
    #[inline]
    pub fn growth_volatility(mut self, volatility: f64) -> Self {
        self.config.growth_volatility = volatility;
        self
    }

    /// Sets the discount-rate volatility.
    #[inline]
    pub fn discount_volatility(mut self, volatility: f64) -> Self {
        self.config.discount_volatility = volatility;
        self
    }

    /// Sets the number of trials per batch.
    #[inline]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Sets the trial count from which batches run in parallel.
    #[inline]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.seed(), DEFAULT_SEED);
        assert_eq!(config.batch_size(), DEFAULT_BATCH_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_volatility_rejected() {
        assert!(SimulationConfig::builder()
            .growth_volatility(-0.1)
            .build()
            .is_err());
        assert!(SimulationConfig::builder()
            .discount_volatility(f64::INFINITY)
            .build()
            .is_err());
    }

    #[test]
    fn test_volatility_above_cap_rejected() {
        assert!(SimulationConfig::builder()
            .growth_volatility(MAX_RATE_VOLATILITY)
            .build()
            .is_ok());
        match SimulationConfig::builder()
            .growth_volatility(3.5)
            .discount_volatility(10.0)
            .build()
        {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(matches!(
            SimulationConfig::builder().batch_size(0).build(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_parallel_config() {
        let config = SimulationConfig::builder()
            .batch_size(250)
            .parallel_threshold(10)
            .build()
            .unwrap();
        assert_eq!(config.parallel_config(), ParallelConfig::new(250, 10));
    }

    #[test]
    fn test_seed_override() {
        let config = SimulationConfig::default().with_overrides(|name| {
            (name == "FINAML_SEED").then(|| "1234".to_string())
        });
        assert_eq!(config.seed(), 1234);
    }
}
