//! Rate samplers feeding the trial loop.

use rand_distr::LogNormal;

use super::error::SimulationError;
use crate::config::{RiskParameters, SimulationConfig, MAX_RATE_VOLATILITY};
use crate::rng::SimulationRng;

/// Discount and growth rate for one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSample {
    /// Discount rate applied to present values.
    pub discount_rate: f64,
    /// Growth rate applied to future values.
    pub growth_rate: f64,
}

impl RateSample {
    /// Creates a sample.
    #[inline]
    pub fn new(discount_rate: f64, growth_rate: f64) -> Self {
        Self {
            discount_rate,
            growth_rate,
        }
    }
}

impl From<(f64, f64)> for RateSample {
    /// `(discount_rate, growth_rate)`
    fn from((discount_rate, growth_rate): (f64, f64)) -> Self {
        Self::new(discount_rate, growth_rate)
    }
}

/// Source of per-trial rates.
///
/// Closures returning `(discount_rate, growth_rate)` are samplers, so tests
/// can inject exact sequences:
///
/// ```
/// use finaml_risk::simulation::{RateSampler, RateSample};
///
/// let mut step = 0.0;
/// let mut sampler = move || {
///     step += 0.01;
///     (0.10, step)
/// };
/// assert_eq!(sampler.sample(), RateSample::new(0.10, 0.01));
/// assert_eq!(sampler.sample(), RateSample::new(0.10, 0.02));
/// ```
pub trait RateSampler {
    /// Draws the rates for the next trial.
    fn sample(&mut self) -> RateSample;
}

impl<F> RateSampler for F
where
    F: FnMut() -> (f64, f64),
{
    #[inline]
    fn sample(&mut self) -> RateSample {
        self().into()
    }
}

/// Sampler that returns the same rates every trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRates(pub RateSample);

impl RateSampler for FixedRates {
    #[inline]
    fn sample(&mut self) -> RateSample {
        self.0
    }
}

/// Log-normal rate sampler.
///
/// Each trial draws the discount rate, then the growth rate. A rate with
/// centre `mean` and volatility `sigma` is `(1 + mean) * G - 1` where
/// `ln G ~ N(-sigma^2 / 2, sigma^2)`, so `E[rate] = mean` and every draw stays
/// strictly above -1. A zero volatility returns `mean` exactly.
#[derive(Debug, Clone)]
pub struct StochasticRates {
    rng: SimulationRng,
    discount: GrossRate,
    growth: GrossRate,
}

impl StochasticRates {
    /// Creates a sampler driven by `rng`.
    ///
    /// # Errors
    ///
    /// - `SimulationError::InvalidDiscountRate` / `InvalidGrowthRate` if a
    ///   mean is not finite or not above -1
    /// - `SimulationError::InvalidVolatility` if either volatility is
    ///   negative, not finite, or above [`MAX_RATE_VOLATILITY`]
    pub fn new(
        discount_mean: f64,
        discount_volatility: f64,
        growth_mean: f64,
        growth_volatility: f64,
        rng: SimulationRng,
    ) -> Result<Self, SimulationError> {
        if !discount_mean.is_finite() || discount_mean <= -1.0 {
            return Err(SimulationError::InvalidDiscountRate {
                rate: discount_mean,
            });
        }
        if !growth_mean.is_finite() || growth_mean <= -1.0 {
            return Err(SimulationError::InvalidGrowthRate { rate: growth_mean });
        }
        let discount = GrossRate::new("discount", discount_mean, discount_volatility)?;
        let growth = GrossRate::new("growth", growth_mean, growth_volatility)?;
        Ok(Self {
            rng,
            discount,
            growth,
        })
    }

    /// Sampler for the top-level seed in `config`.
    pub fn from_config(
        params: &RiskParameters,
        config: &SimulationConfig,
    ) -> Result<Self, SimulationError> {
        Self::with_rng(params, config, SimulationRng::from_seed(config.seed()))
    }

    /// Sampler for stream `stream` of the seed in `config`.
    pub fn for_stream(
        params: &RiskParameters,
        config: &SimulationConfig,
        stream: u64,
    ) -> Result<Self, SimulationError> {
        Self::with_rng(params, config, SimulationRng::stream(config.seed(), stream))
    }

    fn with_rng(
        params: &RiskParameters,
        config: &SimulationConfig,
        rng: SimulationRng,
    ) -> Result<Self, SimulationError> {
        Self::new(
            params.discount_rate(),
            config.discount_volatility(),
            params.growth_rate(),
            config.growth_volatility(),
            rng,
        )
    }

    /// Seed of the underlying generator.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

#[derive(Debug, Clone)]
struct GrossRate {
    mean: f64,
    // None when the volatility is zero
    shock: Option<LogNormal<f64>>,
}

impl GrossRate {
    fn new(name: &'static str, mean: f64, volatility: f64) -> Result<Self, SimulationError> {
        let invalid = SimulationError::InvalidVolatility {
            name,
            value: volatility,
        };
        if !(0.0..=MAX_RATE_VOLATILITY).contains(&volatility) {
            return Err(invalid);
        }
        let shock = if volatility == 0.0 {
            None
        } else {
            let mu = -0.5 * volatility * volatility;
            Some(LogNormal::new(mu, volatility).map_err(|_| invalid)?)
        };
        Ok(Self { mean, shock })
    }

    #[inline]
    fn draw(&self, rng: &mut SimulationRng) -> f64 {
        match &self.shock {
            None => self.mean,
            Some(shock) => (1.0 + self.mean) * rng.sample(shock) - 1.0,
        }
    }
}

impl RateSampler for StochasticRates {
    #[inline]
    fn sample(&mut self) -> RateSample {
        let discount_rate = self.discount.draw(&mut self.rng);
        let growth_rate = self.growth.draw(&mut self.rng);
        RateSample {
            discount_rate,
            growth_rate,
        }
    }
}
