//! Trial evaluation and trial-driving loops.

use finaml_core::types::ValuationError;
use finaml_models::valuation::{future_value, present_value};
use tracing::{debug, info};

use super::error::SimulationError;
use super::sampler::{RateSampler, StochasticRates};
use crate::analytics::SimulationResult;
use crate::config::{RiskParameters, SimulationConfig};
use crate::parallel::process_in_batches;
use crate::portfolio::Portfolio;

#[inline]
fn check_rate(rate: f64) -> bool {
    rate.is_finite() && rate > -1.0
}

fn validate_trial_inputs(
    discount_rate: f64,
    growth_rate: f64,
    horizon_periods: f64,
) -> Result<(), SimulationError> {
    if !check_rate(discount_rate) {
        return Err(SimulationError::InvalidDiscountRate {
            rate: discount_rate,
        });
    }
    if !check_rate(growth_rate) {
        return Err(SimulationError::InvalidGrowthRate { rate: growth_rate });
    }
    if !horizon_periods.is_finite() || horizon_periods <= 0.0 {
        return Err(SimulationError::InvalidHorizon {
            periods: horizon_periods,
        });
    }
    Ok(())
}

/// Combined value of the portfolio for one trial.
///
/// Accumulates `pv / (1 + discount_rate) + fv(horizon, growth_rate)` over
/// the instruments in portfolio order. Deterministic: all randomness lives in
/// the caller's choice of rates.
///
/// # Errors
///
/// `ValuationError::InvalidParameter` if a rate is not finite or not greater
/// than -1, or if the horizon is not finite and positive. Nothing is
/// evaluated when any input is rejected.
///
/// # Examples
///
/// ```
/// use finaml_risk::portfolio::Portfolio;
/// use finaml_risk::simulation::simulate_once;
/// use finaml_models::instruments::Instrument;
///
/// let portfolio = Portfolio::new().with(Instrument::stock("AAPL", 100.0).unwrap());
/// let value = simulate_once(&portfolio, 0.0, 0.0, 5.0).unwrap();
/// assert_eq!(value, 200.0);
/// ```
pub fn simulate_once(
    portfolio: &Portfolio,
    discount_rate: f64,
    growth_rate: f64,
    horizon_periods: f64,
) -> Result<f64, ValuationError> {
    validate_trial_inputs(discount_rate, growth_rate, horizon_periods)?;
    Ok(evaluate(portfolio, discount_rate, growth_rate, horizon_periods))
}

#[inline]
fn evaluate(portfolio: &Portfolio, discount_rate: f64, growth_rate: f64, horizon: f64) -> f64 {
    let discount = 1.0 + discount_rate;
    portfolio.iter().fold(0.0, |acc, instrument| {
        acc + present_value(instrument) / discount + future_value(instrument, horizon, growth_rate)
    })
}

fn run_batch<S: RateSampler>(
    portfolio: &Portfolio,
    sampler: &mut S,
    trials: usize,
    horizon_periods: f64,
    out: &mut Vec<f64>,
) -> Result<(), ValuationError> {
    for _ in 0..trials {
        let rates = sampler.sample();
        out.push(simulate_once(
            portfolio,
            rates.discount_rate,
            rates.growth_rate,
            horizon_periods,
        )?);
    }
    Ok(())
}

/// Runs `trials` trials with rates drawn from `sampler`, at a horizon of
/// `horizon_periods`.
///
/// Results are in trial order. The first invalid sampled rate fails the whole
/// run.
///
/// # Errors
///
/// `ValuationError::InvalidParameter` for zero trials or any rejected trial.
///
/// # Examples
///
/// ```
/// use finaml_risk::portfolio::Portfolio;
/// use finaml_risk::simulation::run_trials;
/// use finaml_models::instruments::Instrument;
///
/// let portfolio = Portfolio::new().with(Instrument::stock("AAPL", 100.0).unwrap());
/// let mut growth = 0.0;
/// let mut sampler = || {
///     growth += 0.1;
///     (0.0, growth)
/// };
///
/// let result = run_trials(&portfolio, &mut sampler, 3, 1.0).unwrap();
/// assert_eq!(result.len(), 3);
/// assert!(result.values()[0] < result.values()[2]);
/// ```
pub fn run_trials<S: RateSampler>(
    portfolio: &Portfolio,
    sampler: &mut S,
    trials: usize,
    horizon_periods: f64,
) -> Result<SimulationResult, ValuationError> {
    if trials == 0 {
        return Err(SimulationError::ZeroTrials.into());
    }
    let mut values = Vec::with_capacity(trials);
    run_batch(portfolio, sampler, trials, horizon_periods, &mut values)?;
    debug!(trials, instruments = portfolio.len(), "trials complete");
    Ok(SimulationResult::new(values)?)
}

/// Runs `params.trials()` trials with log-normal rates, split into batches that
/// may execute on the Rayon pool.
///
/// Batch `b` covers trials `b * batch_size ..` and draws from
/// `StochasticRates::for_stream(params, config, b)`. The output therefore
/// depends only on the parameters, the seed and the batch size; thread count
/// and scheduling never change it.
///
/// # Errors
///
/// `ValuationError::InvalidParameter` for invalid parameters, invalid sampler
/// volatilities or any rejected trial; `ValuationError::Configuration` if
/// `params` or `config` fail validation.
pub fn run_trials_parallel(
    portfolio: &Portfolio,
    params: &RiskParameters,
    config: &SimulationConfig,
) -> Result<SimulationResult, ValuationError> {
    params.validate()?;
    config.validate()?;

    let trials = params.trials();
    let parallel = config.parallel_config();
    info!(
        trials,
        seed = config.seed(),
        batch_size = parallel.batch_size,
        parallel = parallel.should_parallelize(trials),
        "starting simulation"
    );

    let batches = process_in_batches(trials, &parallel, |index, range| {
        let mut sampler = StochasticRates::for_stream(params, config, index as u64)?;
        let mut values = Vec::with_capacity(range.len());
        run_batch(
            portfolio,
            &mut sampler,
            range.len(),
            params.horizon_periods(),
            &mut values,
        )?;
        Ok::<_, ValuationError>(values)
    });

    let mut values = Vec::with_capacity(trials);
    for batch in batches {
        values.extend(batch?);
    }

    let result = SimulationResult::new(values)?;
    info!(trials = result.len(), "simulation complete");
    Ok(result)
}
