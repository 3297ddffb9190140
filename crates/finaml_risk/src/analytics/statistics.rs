//! Distribution statistics over a [`SimulationResult`].
//!
//! Quantiles use linear interpolation between closest ranks: for `n` sorted
//! values and probability `p`, `h = (n - 1) * p`, `f = h - floor(h)` and the
//! quantile is `(1 - f) * x[floor(h)] + f * x[floor(h) + 1]`, clamped to the
//! two neighbours. The blended form stays finite for any finite inputs,
//! including neighbours of opposite sign near `f64::MAX`.
//!
//! VaR is the `(1 - confidence_level)` quantile of portfolio value. ES is the
//! mean of the values strictly below that VaR, computed from the same sorted
//! snapshot; when no value lies below VaR, ES equals VaR.

use finaml_core::types::ValuationError;

use super::error::AnalyticsError;
use super::result::SimulationResult;

/// Arithmetic mean, accumulated in trial order.
pub fn mean(result: &SimulationResult) -> f64 {
    mean_of(result.values())
}

/// Population standard deviation (divides by `n`).
///
/// # Examples
///
/// ```
/// use finaml_risk::analytics::{stddev, SimulationResult};
///
/// let result = SimulationResult::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(stddev(&result), 2.0);
/// ```
pub fn stddev(result: &SimulationResult) -> f64 {
    let values = result.values();
    let direct = population_stddev(values.iter().copied());
    if direct.is_finite() {
        return direct;
    }
    // Squared deviations overflowed; rescale into [-1, 1] first.
    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    scale * population_stddev(values.iter().map(|v| v / scale))
}

fn population_stddev<I>(values: I) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let n = values.clone().count() as f64;
    let m = values.clone().sum::<f64>() / n;
    let variance = values.map(|v| (v - m) * (v - m)).sum::<f64>() / n;
    variance.sqrt()
}

/// Smallest trial value.
pub fn min(result: &SimulationResult) -> f64 {
    result.values().iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest trial value.
pub fn max(result: &SimulationResult) -> f64 {
    result
        .values()
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
}

/// `p`-quantile of the trial values, `p` in [0, 1].
///
/// # Errors
///
/// `ValuationError::InvalidParameter` if `p` is outside [0, 1] or NaN.
pub fn percentile(result: &SimulationResult, p: f64) -> Result<f64, ValuationError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(AnalyticsError::InvalidQuantile { quantile: p }.into());
    }
    Ok(quantile_sorted(&result.sorted(), p))
}

/// Value-at-Risk: the `(1 - confidence_level)` quantile of portfolio value.
///
/// # Errors
///
/// `ValuationError::InvalidParameter` unless `0 < confidence_level < 1`.
///
/// # Examples
///
/// ```
/// use finaml_risk::analytics::{value_at_risk, SimulationResult};
///
/// let values: Vec<f64> = (1..=101).map(f64::from).collect();
/// let result = SimulationResult::new(values).unwrap();
/// assert!((value_at_risk(&result, 0.95).unwrap() - 6.0).abs() < 1e-12);
/// ```
pub fn value_at_risk(result: &SimulationResult, confidence_level: f64) -> Result<f64, ValuationError> {
    check_confidence(confidence_level)?;
    Ok(var_sorted(&result.sorted(), confidence_level))
}

/// Expected Shortfall: mean of the values strictly below VaR.
///
/// VaR is computed once, and the tail is filtered against that exact
/// threshold within the same snapshot.
///
/// # Errors
///
/// `ValuationError::InvalidParameter` unless `0 < confidence_level < 1`.
pub fn expected_shortfall(
    result: &SimulationResult,
    confidence_level: f64,
) -> Result<f64, ValuationError> {
    check_confidence(confidence_level)?;
    let sorted = result.sorted();
    let var = var_sorted(&sorted, confidence_level);
    Ok(shortfall_sorted(&sorted, var))
}

pub(crate) fn check_confidence(level: f64) -> Result<(), AnalyticsError> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(AnalyticsError::InvalidConfidenceLevel { level })
    }
}

/// Mean that stays finite when the running sum would overflow.
pub(crate) fn mean_of(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}

pub(crate) fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = h - lo as f64;
    let (below, above) = (sorted[lo], sorted[hi]);
    if frac == 0.0 || below == above {
        return below;
    }
    (below * (1.0 - frac) + above * frac).clamp(below, above)
}

#[inline]
pub(crate) fn var_sorted(sorted: &[f64], confidence_level: f64) -> f64 {
    quantile_sorted(sorted, 1.0 - confidence_level)
}

pub(crate) fn shortfall_sorted(sorted: &[f64], var: f64) -> f64 {
    let tail = &sorted[..sorted.partition_point(|&v| v < var)];
    match (tail.first(), tail.last()) {
        (Some(&lowest), Some(&highest)) => mean_of(tail).clamp(lowest, highest),
        _ => var,
    }
}
