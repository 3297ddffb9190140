//! Property and integration tests for the simulator and risk analytics.

use finaml_core::types::ValuationError;
use finaml_models::instruments::{Instrument, OptionKind};
use finaml_risk::analytics::{
    assess_portfolio, expected_shortfall, max, mean, min, npv, percentile, stddev, value_at_risk,
    RiskReport, SimulationResult,
};
use finaml_risk::config::{RiskParameters, ScenarioFile, SimulationConfig, MAX_RATE_VOLATILITY};
use finaml_risk::portfolio::Portfolio;
use finaml_risk::simulation::{
    run_trials, run_trials_parallel, simulate_once, FixedRates, RateSample, RateSampler,
    StochasticRates,
};
use approx::assert_relative_eq;
use proptest::prelude::*;

// Interpolated quantiles are only monotone in `p` up to rounding.
const TOL: f64 = 1e-6;

fn sample_portfolio() -> Portfolio {
    Portfolio::new()
        .with(Instrument::stock("AAPL", 150.0).unwrap())
        .with(Instrument::bond("XYZ", 1000.0, 0.05).unwrap())
        .with(Instrument::option(OptionKind::Call, "AAPL", 160.0, "2023-12-31", 0.2).unwrap())
}

fn values_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6_f64, 1..300)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn expected_shortfall_never_exceeds_var(
        values in values_strategy(),
        cl in 0.001..0.999_f64,
    ) {
        let result = SimulationResult::new(values).unwrap();
        let var = value_at_risk(&result, cl).unwrap();
        let es = expected_shortfall(&result, cl).unwrap();
        prop_assert!(es <= var + TOL);
        prop_assert!(es >= min(&result) - TOL);
    }

    #[test]
    fn var_non_decreasing_as_confidence_falls(
        values in values_strategy(),
        a in 0.001..0.999_f64,
        b in 0.001..0.999_f64,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let result = SimulationResult::new(values).unwrap();
        prop_assert!(
            value_at_risk(&result, low).unwrap() >= value_at_risk(&result, high).unwrap() - TOL
        );
    }

    #[test]
    fn var_lies_within_observed_range(values in values_strategy(), cl in 0.001..0.999_f64) {
        let result = SimulationResult::new(values).unwrap();
        let var = value_at_risk(&result, cl).unwrap();
        prop_assert!(var >= min(&result) - TOL);
        prop_assert!(var <= max(&result) + TOL);
        prop_assert_eq!(var, percentile(&result, 1.0 - cl).unwrap());
    }

    #[test]
    fn risk_measures_stay_finite_at_any_magnitude(
        values in prop::collection::vec(prop::num::f64::NORMAL, 1..100),
        cl in 0.001..0.999_f64,
    ) {
        let result = SimulationResult::new(values).unwrap();
        let var = value_at_risk(&result, cl).unwrap();
        let es = expected_shortfall(&result, cl).unwrap();
        prop_assert!(var.is_finite() && es.is_finite());
        prop_assert!(var >= min(&result) && var <= max(&result));
        prop_assert!(es >= min(&result) && es <= var);
        prop_assert!(mean(&result).is_finite());
    }

    #[test]
    fn report_agrees_with_individual_statistics(
        values in values_strategy(),
        cl in 0.001..0.999_f64,
    ) {
        let result = SimulationResult::new(values).unwrap();
        let report = RiskReport::from_result(&result, cl).unwrap();
        prop_assert_eq!(report.mean, mean(&result));
        prop_assert_eq!(report.std_dev, stddev(&result));
        prop_assert_eq!(report.value_at_risk, value_at_risk(&result, cl).unwrap());
        prop_assert_eq!(report.expected_shortfall, expected_shortfall(&result, cl).unwrap());
    }

    #[test]
    fn simulate_once_rejects_rates_at_or_below_minus_one(
        rate in -10.0..=-1.0_f64,
        growth in -0.5..0.5_f64,
    ) {
        let portfolio = sample_portfolio();
        prop_assert!(simulate_once(&portfolio, rate, growth, 5.0).is_err());
        prop_assert!(simulate_once(&portfolio, growth, rate, 5.0).is_err());
    }

    #[test]
    fn stochastic_rates_never_fail_a_run(
        seed in any::<u64>(),
        discount_volatility in 0.0..=MAX_RATE_VOLATILITY,
        growth_volatility in 0.0..=MAX_RATE_VOLATILITY,
    ) {
        let params = RiskParameters::builder().trials(500).build().unwrap();
        let config = SimulationConfig::builder()
            .seed(seed)
            .discount_volatility(discount_volatility)
            .growth_volatility(growth_volatility)
            .build()
            .unwrap();
        let result = run_trials_parallel(&sample_portfolio(), &params, &config);
        prop_assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn parallel_run_reproducible_for_any_batching_threshold(
        seed in any::<u64>(),
        trials in 1usize..1500,
        batch_size in 1usize..400,
    ) {
        let params = RiskParameters::builder().trials(trials).build().unwrap();
        let base = SimulationConfig::builder().seed(seed).batch_size(batch_size);
        let sequential = base.clone().parallel_threshold(usize::MAX).build().unwrap();
        let parallel = base.parallel_threshold(0).build().unwrap();
        let portfolio = sample_portfolio();

        let a = run_trials_parallel(&portfolio, &params, &sequential).unwrap();
        let b = run_trials_parallel(&portfolio, &params, &parallel).unwrap();
        prop_assert_eq!(a.len(), trials);
        prop_assert_eq!(a, b);
    }
}

#[test]
fn sequential_run_reproducible_with_fixed_seed() {
    let params = RiskParameters::default();
    let config = SimulationConfig::builder().seed(2024).build().unwrap();
    let portfolio = sample_portfolio();

    let mut first = StochasticRates::from_config(&params, &config).unwrap();
    let mut second = StochasticRates::from_config(&params, &config).unwrap();
    let a = run_trials(&portfolio, &mut first, 5_000, 5.0).unwrap();
    let b = run_trials(&portfolio, &mut second, 5_000, 5.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_give_different_runs() {
    let params = RiskParameters::builder().trials(500).build().unwrap();
    let portfolio = sample_portfolio();
    let a = run_trials_parallel(
        &portfolio,
        &params,
        &SimulationConfig::builder().seed(1).build().unwrap(),
    )
    .unwrap();
    let b = run_trials_parallel(
        &portfolio,
        &params,
        &SimulationConfig::builder().seed(2).build().unwrap(),
    )
    .unwrap();
    assert_ne!(a, b);
}

#[test]
fn wide_rate_volatility_assesses_without_error() {
    let params = RiskParameters::builder().trials(10_000).build().unwrap();
    let portfolio = sample_portfolio();

    let growth_only = SimulationConfig::builder()
        .growth_volatility(0.5)
        .build()
        .unwrap();
    let report = assess_portfolio(&portfolio, &params, &growth_only).unwrap();
    assert_eq!(report.trials, 10_000);
    assert!(report.expected_shortfall <= report.value_at_risk);

    let both = SimulationConfig::builder()
        .discount_volatility(0.35)
        .growth_volatility(0.35)
        .build()
        .unwrap();
    let result = run_trials_parallel(&portfolio, &params, &both).unwrap();
    assert_eq!(result.len(), 10_000);
}

#[test]
fn sampled_rate_mean_matches_risk_parameters() {
    let params = RiskParameters::default();
    let config = SimulationConfig::builder()
        .growth_volatility(0.5)
        .build()
        .unwrap();
    let mut sampler = StochasticRates::from_config(&params, &config).unwrap();
    let n = 100_000;
    let mut growth = 0.0;
    for _ in 0..n {
        let rates = sampler.sample();
        assert!(rates.growth_rate > -1.0);
        growth += rates.growth_rate;
    }
    assert!((growth / n as f64 - params.growth_rate()).abs() < 0.01);
}

#[test]
fn invalid_sampled_rate_fails_whole_run() {
    let mut trial = 0;
    let mut sampler = || {
        trial += 1;
        if trial == 500 {
            (0.1, f64::NAN)
        } else {
            (0.1, 0.05)
        }
    };
    let err = run_trials(&sample_portfolio(), &mut sampler, 1_000, 5.0).unwrap_err();
    assert!(matches!(err, ValuationError::InvalidParameter(_)));
}

#[test]
fn fixed_rates_produce_degenerate_distribution() {
    let mut sampler = FixedRates(RateSample::new(0.1, 0.05));
    let result = run_trials(&sample_portfolio(), &mut sampler, 100, 5.0).unwrap();
    let report = RiskReport::from_result(&result, 0.95).unwrap();
    let value = result.values()[0];
    assert!(result.values().iter().all(|&v| v == value));
    assert!(report.std_dev < 1e-9);
    assert_eq!(report.value_at_risk, value);
    assert_eq!(report.expected_shortfall, value);
    assert_relative_eq!(report.mean, value, max_relative = 1e-12);
}

#[test]
fn scenario_file_end_to_end() {
    let scenario = ScenarioFile::from_toml_str(
        r#"
        [risk]
        trials = 4000
        confidence_level = 0.95

        [simulation]
        seed = 11
        batch_size = 512

        [[instruments]]
        kind = "stock"
        ticker = "AAPL"
        price = 150.0

        [[instruments]]
        kind = "bond"
        ticker = "XYZ"
        face_value = 1000.0
        coupon_rate = 0.05
        "#,
    )
    .unwrap();
    scenario.validate().unwrap();

    let portfolio = scenario.portfolio().unwrap();
    let result = run_trials_parallel(&portfolio, &scenario.risk, &scenario.simulation).unwrap();
    let report = RiskReport::from_result(&result, scenario.risk.confidence_level()).unwrap();

    assert_eq!(report.trials, 4000);
    assert!(report.expected_shortfall <= report.value_at_risk);
    assert!(report.value_at_risk < report.mean);
}

#[test]
fn cash_flow_analysis_is_reachable_from_analytics() {
    assert!((npv(&[100.0, 100.0, 100.0], 0.1) - 273.5537).abs() < 1e-4);
}
