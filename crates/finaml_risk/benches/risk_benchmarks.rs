//! Criterion benchmarks for finaml_risk.
//!
//! Benchmarks cover:
//! - Single-trial portfolio valuation
//! - Sequential vs Rayon-batched trial drivers
//! - VaR / ES / full risk report over large result sets

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use finaml_models::instruments::{Instrument, OptionKind};
use finaml_risk::analytics::{expected_shortfall, value_at_risk, RiskReport};
use finaml_risk::config::{RiskParameters, SimulationConfig};
use finaml_risk::portfolio::Portfolio;
use finaml_risk::simulation::{run_trials, run_trials_parallel, simulate_once, StochasticRates};

fn build_portfolio(n: usize) -> Portfolio {
    (0..n)
        .map(|i| match i % 3 {
            0 => Instrument::stock(format!("S{i}"), 50.0 + i as f64).unwrap(),
            1 => Instrument::bond(format!("B{i}"), 1000.0, 0.03 + 0.001 * i as f64).unwrap(),
            _ => Instrument::option(OptionKind::Call, format!("S{i}"), 100.0, "2030-06-30", 0.25)
                .unwrap(),
        })
        .collect()
}

fn bench_simulate_once(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_once");

    for n in [3, 30, 300] {
        let portfolio = build_portfolio(n);
        group.bench_with_input(BenchmarkId::new("instruments", n), &portfolio, |b, p| {
            b.iter(|| simulate_once(black_box(p), 0.1, 0.05, 5.0));
        });
    }

    group.finish();
}

fn bench_trial_drivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial_drivers");
    group.sample_size(20);
    let portfolio = build_portfolio(30);

    for trials in [10_000, 100_000] {
        let params = RiskParameters::builder().trials(trials).build().unwrap();
        let config = SimulationConfig::default();

        group.bench_with_input(BenchmarkId::new("sequential", trials), &trials, |b, &t| {
            b.iter(|| {
                let mut sampler = StochasticRates::from_config(&params, &config).unwrap();
                run_trials(&portfolio, &mut sampler, t, 5.0)
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", trials), &trials, |b, _| {
            b.iter(|| run_trials_parallel(&portfolio, &params, &config));
        });
    }

    group.finish();
}

fn bench_risk_measures(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk_measures");
    let params = RiskParameters::builder().trials(100_000).build().unwrap();
    let result =
        run_trials_parallel(&build_portfolio(30), &params, &SimulationConfig::default()).unwrap();

    group.bench_function("value_at_risk", |b| {
        b.iter(|| value_at_risk(black_box(&result), 0.95));
    });
    group.bench_function("expected_shortfall", |b| {
        b.iter(|| expected_shortfall(black_box(&result), 0.95));
    });
    group.bench_function("risk_report", |b| {
        b.iter(|| RiskReport::from_result(black_box(&result), 0.95));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_simulate_once,
    bench_trial_drivers,
    bench_risk_measures
);
criterion_main!(benches);
