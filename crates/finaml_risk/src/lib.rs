//! # finaml Risk (L3: Application)
//!
//! Monte Carlo portfolio simulation and risk analytics.
//!
//! This crate provides:
//! - Ordered portfolios of instruments (`portfolio`)
//! - Seeded random number generation with per-batch streams (`rng`)
//! - The per-trial valuation, rate samplers and trial drivers (`simulation`)
//! - Mean, standard deviation, VaR, ES and risk reports (`analytics`)
//! - Risk parameters, simulation settings and TOML scenarios (`config`)
//! - Rayon batch execution (`parallel`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            finaml_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  config/     - parameters, scenarios   │
//! │  simulation/ - trials, rate samplers   │
//! │  analytics/  - VaR, ES, risk report    │
//! │  rng/        - seeded streams          │
//! │  parallel/   - Rayon batches           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           finaml_models (L2)            │
//! │  instruments, valuation, Black-Scholes  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use finaml_risk::analytics::assess_portfolio;
//! use finaml_risk::config::{RiskParameters, SimulationConfig};
//! use finaml_risk::portfolio::Portfolio;
//! use finaml_models::instruments::Instrument;
//!
//! let portfolio = Portfolio::new()
//!     .with(Instrument::stock("AAPL", 150.0).unwrap())
//!     .with(Instrument::bond("XYZ", 1000.0, 0.05).unwrap());
//!
//! let params = RiskParameters::builder().trials(1_000).build().unwrap();
//! let config = SimulationConfig::builder().seed(42).build().unwrap();
//!
//! let report = assess_portfolio(&portfolio, &params, &config).unwrap();
//! assert!(report.expected_shortfall <= report.value_at_risk);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytics;
pub mod config;
pub mod parallel;
pub mod portfolio;
pub mod rng;
pub mod simulation;
