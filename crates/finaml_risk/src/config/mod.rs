//! Configuration layer.
//!
//! - [`RiskParameters`]: rates, confidence level, trials and horizon
//! - [`SimulationConfig`]: seed, rate volatilities and batching
//! - [`ScenarioFile`]: both of the above plus a portfolio, loaded from TOML
//!
//! Environment overrides: `FINAML_TRIALS`, `FINAML_CONFIDENCE`, `FINAML_SEED`.

mod error;
mod parameters;
mod scenario;
mod simulation;

pub use error::ConfigError;
pub use parameters::{
    RiskParameters, RiskParametersBuilder, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_DISCOUNT_RATE,
    DEFAULT_HORIZON_PERIODS, DEFAULT_TRIALS,
};
pub use scenario::{InstrumentSpec, ScenarioFile};
pub use simulation::{
    SimulationConfig, SimulationConfigBuilder, DEFAULT_DISCOUNT_VOLATILITY,
    DEFAULT_GROWTH_VOLATILITY, DEFAULT_SEED, MAX_RATE_VOLATILITY,
};
