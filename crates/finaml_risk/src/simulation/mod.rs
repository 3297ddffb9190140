//! Monte Carlo portfolio simulator.
//!
//! A trial values the portfolio once for a given discount rate, growth rate
//! and horizon ([`simulate_once`]). The trial drivers own the random source:
//!
//! - [`run_trials`]: sequential, with any [`RateSampler`] (closures included)
//! - [`run_trials_parallel`]: log-normal rates from [`StochasticRates`], one
//!   independent RNG stream per fixed-size batch, batches on the Rayon pool
//!
//! Both return a [`SimulationResult`](crate::analytics::SimulationResult) in
//! trial order.

mod engine;
mod error;
mod sampler;

pub use engine::{run_trials, run_trials_parallel, simulate_once};
pub use error::SimulationError;
pub use sampler::{FixedRates, RateSample, RateSampler, StochasticRates};
