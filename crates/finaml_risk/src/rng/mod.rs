//! Random number generation for the portfolio simulator.
//!
//! - [`SimulationRng`]: seeded `StdRng` wrapper with uniform and normal draws
//! - [`derive_stream_seed`]: deterministic per-batch seeds for parallel runs

mod prng;

pub use prng::{derive_stream_seed, SimulationRng};
