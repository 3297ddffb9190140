//! Risk analytics over simulated portfolio values.
//!
//! - Mean, population standard deviation, min, max
//! - Linearly interpolated percentiles
//! - Value-at-Risk and Expected Shortfall from a single snapshot
//! - [`RiskReport`] / [`assess_portfolio`]: one simulation, every statistic
//! - NPV and discount-rate sensitivity sweeps (re-exported from
//!   `finaml_models::valuation`)

mod error;
mod report;
mod result;
mod statistics;

pub use error::AnalyticsError;
pub use report::{assess_portfolio, RiskReport};
pub use result::SimulationResult;
pub use statistics::{expected_shortfall, max, mean, min, percentile, stddev, value_at_risk};

pub use finaml_models::valuation::{npv, sensitivity_analysis, CashFlowSeries};
