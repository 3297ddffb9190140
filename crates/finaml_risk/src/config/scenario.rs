//! TOML scenario files.
//!
//! A scenario bundles risk parameters, simulation settings and a portfolio:
//!
//! ```toml
//! [risk]
//! discount_rate = 0.10
//! confidence_level = 0.95
//! trials = 10000
//!
//! [simulation]
//! seed = 42
//!
//! [[instruments]]
//! kind = "stock"
//! ticker = "AAPL"
//! price = 150.0
//!
//! [[instruments]]
//! kind = "option"
//! option_type = "call"
//! underlying = "AAPL"
//! strike = 160.0
//! expiration = "2023-12-31"
//! volatility = 0.2
//! ```

use std::path::Path;

use finaml_models::instruments::{Instrument, InstrumentError, OptionKind};
use serde::Deserialize;
use tracing::{debug, warn};

use super::error::ConfigError;
use super::parameters::RiskParameters;
use super::simulation::SimulationConfig;
use crate::portfolio::Portfolio;

/// One `[[instruments]]` entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InstrumentSpec {
    /// Listed stock.
    Stock {
        /// Ticker symbol
        ticker: String,
        /// Quoted price
        price: f64,
    },
    /// Fixed-coupon bond.
    Bond {
        /// Ticker symbol
        ticker: String,
        /// Face value
        face_value: f64,
        /// Coupon rate
        coupon_rate: f64,
    },
    /// Vanilla option.
    Option {
        /// `call` or `put`
        option_type: String,
        /// Underlying ticker
        underlying: String,
        /// Strike price
        strike: f64,
        /// ISO date or free-form label
        expiration: String,
        /// Annualised volatility
        volatility: f64,
    },
}

impl InstrumentSpec {
    /// Builds the instrument through its validating constructor.
    pub fn build(&self) -> Result<Instrument, InstrumentError> {
        match self {
            InstrumentSpec::Stock { ticker, price } => Instrument::stock(ticker.as_str(), *price),
            InstrumentSpec::Bond {
                ticker,
                face_value,
                coupon_rate,
            } => Instrument::bond(ticker.as_str(), *face_value, *coupon_rate),
            InstrumentSpec::Option {
                option_type,
                underlying,
                strike,
                expiration,
                volatility,
            } => {
                let kind: OptionKind = option_type.parse()?;
                Instrument::option(
                    kind,
                    underlying.as_str(),
                    *strike,
                    expiration.as_str(),
                    *volatility,
                )
            }
        }
    }
}

/// A complete scenario loaded from TOML.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioFile {
    /// `[risk]` table.
    pub risk: RiskParameters,
    /// `[simulation]` table.
    pub simulation: SimulationConfig,
    /// `[[instruments]]` array, in portfolio order.
    pub instruments: Vec<InstrumentSpec>,
}

impl ScenarioFile {
    /// Parses a scenario from TOML text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use finaml_risk::config::ScenarioFile;
    ///
    /// let scenario = ScenarioFile::from_toml_str(r#"
    ///     [risk]
    ///     trials = 2000
    ///
    ///     [[instruments]]
    ///     kind = "bond"
    ///     ticker = "XYZ"
    ///     face_value = 1000.0
    ///     coupon_rate = 0.05
    /// "#).unwrap();
    ///
    /// assert_eq!(scenario.risk.trials(), 2000);
    /// assert_eq!(scenario.portfolio().unwrap().len(), 1);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Loads a scenario from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let scenario = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            instruments = scenario.instruments.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// Loads a scenario, falling back to the defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(scenario) => scenario,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "using default scenario");
                Self::default()
            }
        }
    }

    /// Applies `FINAML_TRIALS`, `FINAML_CONFIDENCE` and `FINAML_SEED` through
    /// `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.risk = self.risk.with_overrides(&lookup);
        self.simulation = self.simulation.with_overrides(&lookup);
        self
    }

    /// Applies overrides from the process environment.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Validates parameters, settings and every instrument entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        for result in [self.risk.validate(), self.simulation.validate()] {
            match result {
                Ok(()) => {}
                Err(ConfigError::Validation(messages)) => errors.extend(messages),
                Err(other) => errors.push(other.to_string()),
            }
        }
        for (index, spec) in self.instruments.iter().enumerate() {
            if let Err(err) = spec.build() {
                errors.push(format!("instrument #{index}: {err}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Builds the portfolio, failing on the first rejected instrument.
    pub fn portfolio(&self) -> Result<Portfolio, ConfigError> {
        self.instruments
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.build().map_err(|e| ConfigError::Instrument {
                    index,
                    message: e.to_string(),
                })
            })
            .collect()
    }
}
