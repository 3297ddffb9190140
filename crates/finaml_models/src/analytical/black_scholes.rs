//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate inputs
//!
//! The closed form is undefined when `σ√T = 0` or when `ln(S/K)` is not
//! finite. Those inputs are routed to limit formulas and reported through
//! [`PricingRegime::Degenerate`]:
//!
//! | Input           | Call                    | Put                     |
//! |-----------------|-------------------------|-------------------------|
//! | `T <= 0`        | `max(S - K, 0)`         | `max(K - S, 0)`         |
//! | `S = 0`, `K = 0`| `max(S - K·e^(-rT), 0)` | `max(K·e^(-rT) - S, 0)` |
//! | `σ = 0`         | `max(S - K·e^(-rT), 0)` | `max(K·e^(-rT) - S, 0)` |

use finaml_core::types::{DegenerateInput, ValuationError};
use num_traits::Float;
use tracing::debug;

use super::distributions::{lit, norm_cdf};
use super::error::AnalyticalError;
use crate::instruments::{EquityOption, OptionKind};

/// Which formula produced a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingRegime {
    /// Closed-form Black-Scholes.
    Analytic,
    /// Limit formula for a degenerate input.
    Degenerate(DegenerateInput),
}

impl PricingRegime {
    /// Returns true when a limit formula was used.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, PricingRegime::Degenerate(_))
    }
}

/// Option price together with the regime that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionValuation {
    /// Option price.
    pub price: f64,
    /// Regime used.
    pub regime: PricingRegime,
}

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use finaml_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (finite, non-negative)
    /// * `rate` - Risk-free interest rate, annualised (finite, non-negative)
    /// * `volatility` - Volatility (finite, non-negative)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot`
    /// - `AnalyticalError::InvalidRate`
    /// - `AnalyticalError::InvalidVolatility`
    ///
    /// # Examples
    /// ```
    /// use finaml_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, f64::NAN, 0.2).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !spot.is_finite() || spot < zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !rate.is_finite() || rate < zero {
            return Err(AnalyticalError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !volatility.is_finite() || volatility < zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Classifies the inputs. Checks run in the order maturity, price level,
    /// volatility; the first match wins.
    pub fn regime(&self, strike: T, expiry: T) -> PricingRegime {
        let zero = T::zero();
        if expiry <= zero {
            PricingRegime::Degenerate(DegenerateInput::ZeroMaturity)
        } else if self.spot == zero || strike == zero {
            PricingRegime::Degenerate(DegenerateInput::ZeroPriceLevel)
        } else if self.volatility == zero {
            PricingRegime::Degenerate(DegenerateInput::ZeroVolatility)
        } else {
            PricingRegime::Analytic
        }
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Only meaningful in the [`PricingRegime::Analytic`] regime; otherwise
    /// the result may be infinite or NaN.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = lit::<T>(0.5);
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;
        (log_moneyness + drift) / (self.volatility * expiry.sqrt())
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call price.
    ///
    /// # Examples
    /// ```
    /// use finaml_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(150.0_f64, 0.03, 0.2).unwrap();
    /// assert!((bs.price_call(160.0, 1.0) - 9.7029).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        self.price(OptionKind::Call, strike, expiry)
    }

    /// Computes the European put price.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        self.price(OptionKind::Put, strike, expiry)
    }

    /// Computes the European price for either side.
    pub fn price(&self, kind: OptionKind, strike: T, expiry: T) -> T {
        self.price_in_regime(kind, strike, expiry, self.regime(strike, expiry))
    }

    fn price_in_regime(&self, kind: OptionKind, strike: T, expiry: T, regime: PricingRegime) -> T {
        let zero = T::zero();
        match regime {
            PricingRegime::Degenerate(DegenerateInput::ZeroMaturity) => match kind {
                OptionKind::Call => (self.spot - strike).max(zero),
                OptionKind::Put => (strike - self.spot).max(zero),
            },
            PricingRegime::Degenerate(_) => {
                let forward_strike = strike * (-self.rate * expiry).exp();
                match kind {
                    OptionKind::Call => (self.spot - forward_strike).max(zero),
                    OptionKind::Put => (forward_strike - self.spot).max(zero),
                }
            }
            PricingRegime::Analytic => {
                let d1 = self.d1(strike, expiry);
                let d2 = self.d2(strike, expiry);
                let discount = (-self.rate * expiry).exp();
                match kind {
                    OptionKind::Call => {
                        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
                    }
                    OptionKind::Put => {
                        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
                    }
                }
            }
        }
    }
}

fn validated_inputs(
    option: &EquityOption,
    spot: f64,
    risk_free_rate: f64,
    time_to_maturity: f64,
) -> Result<BlackScholes<f64>, AnalyticalError> {
    let strike = option.strike();
    if !strike.is_finite() || strike < 0.0 {
        return Err(AnalyticalError::InvalidStrike { strike });
    }
    if !time_to_maturity.is_finite() {
        return Err(AnalyticalError::InvalidMaturity {
            expiry: time_to_maturity,
        });
    }
    BlackScholes::new(spot, risk_free_rate, option.volatility())
}

/// Prices an option and reports which regime produced the price.
///
/// # Errors
/// `ValuationError::InvalidParameter` for a non-finite or negative spot,
/// strike, volatility or rate, or a non-finite time to maturity.
///
/// # Examples
/// ```
/// use finaml_models::analytical::{price_with_diagnostics, PricingRegime};
/// use finaml_models::instruments::{EquityOption, OptionKind};
/// use finaml_core::types::DegenerateInput;
///
/// let put = EquityOption::new(OptionKind::Put, "AAPL", 160.0, "2023-12-31", 0.2).unwrap();
/// let valuation = price_with_diagnostics(&put, 150.0, 0.03, 0.0).unwrap();
/// assert_eq!(valuation.price, 10.0);
/// assert_eq!(
///     valuation.regime,
///     PricingRegime::Degenerate(DegenerateInput::ZeroMaturity)
/// );
/// ```
pub fn price_with_diagnostics(
    option: &EquityOption,
    spot: f64,
    risk_free_rate: f64,
    time_to_maturity: f64,
) -> Result<OptionValuation, ValuationError> {
    let model = validated_inputs(option, spot, risk_free_rate, time_to_maturity)?;
    let strike = option.strike();
    let regime = model.regime(strike, time_to_maturity);

    if let PricingRegime::Degenerate(input) = regime {
        debug!(
            degenerate = input.code(),
            underlying = option.underlying(),
            spot,
            strike,
            time_to_maturity,
            "black-scholes routed to limit formula"
        );
    }

    let price = model.price_in_regime(option.kind(), strike, time_to_maturity, regime);
    Ok(OptionValuation { price, regime })
}

/// Black-Scholes price of a European option.
///
/// # Errors
/// See [`price_with_diagnostics`].
///
/// # Examples
/// ```
/// use finaml_models::analytical::black_scholes_price;
/// use finaml_models::instruments::{EquityOption, OptionKind};
///
/// let call = EquityOption::new(OptionKind::Call, "AAPL", 160.0, "2023-12-31", 0.2).unwrap();
/// let price = black_scholes_price(&call, 150.0, 0.03, 1.0).unwrap();
/// assert!((price - 9.7029).abs() < 1e-3);
/// ```
pub fn black_scholes_price(
    option: &EquityOption,
    spot: f64,
    risk_free_rate: f64,
    time_to_maturity: f64,
) -> Result<f64, ValuationError> {
    price_with_diagnostics(option, spot, risk_free_rate, time_to_maturity).map(|v| v.price)
}
