//! Fixed-coupon bonds.
//!
//! Valued with a single-period discount at the coupon rate, and compounded at
//! the coupon rate for future value. Multi-period coupon streams are not
//! modelled.

use std::fmt;

use finaml_core::traits::Valuable;

use super::error::InstrumentError;

/// Fixed-coupon bond.
///
/// # Examples
/// ```
/// use finaml_models::instruments::Bond;
/// use finaml_core::traits::Valuable;
///
/// let bond = Bond::new("XYZ", 1000.0, 0.05).unwrap();
/// assert!((bond.present_value() - 952.380952).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    ticker: String,
    face_value: f64,
    coupon_rate: f64,
}

impl Bond {
    /// Creates a bond.
    ///
    /// # Errors
    /// - `InstrumentError::NegativeFaceValue` if `face_value` is negative or not finite
    /// - `InstrumentError::InvalidCouponRate` if `coupon_rate` is not finite or `<= -1`
    pub fn new(
        ticker: impl Into<String>,
        face_value: f64,
        coupon_rate: f64,
    ) -> Result<Self, InstrumentError> {
        if !face_value.is_finite() || face_value < 0.0 {
            return Err(InstrumentError::NegativeFaceValue { face_value });
        }
        // c = -1 would put a zero in the discount denominator
        if !coupon_rate.is_finite() || coupon_rate <= -1.0 {
            return Err(InstrumentError::InvalidCouponRate { coupon_rate });
        }
        Ok(Self {
            ticker: ticker.into(),
            face_value,
            coupon_rate,
        })
    }

    /// Returns the ticker symbol.
    #[inline]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the face value.
    #[inline]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the coupon rate.
    #[inline]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }
}

impl Valuable for Bond {
    #[inline]
    fn present_value(&self) -> f64 {
        self.face_value / (1.0 + self.coupon_rate)
    }

    /// Compounds at the coupon rate; `growth_rate` does not apply to bonds.
    #[inline]
    fn future_value(&self, periods: f64, _growth_rate: f64) -> f64 {
        self.face_value * (1.0 + self.coupon_rate).powf(periods)
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bond(ticker={}, face_value={}, coupon_rate={})",
            self.ticker, self.face_value, self.coupon_rate
        )
    }
}
