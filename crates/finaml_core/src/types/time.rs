//! Option expiration handling.
//!
//! An option's expiration is carried either as a calendar date or, when the
//! caller supplies something that is not an ISO date, as an opaque label. Only
//! dated expirations can be turned into a time to maturity.

use chrono::NaiveDate;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Days per year for the ACT/365 Fixed convention.
const DAYS_PER_YEAR: f64 = 365.0;

/// Option expiration: a calendar date or an opaque label.
///
/// # Examples
/// ```
/// use finaml_core::types::Expiration;
///
/// let dated = Expiration::parse("2023-12-31");
/// assert!(dated.date().is_some());
///
/// let opaque = Expiration::parse("Dec-23 quarterly");
/// assert!(opaque.date().is_none());
/// assert_eq!(opaque.to_string(), "Dec-23 quarterly");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", from = "String")
)]
pub enum Expiration {
    /// Calendar expiration date.
    Date(NaiveDate),
    /// Unparsed label kept verbatim.
    Opaque(String),
}

impl Expiration {
    /// Parses `YYYY-MM-DD` into a date; any other text is kept opaque.
    pub fn parse(s: &str) -> Self {
        match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
            Ok(date) => Expiration::Date(date),
            Err(_) => Expiration::Opaque(s.to_string()),
        }
    }

    /// Returns the calendar date, if the expiration is dated.
    #[inline]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Expiration::Date(date) => Some(*date),
            Expiration::Opaque(_) => None,
        }
    }

    /// ACT/365 year fraction from `valuation_date` to expiration.
    ///
    /// Negative when the option has already expired. `None` for opaque
    /// expirations.
    pub fn year_fraction_from(&self, valuation_date: NaiveDate) -> Option<f64> {
        self.date()
            .map(|expiry| year_fraction_act365(valuation_date, expiry))
    }
}

/// ACT/365 Fixed year fraction between two dates (signed).
///
/// # Examples
/// ```
/// use finaml_core::types::year_fraction_act365;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// // 2024 is a leap year
/// assert!((year_fraction_act365(start, end) - 366.0 / 365.0).abs() < 1e-12);
/// ```
#[inline]
pub fn year_fraction_act365(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / DAYS_PER_YEAR
}

impl From<NaiveDate> for Expiration {
    fn from(date: NaiveDate) -> Self {
        Expiration::Date(date)
    }
}

impl From<String> for Expiration {
    fn from(s: String) -> Self {
        Expiration::parse(&s)
    }
}

impl From<&str> for Expiration {
    fn from(s: &str) -> Self {
        Expiration::parse(s)
    }
}

impl From<Expiration> for String {
    fn from(expiration: Expiration) -> Self {
        expiration.to_string()
    }
}

impl FromStr for Expiration {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Expiration::parse(s))
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiration::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Expiration::Opaque(label) => write!(f, "{}", label),
        }
    }
}
