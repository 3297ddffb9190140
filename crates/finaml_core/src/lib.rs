//! # finaml_core: Foundation Layer
//!
//! ## Layer 1 (Foundation) Role
//!
//! finaml_core is the bottom layer of the workspace and provides:
//! - Error types: `ValuationError`, `DegenerateInput` (`types::error`)
//! - Expiration handling: `Expiration` date-or-opaque values (`types::time`)
//! - The `Valuable` trait implemented by every instrument shape (`traits`)
//!
//! Layer 1 has no dependencies on other finaml_* crates.
//!
//! ## Usage Examples
//!
//! ```rust
//! use finaml_core::types::{Expiration, ValuationError};
//! use chrono::NaiveDate;
//!
//! let expiry = Expiration::parse("2023-12-31");
//! let valuation = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let tau = expiry.year_fraction_from(valuation).unwrap();
//! assert!((tau - 364.0 / 365.0).abs() < 1e-12);
//!
//! let err = ValuationError::InvalidParameter("trials must be positive".to_string());
//! assert_eq!(err.to_string(), "Invalid parameter: trials must be positive");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): string serialisation for `Expiration`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
