//! # finaml Models (L2: Business Logic)
//!
//! Instrument definitions, valuation functions and closed-form option pricing.
//!
//! This crate provides:
//! - The closed `Instrument` variant over stocks, fixed-coupon bonds and
//!   vanilla options (`instruments`)
//! - Present value, future value, NPV and discount-rate sensitivity sweeps
//!   (`valuation`)
//! - Standard normal CDF/PDF and the Black-Scholes pricer (`analytical`)
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** with exhaustive matching; adding a shape
//!   forces every consumer to handle it
//! - **Validating constructors**: an `Instrument` value is always well formed
//! - **Option routing**: the valuation engine values options at zero; option
//!   prices come only from the analytical pricer
//!
//! ## Example
//!
//! ```
//! use finaml_models::instruments::{Instrument, OptionKind};
//! use finaml_models::valuation::{npv, present_value};
//! use finaml_models::analytical::black_scholes_price;
//!
//! let stock = Instrument::stock("AAPL", 150.0).unwrap();
//! assert_eq!(present_value(&stock), 150.0);
//!
//! let call = Instrument::option(OptionKind::Call, "AAPL", 160.0, "2023-12-31", 0.2).unwrap();
//! assert_eq!(present_value(&call), 0.0);
//!
//! let option = call.as_option().unwrap();
//! let price = black_scholes_price(option, 150.0, 0.03, 1.0).unwrap();
//! assert!((price - 9.7029).abs() < 1e-3);
//!
//! assert!((npv(&[100.0, 100.0, 100.0], 0.0) - 300.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod valuation;
