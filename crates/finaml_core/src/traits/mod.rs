//! Valuation traits shared across the workspace.
//!
//! Instruments are dispatched through a closed enum in `finaml_models`;
//! [`Valuable`] is the per-shape contract that enum delegates to.

pub mod valuable;

pub use valuable::Valuable;
