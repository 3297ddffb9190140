//! Trait for instrument shapes that can be valued.
//!
//! Designed for static dispatch: the closed `Instrument` enum in
//! `finaml_models` matches exhaustively over its shapes and forwards to each
//! shape's implementation. Do not box this trait.

/// Present and future value of a single instrument shape.
///
/// # Examples
/// ```
/// use finaml_core::traits::Valuable;
///
/// struct Cash(f64);
///
/// impl Valuable for Cash {
///     fn present_value(&self) -> f64 {
///         self.0
///     }
///
///     fn future_value(&self, periods: f64, growth_rate: f64) -> f64 {
///         self.0 * (1.0 + growth_rate).powf(periods)
///     }
/// }
///
/// let cash = Cash(100.0);
/// assert_eq!(cash.present_value(), 100.0);
/// assert!((cash.future_value(1.0, 0.1) - 110.0).abs() < 1e-12);
/// ```
pub trait Valuable {
    /// Current worth of the instrument.
    ///
    /// # Invariants
    /// - Pure and deterministic
    fn present_value(&self) -> f64;

    /// Projected worth after `periods` compounding periods.
    ///
    /// Shapes with their own growth driver (bonds compound at their coupon)
    /// may ignore `growth_rate`.
    fn future_value(&self, periods: f64, growth_rate: f64) -> f64;
}
