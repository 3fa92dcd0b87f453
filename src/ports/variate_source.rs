//! Variate Source Port - Random Sample Supply
//!
//! The estimators only ever ask for batches of normal or uniform
//! variates. Keeping that behind a trait lets tests script exact
//! draws and lets the binary swap generators without touching
//! the counting logic.

use crate::domain::SimulationError;

/// Supplier of independent random variates.
///
/// Implementations own their generator state; two sources built from
/// the same seed must yield identical sequences.
pub trait VariateSource {
  /// Draw `size` independent samples from `N(mean, std²)`.
  ///
  /// # Errors
  /// Returns `SimulationError::InvalidNormal` when the distribution
  /// rejects `mean`/`std` (negative or non-finite deviation).
  fn normal_samples(
    &mut self,
    mean: f64,
    std: f64,
    size: usize,
  ) -> Result<Vec<f64>, SimulationError>;

  /// Draw `count` independent samples uniform on `[0, 1)`.
  fn uniform_samples(&mut self, count: usize) -> Vec<f64>;
}

