//! Threshold Estimator - Polynomial Threshold Probability
//!
//! Draws `size` normal samples, counts how many push the cubic above
//! its threshold, and repeats that `repeats` times. The estimate is
//! the plain average of the per-repeat fractions.

use tracing::{debug, info, instrument};

use crate::domain::polynomial;
use crate::domain::{SimulationError, ThresholdEstimate};
use crate::ports::VariateSource;

/// Repeats averaged by [`check_prob`].
pub const DEFAULT_REPEATS: usize = 10;

/// Parameters of one threshold experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdParams {
  /// Mean of the normal distribution.
  pub mean: f64,
  /// Standard deviation (must be >= 0).
  pub std: f64,
  /// Samples per repeat.
  pub size: usize,
  /// Independent repeats to average.
  pub repeats: usize,
}

impl ThresholdParams {
  /// Parameters with the default repeat count.
  pub const fn new(mean: f64, std: f64, size: usize) -> Self {
    Self { mean, std, size, repeats: DEFAULT_REPEATS }
  }

  /// Override the repeat count.
  #[must_use]
  pub const fn with_repeats(mut self, repeats: usize) -> Self {
    self.repeats = repeats;
    self
  }
}

/// Runs the polynomial threshold experiment.
#[derive(Debug, Clone)]
pub struct ThresholdEstimator {
  params: ThresholdParams,
}

impl ThresholdEstimator {
  /// Create an estimator for the given parameters.
  pub const fn new(params: ThresholdParams) -> Self {
    Self { params }
  }

  /// Run every repeat against `source`.
  ///
  /// # Errors
  /// - `EmptySample` if `size == 0`
  /// - `NoRepeats` if `repeats == 0`
  /// - `InvalidNormal` if the source rejects `mean`/`std`
  /// - `ShortDraw` if the source returns the wrong number of samples
  #[instrument(skip(self, source), fields(mean = self.params.mean, std = self.params.std, size = self.params.size))]
  pub fn run<S: VariateSource + ?Sized>(
    &self,
    source: &mut S,
  ) -> Result<ThresholdEstimate, SimulationError> {
    let ThresholdParams { mean, std, size, repeats } = self.params;

    if size == 0 {
      return Err(SimulationError::EmptySample);
    }
    if repeats == 0 {
      return Err(SimulationError::NoRepeats);
    }

    let mut fractions = Vec::with_capacity(repeats);
    for repeat in 0..repeats {
      let samples = source.normal_samples(mean, std, size)?;
      if samples.len() != size {
        return Err(SimulationError::ShortDraw { expected: size, actual: samples.len() });
      }

      let fraction = polynomial::fraction_exceeding(&samples);
      debug!(repeat, fraction, "Threshold repeat complete");
      fractions.push(fraction);
    }

    let estimate = ThresholdEstimate::from_fractions(mean, std, size, fractions);
    info!(
      probability = estimate.probability,
      analytic = estimate.analytic(),
      repeats,
      "Threshold experiment finished"
    );
    Ok(estimate)
  }
}

/// Average fraction of `f(x) = x³ + 2x + 1` above 1 over
/// [`DEFAULT_REPEATS`] draws of `size` samples from `N(mean, std²)`.
///
/// # Errors
/// See [`ThresholdEstimator::run`].
pub fn check_prob<S: VariateSource + ?Sized>(
  source: &mut S,
  mean: f64,
  std: f64,
  size: usize,
) -> Result<f64, SimulationError> {
  ThresholdEstimator::new(ThresholdParams::new(mean, std, size))
    .run(source)
    .map(|estimate| estimate.probability)
}
