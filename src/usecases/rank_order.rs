//! Rank-Order Estimator - Youngest / Oldest / At-Least-Median
//!
//! Each trial draws a group of uniform values where index 0 is "me"
//! and records which rank events happened. After all trials the three
//! counters divided by the trial count are the estimates.

use tracing::{debug, info, instrument};

use crate::domain::rank;
use crate::domain::{RankOrderEstimate, SimulationError};
use crate::ports::VariateSource;

/// Values per trial: me plus 17 others.
pub const DEFAULT_GROUP_SIZE: usize = 18;
/// Trials per experiment.
pub const DEFAULT_TRIALS: u64 = 1_000_000;
/// Trials between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Parameters of one rank-order experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOrderParams {
  /// Values drawn per trial, including mine.
  pub group_size: usize,
  /// Number of trials.
  pub trials: u64,
  /// Log progress every this many trials (0 disables).
  pub progress_interval: u64,
}

impl Default for RankOrderParams {
  fn default() -> Self {
    Self {
      group_size: DEFAULT_GROUP_SIZE,
      trials: DEFAULT_TRIALS,
      progress_interval: DEFAULT_PROGRESS_INTERVAL,
    }
  }
}

/// Runs the rank-order experiment.
#[derive(Debug, Clone)]
pub struct RankOrderEstimator {
  params: RankOrderParams,
}

impl RankOrderEstimator {
  /// Create an estimator for the given parameters.
  pub const fn new(params: RankOrderParams) -> Self {
    Self { params }
  }

  /// Run every trial against `source`.
  ///
  /// # Errors
  /// - `EmptyGroup` if `group_size == 0`
  /// - `NoTrials` if `trials == 0`
  /// - `ShortDraw` if the source returns the wrong number of samples
  #[instrument(skip(self, source), fields(group_size = self.params.group_size, trials = self.params.trials))]
  pub fn run<S: VariateSource + ?Sized>(
    &self,
    source: &mut S,
  ) -> Result<RankOrderEstimate, SimulationError> {
    let RankOrderParams { group_size, trials, progress_interval } = self.params;

    if group_size == 0 {
      return Err(SimulationError::EmptyGroup);
    }
    if trials == 0 {
      return Err(SimulationError::NoTrials);
    }

    let mut estimate = RankOrderEstimate::new(group_size);
    for trial in 1..=trials {
      let values = source.uniform_samples(group_size);
      if values.len() != group_size {
        return Err(SimulationError::ShortDraw { expected: group_size, actual: values.len() });
      }
      if let Some(events) = rank::classify(&values) {
        estimate.record(events);
      }

      if progress_interval > 0 && trial % progress_interval == 0 {
        debug!(
          trial,
          youngest = estimate.youngest,
          oldest = estimate.oldest,
          at_least_median = estimate.at_least_median,
          "Rank-order progress"
        );
      }
    }

    info!(
      youngest = estimate.youngest_probability(),
      oldest = estimate.oldest_probability(),
      at_least_median = estimate.at_least_median_probability(),
      "Rank-order experiment finished"
    );
    Ok(estimate)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::adapters::SeededSampler;

  fn params(group_size: usize, trials: u64) -> RankOrderParams {
    RankOrderParams { group_size, trials, progress_interval: 0 }
  }

  #[test]
  fn test_defaults() {
    let p = RankOrderParams::default();
    assert_eq!(p.group_size, 18);
    assert_eq!(p.trials, 1_000_000);
  }

  #[test]
  fn test_counts_bounded_by_trials() {
    let est = RankOrderEstimator::new(params(18, 5_000))
      .run(&mut SeededSampler::from_seed(21))
      .unwrap();
    assert_eq!(est.trials, 5_000);
    assert!(est.youngest <= est.trials);
    assert!(est.oldest <= est.trials);
    assert!(est.at_least_median <= est.trials);
    // youngest and oldest are exclusive once the group has two distinct values
    assert!(est.youngest + est.oldest <= est.trials);
  }

  #[test]
  fn test_single_member_always_everything() {
    let est = RankOrderEstimator::new(params(1, 100))
      .run(&mut SeededSampler::from_seed(22))
      .unwrap();
    assert_eq!(est.youngest, 100);
    assert_eq!(est.oldest, 100);
    assert_eq!(est.at_least_median, 100);
  }

  #[test]
  fn test_empty_group_rejected() {
    let err = RankOrderEstimator::new(params(0, 10))
      .run(&mut SeededSampler::from_seed(23))
      .unwrap_err();
    assert_eq!(err, SimulationError::EmptyGroup);
  }

  #[test]
  fn test_zero_trials_rejected() {
    let err = RankOrderEstimator::new(params(18, 0))
      .run(&mut SeededSampler::from_seed(24))
      .unwrap_err();
    assert_eq!(err, SimulationError::NoTrials);
  }
}
