//! Experiment results.
//!
//! Both estimates serialize to JSON for the machine-readable report.

use serde::Serialize;

use super::polynomial;
use super::rank::{self, RankEvents};

/// Outcome of the polynomial-threshold experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdEstimate {
    /// Mean of the sampled normal distribution.
    pub mean: f64,
    /// Standard deviation of the sampled normal distribution.
    pub std: f64,
    /// Samples drawn per repeat.
    pub size: usize,
    /// Fraction exceeding the threshold, one entry per repeat.
    pub trial_fractions: Vec<f64>,
    /// Arithmetic mean of `trial_fractions`.
    pub probability: f64,
}

impl ThresholdEstimate {
    /// Build from per-repeat fractions, averaging them.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_fractions(mean: f64, std: f64, size: usize, trial_fractions: Vec<f64>) -> Self {
        let probability = if trial_fractions.is_empty() {
            0.0
        } else {
            trial_fractions.iter().sum::<f64>() / trial_fractions.len() as f64
        };
        Self { mean, std, size, trial_fractions, probability }
    }

    /// Closed-form reference for the same parameters.
    pub fn analytic(&self) -> f64 {
        polynomial::analytic_probability(self.mean, self.std)
    }

    /// Number of repeats that were averaged.
    pub fn repeats(&self) -> usize {
        self.trial_fractions.len()
    }
}

/// Running tallies of the rank-order experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RankOrderEstimate {
    /// Values per trial, including mine.
    pub group_size: usize,
    /// Trials recorded so far.
    pub trials: u64,
    /// Trials where I was the minimum.
    pub youngest: u64,
    /// Trials where I was the maximum.
    pub oldest: u64,
    /// Trials where my rank was at or above the median position.
    pub at_least_median: u64,
}

impl RankOrderEstimate {
    /// Empty tally for groups of `group_size`.
    pub const fn new(group_size: usize) -> Self {
        Self { group_size, trials: 0, youngest: 0, oldest: 0, at_least_median: 0 }
    }

    /// Count one trial.
    pub fn record(&mut self, events: RankEvents) {
        self.trials += 1;
        self.youngest += u64::from(events.youngest);
        self.oldest += u64::from(events.oldest);
        self.at_least_median += u64::from(events.at_least_median);
    }

    #[allow(clippy::cast_precision_loss)]
    fn frequency(&self, count: u64) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        count as f64 / self.trials as f64
    }

    /// Empirical probability of being the youngest.
    pub fn youngest_probability(&self) -> f64 {
        self.frequency(self.youngest)
    }

    /// Empirical probability of being the oldest.
    pub fn oldest_probability(&self) -> f64 {
        self.frequency(self.oldest)
    }

    /// Empirical probability of ranking at or above the median.
    pub fn at_least_median_probability(&self) -> f64 {
        self.frequency(self.at_least_median)
    }

    /// Exact `(youngest, oldest, at_least_median)` for continuous draws.
    pub fn analytic(&self) -> (f64, f64, f64) {
        let extremal = rank::analytic_extremal(self.group_size);
        (extremal, extremal, rank::analytic_at_least_median(self.group_size))
    }
}
