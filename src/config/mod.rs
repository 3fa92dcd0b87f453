//! Configuration Module - TOML-based Experiment Configuration
//!
//! Loads and validates configuration from an optional `config.toml`.
//! Every field has a default, and the defaults reproduce the classic
//! experiment constants, so an empty or missing file runs the exact
//! same experiments.

pub mod loader;

use serde::Deserialize;

use crate::adapters::OutputFormat;
use crate::usecases::rank_order::{
  DEFAULT_GROUP_SIZE, DEFAULT_PROGRESS_INTERVAL, DEFAULT_TRIALS,
};
use crate::usecases::threshold::DEFAULT_REPEATS;
use crate::usecases::{RankOrderParams, ThresholdParams};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
  /// Seed and logging.
  #[serde(default)]
  pub run: RunConfig,
  /// Polynomial threshold experiment.
  #[serde(default)]
  pub threshold: ThresholdConfig,
  /// Rank-order experiment.
  #[serde(default)]
  pub rank_order: RankOrderConfig,
  /// Result rendering.
  #[serde(default)]
  pub output: OutputConfig,
}

/// Run-wide settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
  /// RNG seed. Absent = seed from OS entropy.
  #[serde(default)]
  pub seed: Option<u64>,
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

/// Threshold experiment parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
  /// Mean of the normal distribution.
  #[serde(default = "default_mean")]
  pub mean: f64,
  /// Standard deviation of the normal distribution.
  #[serde(default = "default_std")]
  pub std: f64,
  /// Samples per repeat.
  #[serde(default = "default_size")]
  pub size: usize,
  /// Repeats to average.
  #[serde(default = "default_repeats")]
  pub repeats: usize,
}

/// Rank-order experiment parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankOrderConfig {
  /// Values per trial, including mine.
  #[serde(default = "default_group_size")]
  pub group_size: usize,
  /// Number of trials.
  #[serde(default = "default_trials")]
  pub trials: u64,
  /// Trials between debug progress lines (0 disables).
  #[serde(default = "default_progress_interval")]
  pub progress_interval: u64,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
  /// `text` or `json`.
  #[serde(default)]
  pub format: OutputFormat,
}

impl Default for RunConfig {
  fn default() -> Self {
    Self { seed: None, log_level: default_log_level() }
  }
}

impl Default for ThresholdConfig {
  fn default() -> Self {
    Self {
      mean: default_mean(),
      std: default_std(),
      size: default_size(),
      repeats: default_repeats(),
    }
  }
}

impl Default for RankOrderConfig {
  fn default() -> Self {
    Self {
      group_size: default_group_size(),
      trials: default_trials(),
      progress_interval: default_progress_interval(),
    }
  }
}

impl From<&ThresholdConfig> for ThresholdParams {
  fn from(config: &ThresholdConfig) -> Self {
    Self::new(config.mean, config.std, config.size).with_repeats(config.repeats)
  }
}

impl From<&RankOrderConfig> for RankOrderParams {
  fn from(config: &RankOrderConfig) -> Self {
    Self {
      group_size: config.group_size,
      trials: config.trials,
      progress_interval: config.progress_interval,
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

const fn default_mean() -> f64 {
  2.0
}

const fn default_std() -> f64 {
  0.8
}

const fn default_size() -> usize {
  100_000
}

const fn default_repeats() -> usize {
  DEFAULT_REPEATS
}

const fn default_group_size() -> usize {
  DEFAULT_GROUP_SIZE
}

const fn default_trials() -> u64 {
  DEFAULT_TRIALS
}

const fn default_progress_interval() -> u64 {
  DEFAULT_PROGRESS_INTERVAL
}
