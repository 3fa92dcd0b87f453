//! Simulation errors.
//!
//! Every estimator entry point returns `Result<_, SimulationError>`.
//! The binary wraps these in `anyhow` and fails fast.

use thiserror::Error;

/// Reasons an experiment refuses to run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The normal distribution rejected its parameters.
    #[error("invalid normal distribution (mean={mean}, std={std}): {reason}")]
    InvalidNormal {
        /// Requested mean.
        mean: f64,
        /// Requested standard deviation.
        std: f64,
        /// Rejection reason reported by the sampler.
        reason: String,
    },

    /// A threshold trial was asked to draw zero samples.
    #[error("sample size must be positive")]
    EmptySample,

    /// The threshold experiment was asked for zero repeats.
    #[error("repeat count must be positive")]
    NoRepeats,

    /// The rank-order experiment was asked for a group with nobody in it.
    #[error("group size must be at least 1")]
    EmptyGroup,

    /// The rank-order experiment was asked for zero trials.
    #[error("trial count must be positive")]
    NoTrials,

    /// A variate source returned a different number of samples than requested.
    #[error("variate source returned {actual} samples, expected {expected}")]
    ShortDraw {
        /// Samples requested.
        expected: usize,
        /// Samples received.
        actual: usize,
    },
}
