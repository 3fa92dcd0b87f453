//! Use Cases Layer - The Two Experiments
//!
//! Orchestrates domain logic with the `VariateSource` port. Each use
//! case validates its parameters, draws through the port, and returns
//! a domain estimate.
//!
//! Use cases:
//! - `ThresholdEstimator`: P(x³ + 2x + 1 > 1) for normal x
//! - `RankOrderEstimator`: youngest / oldest / at-least-median frequencies

pub mod rank_order;
pub mod threshold;

pub use rank_order::{RankOrderEstimator, RankOrderParams};
pub use threshold::{check_prob, ThresholdEstimator, ThresholdParams};
