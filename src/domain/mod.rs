//! Domain layer - Pure probability logic and result models.
//!
//! Nothing in here draws random numbers. The estimators in `usecases`
//! feed samples in; these modules decide what counts as an event and
//! how counts become probabilities.

pub mod error;
pub mod estimate;
pub mod polynomial;
pub mod rank;

// Re-export core types for convenience
pub use error::SimulationError;
pub use estimate::{RankOrderEstimate, ThresholdEstimate};
pub use rank::RankEvents;
