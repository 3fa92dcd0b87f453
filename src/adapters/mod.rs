//! Adapters Layer - Concrete Randomness and Output
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies, and renders results for stdout.
//!
//! Adapter categories:
//! - `rng`: Seeded ChaCha sampler implementing `VariateSource`
//! - `report`: Text / JSON result writer

pub mod report;
pub mod rng;

pub use report::{OutputFormat, Report};
pub use rng::SeededSampler;
