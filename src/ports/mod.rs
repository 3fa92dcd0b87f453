//! Ports Layer - Boundaries Between Estimators and Randomness
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `VariateSource`: Normal and uniform random variates

pub mod variate_source;

pub use variate_source::VariateSource;
