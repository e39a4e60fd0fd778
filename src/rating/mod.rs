//! Rating system built on the standard Elo algorithm
//!
//! This module provides the per-entity rating store and the Elo update
//! engine, integrating with the skillratings crate for the rating math.

pub mod elo;
pub mod store;

// Re-export commonly used types
pub use elo::{EloCalculator, ExtendedEloConfig, MatchOutcome};
pub use store::RatingStore;
