//! Elo Ledger - chronological Elo feature augmentation for match datasets
//!
//! This crate reads a chronologically ordered CSV of paired-competitor
//! matches and appends three pre-match Elo columns to every row, computed
//! in a single ordered pass over the stream.

pub mod config;
pub mod error;
pub mod processor;
pub mod rating;
pub mod schema;
pub mod utils;

// Re-export commonly used types
pub use error::{AugmentError, Result};
pub use processor::{PassSummary, StreamProcessor};
pub use rating::{EloCalculator, MatchOutcome, RatingStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
