//! Elo rating engine
//!
//! This module provides a concrete implementation of the pre-match/post-match
//! rating update using the Elo algorithm from the skillratings crate. All
//! functions are pure and deterministic; rounding happens only at emission
//! time, never inside the engine.

use crate::config::RatingSettings;
use serde::{Deserialize, Serialize};
use skillratings::elo::{elo, expected_score, EloConfig, EloRating};
use skillratings::Outcomes;

/// Outcome of one match from the first side's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    FirstWin,
    SecondWin,
    Draw,
}

impl MatchOutcome {
    /// Map a raw outcome field onto a match outcome.
    ///
    /// Token comparison is case-insensitive. Any value that is neither side
    /// marker (empty fields, draw markers, unrecognized tokens) scores as
    /// a draw.
    pub fn from_winner_token(token: &str, first_marker: &str, second_marker: &str) -> Self {
        if token.eq_ignore_ascii_case(first_marker) {
            MatchOutcome::FirstWin
        } else if token.eq_ignore_ascii_case(second_marker) {
            MatchOutcome::SecondWin
        } else {
            MatchOutcome::Draw
        }
    }

    /// Actual scores awarded to (first, second)
    pub fn scores(&self) -> (f64, f64) {
        match self {
            MatchOutcome::FirstWin => (1.0, 0.0),
            MatchOutcome::SecondWin => (0.0, 1.0),
            MatchOutcome::Draw => (0.5, 0.5),
        }
    }
}

impl From<MatchOutcome> for Outcomes {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::FirstWin => Outcomes::WIN,
            MatchOutcome::SecondWin => Outcomes::LOSS,
            MatchOutcome::Draw => Outcomes::DRAW,
        }
    }
}

/// Extended configuration for the Elo rating system
/// This wraps the skillratings EloConfig with the initial rating policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedEloConfig {
    /// Core Elo parameters (k-factor)
    pub elo_config: EloConfig,
    /// Rating assigned to entities on first reference
    pub initial_rating: f64,
}

impl Default for ExtendedEloConfig {
    fn default() -> Self {
        Self {
            elo_config: EloConfig::new(),
            initial_rating: 1500.0,
        }
    }
}

impl ExtendedEloConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.elo_config.k.is_finite() || self.elo_config.k <= 0.0 {
            return Err(crate::error::AugmentError::ConfigurationError {
                message: "K-factor must be positive".to_string(),
            }
            .into());
        }

        if !self.initial_rating.is_finite() {
            return Err(crate::error::AugmentError::ConfigurationError {
                message: "Initial rating must be finite".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl From<&RatingSettings> for ExtendedEloConfig {
    fn from(settings: &RatingSettings) -> Self {
        Self {
            elo_config: EloConfig {
                k: settings.k_factor,
            },
            initial_rating: settings.initial_rating,
        }
    }
}

/// Elo rating calculator
#[derive(Debug)]
pub struct EloCalculator {
    config: ExtendedEloConfig,
}

impl EloCalculator {
    /// Create a new Elo calculator
    pub fn new(config: ExtendedEloConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Create a calculator from the runtime rating settings
    pub fn from_settings(settings: &RatingSettings) -> crate::error::Result<Self> {
        Self::new(ExtendedEloConfig::from(settings))
    }

    /// Rating assigned to entities on first reference
    pub fn initial_rating(&self) -> f64 {
        self.config.initial_rating
    }

    /// Configured k-factor
    pub fn k_factor(&self) -> f64 {
        self.config.elo_config.k
    }

    /// Probability in (0, 1) that the first side wins, given both current
    /// ratings: `1 / (1 + 10^((second - first) / 400))`
    pub fn expected_score(&self, first: f64, second: f64) -> f64 {
        let (first_expected, _) = expected_score(
            &EloRating { rating: first },
            &EloRating { rating: second },
        );
        first_expected
    }

    /// Post-match ratings for both sides: `r + k * (actual - expected)`
    pub fn rate_pair(&self, first: f64, second: f64, outcome: MatchOutcome) -> (f64, f64) {
        let (new_first, new_second) = elo(
            &EloRating { rating: first },
            &EloRating { rating: second },
            &outcome.into(),
            &self.config.elo_config,
        );

        (new_first.rating, new_second.rating)
    }
}
