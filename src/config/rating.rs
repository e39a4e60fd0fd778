//! Rating system configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Elo parameters for one augmentation pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Rating assigned to an entity on first reference
    pub initial_rating: f64,
    /// Sensitivity constant applied to (actual - expected)
    pub k_factor: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            initial_rating: 1500.0,
            k_factor: 32.0,
        }
    }
}

impl RatingSettings {
    /// Validate rating parameters
    pub fn validate(&self) -> Result<()> {
        if !self.initial_rating.is_finite() {
            return Err(anyhow!("Initial rating must be finite"));
        }
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(anyhow!("K-factor must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RatingSettings::default();
        assert_eq!(settings.initial_rating, 1500.0);
        assert_eq!(settings.k_factor, 32.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_nonpositive_k_rejected() {
        let settings = RatingSettings {
            k_factor: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = RatingSettings {
            k_factor: -8.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_nonfinite_initial_rating_rejected() {
        let settings = RatingSettings {
            initial_rating: f64::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
