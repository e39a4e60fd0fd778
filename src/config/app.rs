//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! augmentation tool, including environment variable loading, TOML file
//! loading, and validation.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::config::rating::RatingSettings;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub schema: SchemaSettings,
    pub rating: RatingSettings,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Names of the required input columns and the winner tokens they carry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSettings {
    /// Column holding the first side's identifier
    pub first_entity_column: String,
    /// Column holding the second side's identifier
    pub second_entity_column: String,
    /// Column holding the outcome indicator
    pub outcome_column: String,
    /// Outcome token naming the first side as winner
    pub first_side_token: String,
    /// Outcome token naming the second side as winner
    pub second_side_token: String,
}

/// Names of the appended output columns and the derived-path suffix
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Appended column for the first side's pre-match rating
    pub first_rating_column: String,
    /// Appended column for the second side's pre-match rating
    pub second_rating_column: String,
    /// Appended column for the pre-match rating difference (first minus second)
    pub difference_column: String,
    /// Suffix inserted before the extension when the output path is derived
    pub path_suffix: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "elo-ledger".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            first_entity_column: "r_fighter".to_string(),
            second_entity_column: "b_fighter".to_string(),
            outcome_column: "winner".to_string(),
            first_side_token: "Red".to_string(),
            second_side_token: "Blue".to_string(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            first_rating_column: "r_elo".to_string(),
            second_rating_column: "b_elo".to_string(),
            difference_column: "elo_diff".to_string(),
            path_suffix: "_with_elo".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Schema settings
        if let Ok(column) = env::var("FIRST_ENTITY_COLUMN") {
            config.schema.first_entity_column = column;
        }
        if let Ok(column) = env::var("SECOND_ENTITY_COLUMN") {
            config.schema.second_entity_column = column;
        }
        if let Ok(column) = env::var("OUTCOME_COLUMN") {
            config.schema.outcome_column = column;
        }
        if let Ok(token) = env::var("FIRST_SIDE_TOKEN") {
            config.schema.first_side_token = token;
        }
        if let Ok(token) = env::var("SECOND_SIDE_TOKEN") {
            config.schema.second_side_token = token;
        }

        // Rating settings
        if let Ok(rating) = env::var("INITIAL_RATING") {
            config.rating.initial_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid INITIAL_RATING value: {}", rating))?;
        }
        if let Ok(k) = env::var("K_FACTOR") {
            config.rating.k_factor = k
                .parse()
                .map_err(|_| anyhow!("Invalid K_FACTOR value: {}", k))?;
        }

        // Output settings
        if let Ok(suffix) = env::var("OUTPUT_PATH_SUFFIX") {
            config.output.path_suffix = suffix;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, applying defaults for missing keys
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate schema settings
    let columns = [
        &config.schema.first_entity_column,
        &config.schema.second_entity_column,
        &config.schema.outcome_column,
    ];
    if columns.iter().any(|c| c.is_empty()) {
        return Err(anyhow!("Required column names cannot be empty"));
    }
    if columns[0] == columns[1] || columns[0] == columns[2] || columns[1] == columns[2] {
        return Err(anyhow!("Required column names must be distinct"));
    }

    if config.schema.first_side_token.is_empty() || config.schema.second_side_token.is_empty() {
        return Err(anyhow!("Winner tokens cannot be empty"));
    }
    if config
        .schema
        .first_side_token
        .eq_ignore_ascii_case(&config.schema.second_side_token)
    {
        return Err(anyhow!("Winner tokens must be distinct"));
    }

    // Validate rating settings
    config.rating.validate()?;

    // Validate output settings
    if config.output.first_rating_column.is_empty()
        || config.output.second_rating_column.is_empty()
        || config.output.difference_column.is_empty()
    {
        return Err(anyhow!("Appended column names cannot be empty"));
    }
    if config.output.path_suffix.is_empty() {
        return Err(anyhow!("Output path suffix cannot be empty"));
    }

    Ok(())
}
