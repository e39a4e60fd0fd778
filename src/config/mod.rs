//! Configuration management for the augmentation tool
//!
//! This module handles all configuration loading from environment variables,
//! optional TOML files, validation, and default values.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, OutputSettings, SchemaSettings, ServiceSettings};
pub use rating::RatingSettings;
