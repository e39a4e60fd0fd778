//! Error types for the augmentation tool
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific augmentation failures
#[derive(Debug, thiserror::Error)]
pub enum AugmentError {
    #[error("Required column '{column}' not found in header")]
    MissingColumn { column: String },

    #[error("Input has no header row")]
    MissingHeader,

    #[error("Input file '{path}' not found")]
    InputNotFound { path: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
