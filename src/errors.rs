//! Error types for configuration and model persistence.
//!
//! Parsing itself never fails; invalid actions are corrected by the engine.

use thiserror::Error;

/// Errors raised while loading configuration or trained models.
#[derive(Debug, Error)]
pub enum DepParseError {
    /// Error reading or decoding a training configuration.
    #[error("failed to load config: {path}: {message}")]
    Config { path: String, message: String },

    /// Error encoding or decoding a trained predictor.
    #[error("invalid model: {message}")]
    Model { message: String },
}

/// Result type for configuration and persistence operations.
pub type DepParseResult<T> = Result<T, DepParseError>;
