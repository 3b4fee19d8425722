//! Error types for the round-trip harness.

use layered_conllu::ConlluError;
use thiserror::Error;

/// Errors that can occur while loading fixtures or expected failures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture or expected-failures file.
    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// Error reading a fixture or expected-failures file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },
}

impl SpecError {
    pub(crate) fn from_conllu(path: impl Into<String>, err: ConlluError) -> Self {
        let path = path.into();
        match err {
            ConlluError::Parse { .. } => SpecError::Parse {
                path,
                message: err.to_string(),
            },
            ConlluError::Io { message, .. } => SpecError::Load { path, message },
        }
    }
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;
