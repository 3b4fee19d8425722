//! Error types for CoNLL-U input and output.

use thiserror::Error;

/// Errors that can occur while reading or writing CoNLL-U.
#[derive(Debug, Error)]
pub enum ConlluError {
    /// A malformed word line.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error reading or writing the underlying stream.
    #[error("i/o error: {path}: {message}")]
    Io { path: String, message: String },
}

impl ConlluError {
    pub(crate) fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        ConlluError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for CoNLL-U operations.
pub type ConlluResult<T> = Result<T, ConlluError>;
