//! Store error types.
//!
//! Typed so callers can distinguish a missing entity from a real I/O or
//! serialization failure without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the file-backed quiz/result store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No stored entity under the given name.
    #[error("not found: {0}")]
    NotFound(String),

    /// The quiz failed validation and was not written.
    #[error("cannot save invalid quiz: {}", .0.join("; "))]
    InvalidQuiz(Vec<String>),

    /// An underlying filesystem operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored file could not be (de)serialized.
    #[error("serialization error at {path}: {source}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns `true` if this error means the entity simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
