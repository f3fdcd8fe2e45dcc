//! Error types for path decoding, storage operations and setup.

use thiserror::Error;

/// Malformed path syntax reported by the path codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid path: path is empty")]
    Empty,

    #[error("invalid path '{path}' at byte {offset}: {reason}")]
    Syntax {
        path: String,
        offset: usize,
        reason: &'static str,
    },
}

/// Errors returned by [`crate::store::Storage`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("key is empty")]
    EmptyKey,

    #[error(transparent)]
    Path(#[from] PathError),

    /// Shortest sub-path whose shape disagrees with the stored tree.
    #[error("property conflict at path {path}")]
    PathConflict { path: String },

    /// The path addresses a value, which has no sub-keys.
    #[error("property path {path} not found")]
    NotFound { path: String },

    #[error("cannot register file '{name}': file limit of {limit} reached")]
    TooManyFiles { name: String, limit: usize },
}

/// Errors from loading configuration or installing the log subscriber.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("logging error: {0}")]
    Logging(String),
}
