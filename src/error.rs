//! Unified error types for renview
//!
//! Library code returns [`RenviewError`]; the interactive application glue
//! works with `anyhow::Result` on top of it.

use std::path::PathBuf;

/// Unified error type for renview operations
#[derive(Debug, thiserror::Error)]
pub enum RenviewError {
    /// I/O errors (listing, renaming, metadata)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path validation errors (boundary, missing folder)
    #[error("Path error: {path} - {reason}")]
    Path { path: PathBuf, reason: String },

    /// A rename target is already taken
    #[error("target '{0}' already exists")]
    TargetExists(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience Result type using RenviewError
pub type Result<T> = std::result::Result<T, RenviewError>;

impl RenviewError {
    /// Create a Path error
    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an Internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
