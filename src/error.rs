//! Error types for branchline

use thiserror::Error;

/// Errors produced by branchline
#[derive(Debug, Error)]
pub enum Error {
    /// An accessor was used on a value that cannot carry the requested field
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// Fetching the branch/pull-request inventory failed for a reason other
    /// than "not found"
    #[error("{operation}: {reason}")]
    InventoryLoad {
        /// Fixed description of the failing operation
        operation: &'static str,
        /// Underlying cause
        reason: String,
    },

    /// Invalid configuration (settings, server URL, CLI overrides)
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed input that could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for branchline operations
pub type Result<T> = std::result::Result<T, Error>;
