//! Error types for itemql
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ItemError
pub type Result<T> = std::result::Result<T, ItemError>;

/// Unified error type for itemql operations
#[derive(Debug, Error)]
pub enum ItemError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Not able to read file {}: {source}", path.display())]
    StorageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Not able to write file {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed collection in {}: {source}", path.display())]
    StorageFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ItemError {
    /// Whether this error comes from the data file rather than the query.
    ///
    /// Storage errors fail the request with a server error status; every
    /// other kind is a client-side problem.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            ItemError::Io(_)
                | ItemError::StorageRead { .. }
                | ItemError::StorageWrite { .. }
                | ItemError::StorageFormat { .. }
        )
    }
}
