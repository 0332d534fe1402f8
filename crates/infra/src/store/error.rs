//! Store error model.

use std::path::PathBuf;

use stockbook_core::DomainError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by [`EntityStore`](super::EntityStore).
///
/// Every failure leaves the in-memory entries exactly as they were before the call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An entity with the same id is already stored.
    #[error("duplicate key: entity with id {0} already exists")]
    DuplicateKey(String),

    /// No entity with this id is stored.
    #[error("not found: no entity with id {0}")]
    NotFound(String),

    /// Reading, writing, or creating the backing location failed.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entity set could not be encoded; nothing was written.
    #[error("serialization error for {}: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file exists but does not hold a valid entity set.
    #[error("malformed data in {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    /// A copy-with-change routed through the store was rejected by the entity.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StoreError {
    pub fn duplicate_key(id: impl core::fmt::Display) -> Self {
        Self::DuplicateKey(id.to_string())
    }

    pub fn not_found(id: impl core::fmt::Display) -> Self {
        Self::NotFound(id.to_string())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
