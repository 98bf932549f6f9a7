//! # Store Error Types
//!
//! Error types for persistence and lookup operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in the CLI) ← Mapped to a user-facing message               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the store.
    ///
    /// ## When This Occurs
    /// - An update or delete names an id no product carries
    ///
    /// The documented contract: when this fires, the collection and the
    /// persisted file are exactly as they were before the call.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The snapshot file exists but does not parse.
    ///
    /// ## When This Occurs
    /// - Hand-edited document with a syntax error
    /// - Truncation by something other than our atomic write path
    ///
    /// Deliberately NOT silently replaced with an empty store: that would
    /// turn one bad byte into total data loss.
    #[error("Snapshot file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Reading or writing the snapshot file failed.
    ///
    /// ## When This Occurs
    /// - Missing permissions, disk full, path in a read-only location
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the snapshot document failed.
    #[error("Snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Product", "abc-123");
        assert_eq!(err.to_string(), "Product not found: abc-123");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
