//! # App Error Type
//!
//! Unified error type for the terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Scoop                                │
//! │                                                                         │
//! │  Terminal                     Command Layer                             │
//! │  ────────                     ─────────────                             │
//! │                                                                         │
//! │  scoop unsell <id> 5                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<(), AppError>                                            │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store error?  ── StoreError::NotFound ─────────┐               │  │
//! │  │         │                                       │               │  │
//! │  │         ▼                                       ▼               │  │
//! │  │  Business rule? ── CoreError::InsufficientSales ── AppError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  main() prints `error: <message>` and exits non-zero                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use scoop_core::{CoreError, ValidationError};
use scoop_store::StoreError;

/// Error surfaced to the terminal user.
///
/// Carries a machine-readable code alongside the message so tests (and
/// any future scripting surface) can branch without string matching.
#[derive(Debug, Clone)]
pub struct AppError {
    /// Machine-readable error category.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

/// Error categories for command outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No product carries the requested id.
    NotFound,

    /// Input validation failed before the store was touched.
    ValidationError,

    /// A sale removal asked for more units than were recorded.
    InsufficientSales,

    /// Reading or writing the snapshot file failed.
    StorageError,

    /// The command line itself was malformed.
    Usage,

    /// Environment problem (e.g., no resolvable data directory).
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Usage, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to app errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => AppError::not_found(&entity, &id),
            StoreError::Corrupt { ref path, .. } => {
                tracing::error!("Corrupt snapshot: {}", err);
                AppError::new(
                    ErrorCode::StorageError,
                    format!(
                        "Stored data at {} is unreadable; fix or move the file",
                        path.display()
                    ),
                )
            }
            StoreError::Io(e) => {
                tracing::error!("Snapshot I/O failed: {}", e);
                AppError::new(ErrorCode::StorageError, format!("Could not access stored data: {e}"))
            }
            StoreError::Serialize(e) => {
                tracing::error!("Snapshot serialization failed: {}", e);
                AppError::new(ErrorCode::StorageError, "Could not write stored data")
            }
        }
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientSales { .. } => {
                AppError::new(ErrorCode::InsufficientSales, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Converts validation errors to app errors.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AppError {}

// =============================================================================
// Unit Tests
// =============================================================================
