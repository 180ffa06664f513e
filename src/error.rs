//! Application error type shared across all layers.

use serde_json::Value;
use thiserror::Error;

/// Unified error type for validation, lookup, conflict, and storage failures.
///
/// Every variant carries a human-readable message plus structured JSON
/// details for the event log. Errors are handled locally by the caller
/// (logged and the operation aborted); none of them terminate the process.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed validation (e.g. the URL does not start with `http`).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No link matches the requested short code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The short code is already taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// The persisted collection exists but could not be deserialized.
    ///
    /// Surfaced explicitly instead of silently degrading to an empty
    /// collection, so callers can tell a corrupt store from a fresh one.
    #[error("{message}")]
    StorageParse { message: String, details: Value },

    /// Unexpected I/O or serialization failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn storage_parse(message: impl Into<String>, details: Value) -> Self {
        Self::StorageParse {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable error kind, used as event log metadata.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::StorageParse { .. } => "storage_parse_failure",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Borrows the structured details attached to the error.
    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::StorageParse { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

/// Maps a filesystem error to an [`AppError::Internal`] with the failed path.
pub fn map_io_error(e: std::io::Error, path: &std::path::Path) -> AppError {
    AppError::internal(
        "Storage I/O error",
        serde_json::json!({ "path": path.display().to_string(), "source": e.to_string() }),
    )
}
