//! # Application Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockscan                              │
//! │                                                                         │
//! │  Operator                    Rust Application                           │
//! │  ────────                    ────────────────                           │
//! │                                                                         │
//! │  scans "ABC123" (remove)                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  AppResult<T>                                                    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Database Error? ─── DbError::QueryFailed("...") ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Domain Error? ───── CoreError::ItemNotFound ───── AppError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  ! Item not found in inventory.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error ends the single operation that raised it; the screen loop
//! shows `message` and keeps going. Only startup errors end the program.

use std::fmt;
use std::path::Path;

use stockscan_core::CoreError;
use stockscan_db::DbError;
use thiserror::Error;

/// Error returned from terminal commands.
#[derive(Debug, Clone, Error)]
#[error("[{}] {}", .code.as_str(), .message)]
pub struct AppError {
    /// Machine-readable error code for logs and tests
    pub code: ErrorCode,

    /// Human-readable message shown to the operator
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Scanned code is not in the inventory
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Remove asked for more than is in stock
    InsufficientStock,

    /// Admin-only action attempted without admin role
    Unauthorized,

    /// Action attempted before a role was selected
    NoSession,

    /// Storage operation failed
    DatabaseError,

    /// Configuration could not be resolved
    ConfigError,

    /// Scanner is not running or failed
    ScannerError,

    /// Console read/write failed
    IoError,

    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Stable identifier, used as a log field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::NoSession => "NO_SESSION",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::ScannerError => "SCANNER_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl AppError {
    /// Creates a new application error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ConfigError, message)
    }

    /// Creates a configuration error for a file that failed to load.
    pub fn config_file(path: &Path, reason: impl fmt::Display) -> Self {
        AppError::config(format!("Failed to load {}: {}", path.display(), reason))
    }

    /// Creates a scanner error.
    pub fn scanner(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ScannerError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to application errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => {
                AppError::new(ErrorCode::NotFound, format!("{} not found: {}", entity, id))
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but show a generic message
                tracing::error!("Database query failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Could not save inventory")
            }
            DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Serialization(e) => {
                tracing::error!("Inventory serialization failed: {}", e);
                AppError::new(ErrorCode::Internal, "Could not encode inventory")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to application errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(_) => {
                AppError::new(ErrorCode::NotFound, "Item not found in inventory.")
            }
            e @ CoreError::InsufficientStock { .. } => {
                AppError::new(ErrorCode::InsufficientStock, e.to_string())
            }
            e @ CoreError::QuantityOverflow(_) => AppError::validation(e.to_string()),
            e @ CoreError::MalformedSnapshot(_) => AppError::internal(e.to_string()),
            e @ (CoreError::UnauthorizedAdminAttempt(_) | CoreError::AdminRequired { .. }) => {
                AppError::new(ErrorCode::Unauthorized, e.to_string())
            }
            e @ CoreError::NoActiveSession => AppError::new(ErrorCode::NoSession, e.to_string()),
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

/// Console failures.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::IoError, format!("Console error: {}", err))
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use stockscan_core::ValidationError;

    #[test]
    fn test_item_not_found_uses_operator_wording() {
        let err = AppError::from(CoreError::ItemNotFound("ZZZ".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found in inventory.");
    }

    #[test]
    fn test_insufficient_stock_keeps_detail() {
        let err = AppError::from(CoreError::InsufficientStock {
            id: "ABC123".to_string(),
            name: "Bolt".to_string(),
            available: 2,
            requested: 3,
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.message, "Insufficient stock for Bolt: available 2, requested 3");
    }

    #[test]
    fn test_access_errors_are_unauthorized() {
        let err = AppError::from(CoreError::AdminRequired {
            action: "Add Stock".to_string(),
        });
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let err = AppError::from(CoreError::UnauthorizedAdminAttempt("Mallory".to_string()));
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_validation_passthrough() {
        let err = AppError::from(CoreError::Validation(ValidationError::Required {
            field: "id".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "id is required");
    }

    #[test]
    fn test_db_query_failure_is_generic() {
        let err = AppError::from(DbError::QueryFailed("disk I/O error".to_string()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("disk"));
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::config("fps must be between 1 and 60");
        assert_eq!(err.to_string(), "[CONFIG_ERROR] fps must be between 1 and 60");
    }
}
