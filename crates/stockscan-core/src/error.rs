//! # Error Types
//!
//! Domain-specific error types for stockscan-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockscan-core errors (this file)                                     │
//! │  ├── CoreError        - Scan, access and routing failures              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockscan-db errors (separate crate)                                  │
//! │  └── DbError          - Persistence failures                           │
//! │                                                                         │
//! │  Terminal errors (in app)                                              │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → notification           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recovered Errors
//! Two variants never reach the operator as failures:
//! - [`CoreError::MalformedSnapshot`] - the store loads empty instead
//! - [`CoreError::UnauthorizedAdminAttempt`] - the session downgrades to staff

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is terminal for the single operation that raised it and
/// leaves the inventory unchanged.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A remove was requested for a code that is not in the inventory.
    #[error("Item not found in inventory: {0}")]
    ItemNotFound(String),

    /// A remove asked for more units than are in stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Scan "ABC123" in remove mode
    ///      │
    ///      ▼
    /// Prompt: quantity? → 3
    ///      │
    ///      ▼
    /// Check stock: available=2
    ///      │
    ///      ▼
    /// InsufficientStock { id: "ABC123", available: 2, requested: 3 }
    ///      │
    ///      ▼
    /// Operator sees: "Insufficient stock for Bolt: available 2, requested 3"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        id: String,
        name: String,
        available: u32,
        requested: i64,
    },

    /// An increment would exceed the largest representable quantity.
    #[error("Quantity for {0} cannot grow any further")]
    QuantityOverflow(String),

    /// The persisted inventory payload could not be decoded.
    #[error("Persisted inventory is malformed: {0}")]
    MalformedSnapshot(String),

    /// An admin login used a name that is not on the allow-list.
    #[error("'{0}' is not an authorized admin")]
    UnauthorizedAdminAttempt(String),

    /// An admin-only view or action was requested without admin role.
    #[error("{action} requires admin access")]
    AdminRequired { action: String },

    /// A view was requested while no role is selected.
    #[error("Select an access level first")]
    NoActiveSession,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Duplicate value (e.g., the same id twice in a snapshot).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            id: "ABC123".to_string(),
            name: "Bolt".to_string(),
            available: 2,
            requested: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Bolt: available 2, requested 3"
        );

        let err = CoreError::ItemNotFound("XYZ".to_string());
        assert_eq!(err.to_string(), "Item not found in inventory: XYZ");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "ABC123".to_string(),
        };
        assert_eq!(err.to_string(), "id 'ABC123' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
