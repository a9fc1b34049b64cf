//! # Error Types
//!
//! Domain-specific error types for bar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bar-core errors (this file)                                           │
//! │  ├── CoreError        - Invalid catalog / account snapshots            │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  bar-config errors (separate crate)                                    │
//! │  └── ConfigError      - Startup configuration failures                 │
//! │                                                                         │
//! │  Price resolution itself never fails: see `pricing`.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Raised when a snapshot handed over by an external collaborator (catalog,
/// account store) breaks a domain rule. Resolution never produces these.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An item snapshot failed validation.
    #[error("Invalid item {item_id}: {source}")]
    InvalidItem {
        item_id: String,
        source: ValidationError,
    },

    /// An account snapshot failed validation.
    #[error("Invalid account {account_id}: {source}")]
    InvalidAccount {
        account_id: String,
        source: ValidationError,
    },

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

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}, got '{value}'")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
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
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "promotion".to_string(),
            min: 0.0,
            max: 100.0,
            value: 120.0,
        };
        assert_eq!(
            err.to_string(),
            "promotion must be between 0 and 100, got 120"
        );

        let err = ValidationError::NotAllowed {
            field: "price_role".to_string(),
            value: "gold".to_string(),
            allowed: vec!["normal".to_string(), "vip".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "price_role must be one of: [\"normal\", \"vip\"], got 'gold'"
        );
    }

    #[test]
    fn test_invalid_item_message() {
        let err = CoreError::InvalidItem {
            item_id: "beer-25cl".to_string(),
            source: ValidationError::NotFinite {
                field: "promotion".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid item beer-25cl: promotion must be a finite number"
        );
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
