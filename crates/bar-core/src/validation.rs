//! # Validation Module
//!
//! Checks run on snapshots at the boundary, before they reach the resolver.
//!
//! ## Where This Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog / account store                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: promotion range, id format, role names                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  pricing::resolve_* (never fails, trusts its input)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bar_core::validation::{parse_price_role, validate_promotion};
//!
//! assert!(validate_promotion(15.0).is_ok());
//! assert!(validate_promotion(150.0).is_err());
//! assert!(parse_price_role("vip").is_ok());
//! ```

use crate::account::{Account, AccountRole};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{AccountPriceRole, Item};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Lowest accepted promotion percentage.
pub const MIN_PROMOTION_PERCENT: f64 = 0.0;

/// Highest accepted promotion percentage.
pub const MAX_PROMOTION_PERCENT: f64 = 100.0;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a promotion percentage.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be within 0..=100
pub fn validate_promotion(percent: f64) -> ValidationResult<()> {
    if !percent.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "promotion".to_string(),
        });
    }

    if !(MIN_PROMOTION_PERCENT..=MAX_PROMOTION_PERCENT).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "promotion".to_string(),
            min: MIN_PROMOTION_PERCENT,
            max: MAX_PROMOTION_PERCENT,
            value: percent,
        });
    }

    Ok(())
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a UUID string.
pub fn validate_uuid(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Snapshot Validators
// =============================================================================

/// Validates an item snapshot.
///
/// A promotion end without a promotion is accepted: it is ignored anyway.
pub fn validate_item(item: &Item) -> CoreResult<()> {
    let invalid = |source: ValidationError| CoreError::InvalidItem {
        item_id: item.id.clone(),
        source,
    };

    if item.id.trim().is_empty() {
        return Err(invalid(ValidationError::Required {
            field: "id".to_string(),
        }));
    }

    if let Some(percent) = item.promotion {
        validate_promotion(percent).map_err(invalid)?;
    }

    Ok(())
}

/// Validates an account snapshot.
pub fn validate_account(account: &Account) -> CoreResult<()> {
    validate_uuid("id", &account.id).map_err(|source| CoreError::InvalidAccount {
        account_id: account.id.clone(),
        source,
    })
}

// =============================================================================
// String Boundary
// =============================================================================

/// Parses a price role name (case-insensitive).
pub fn parse_price_role(name: &str) -> ValidationResult<AccountPriceRole> {
    name.parse()
}

/// Parses an account role name (case-insensitive).
pub fn parse_account_role(name: &str) -> ValidationResult<AccountRole> {
    name.parse()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_promotion() {
        assert!(validate_promotion(0.0).is_ok());
        assert!(validate_promotion(12.5).is_ok());
        assert!(validate_promotion(100.0).is_ok());

        assert!(validate_promotion(-0.1).is_err());
        assert!(validate_promotion(100.1).is_err());
        assert!(matches!(
            validate_promotion(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(validate_promotion(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("id", "550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(matches!(
            validate_uuid("id", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_uuid("id", "not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_item() {
        let mut item = Item {
            id: "coffee".to_string(),
            promotion: Some(20.0),
            ..Item::default()
        };
        assert!(validate_item(&item).is_ok());

        item.promotion = Some(120.0);
        let err = validate_item(&item).unwrap_err();
        assert!(matches!(err, CoreError::InvalidItem { ref item_id, .. } if item_id == "coffee"));

        item.promotion = None;
        item.promotion_ends_at = Some(0);
        assert!(validate_item(&item).is_ok());

        item.id = "  ".to_string();
        assert!(validate_item(&item).is_err());
    }

    #[test]
    fn test_validate_account() {
        let mut account = Account {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            ..Account::default()
        };
        assert!(validate_account(&account).is_ok());

        account.id = "42".to_string();
        assert!(matches!(
            validate_account(&account),
            Err(CoreError::InvalidAccount { .. })
        ));
    }

    #[test]
    fn test_parse_roles() {
        assert_eq!(parse_price_role("Exte").unwrap(), AccountPriceRole::Exte);
        assert!(parse_price_role("gold").is_err());
        assert_eq!(parse_account_role("admin").unwrap(), AccountRole::Admin);
        assert!(parse_account_role("owner").is_err());
    }
}
