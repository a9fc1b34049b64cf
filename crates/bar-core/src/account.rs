//! # Accounts
//!
//! The slice of an account the ordering backend needs: who it is for
//! display purposes, whether it may use staff tooling, and which price
//! column it pays.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Price;
use crate::pricing::resolve_price_at;
use crate::types::{AccountPriceRole, Item};

// =============================================================================
// Account Role
// =============================================================================

/// Privilege level of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Plain customer.
    #[default]
    Student,
    Member,
    Admin,
    SuperAdmin,
    /// Hidden administrative account.
    Ghost,
}

impl AccountRole {
    pub const ALL: [AccountRole; 5] = [
        AccountRole::Student,
        AccountRole::Member,
        AccountRole::Admin,
        AccountRole::SuperAdmin,
        AccountRole::Ghost,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Student => "student",
            AccountRole::Member => "member",
            AccountRole::Admin => "admin",
            AccountRole::SuperAdmin => "superadmin",
            AccountRole::Ghost => "ghost",
        }
    }

    /// Whether this role grants access to staff tooling.
    pub const fn has_privileges(&self) -> bool {
        match self {
            AccountRole::Admin
            | AccountRole::SuperAdmin
            | AccountRole::Member
            | AccountRole::Ghost => true,
            AccountRole::Student => false,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AccountRole::ALL
            .into_iter()
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "role".to_string(),
                value: s.to_string(),
                allowed: AccountRole::ALL
                    .iter()
                    .map(|r| r.as_str().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Account
// =============================================================================

/// An account snapshot, as handed over by the account store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Account {
    /// UUID v4 string.
    pub id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email_address: String,

    #[serde(default)]
    pub role: AccountRole,

    #[serde(default)]
    pub price_role: AccountPriceRole,
}

impl Account {
    /// Display name.
    ///
    /// Falls back from "First Last" to the email address to the id.
    ///
    /// ```rust
    /// use bar_core::account::Account;
    ///
    /// let account = Account {
    ///     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
    ///     email_address: "jane@example.org".to_string(),
    ///     ..Account::default()
    /// };
    /// assert_eq!(account.name(), "jane@example.org");
    /// ```
    pub fn name(&self) -> String {
        if !self.first_name.is_empty() && !self.last_name.is_empty() {
            return format!("{} {}", self.first_name, self.last_name);
        }
        if !self.email_address.is_empty() {
            return self.email_address.clone();
        }
        self.id.clone()
    }

    #[inline]
    pub fn has_privileges(&self) -> bool {
        self.role.has_privileges()
    }

    /// What this account pays for `item` at the instant `now`.
    pub fn price_of(&self, item: &Item, now: u64) -> Price {
        resolve_price_at(item, self.price_role, now)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemPrices;

    const ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn account(first: &str, last: &str, email: &str) -> Account {
        Account {
            id: ID.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email_address: email.to_string(),
            ..Account::default()
        }
    }

    #[test]
    fn test_name_fallbacks() {
        assert_eq!(account("Jane", "Doe", "jane@example.org").name(), "Jane Doe");
        assert_eq!(account("Jane", "", "jane@example.org").name(), "jane@example.org");
        assert_eq!(account("", "Doe", "jane@example.org").name(), "jane@example.org");
        assert_eq!(account("Jane", "", "").name(), ID);
        assert_eq!(account("", "", "").name(), ID);
    }

    #[test]
    fn test_privileges() {
        assert!(AccountRole::Admin.has_privileges());
        assert!(AccountRole::SuperAdmin.has_privileges());
        assert!(AccountRole::Member.has_privileges());
        assert!(AccountRole::Ghost.has_privileges());
        assert!(!AccountRole::Student.has_privileges());

        let mut acc = account("Jane", "Doe", "");
        assert!(!acc.has_privileges());
        acc.role = AccountRole::Member;
        assert!(acc.has_privileges());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("superadmin".parse::<AccountRole>().unwrap(), AccountRole::SuperAdmin);
        assert_eq!("Ghost".parse::<AccountRole>().unwrap(), AccountRole::Ghost);
        assert!("root".parse::<AccountRole>().is_err());

        let role: AccountRole = serde_json::from_str("\"superadmin\"").unwrap();
        assert_eq!(role, AccountRole::SuperAdmin);
    }

    #[test]
    fn test_price_of_uses_price_role() {
        let item = Item {
            prices: ItemPrices {
                normal: Price::from_minor(1000),
                staff: Price::from_minor(400),
                ..ItemPrices::default()
            },
            promotion: Some(25.0),
            ..Item::default()
        };

        let mut acc = account("Sam", "Lee", "");
        assert_eq!(acc.price_of(&item, 0).minor(), 750);
        acc.price_role = AccountPriceRole::Staff;
        assert_eq!(acc.price_of(&item, 0).minor(), 300);
    }
}
