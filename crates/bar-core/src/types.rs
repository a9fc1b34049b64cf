//! # Domain Types
//!
//! Catalog types consumed by the price resolver.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                 │
//! │  │        Item         │        │     ItemPrices      │                 │
//! │  │  ─────────────────  │  owns  │  ─────────────────  │                 │
//! │  │  id, name           │───────►│  ceten   (Price)    │                 │
//! │  │  prices             │        │  exte    (Price)    │                 │
//! │  │  promotion (%)      │        │  normal  (Price)    │                 │
//! │  │  promotion_ends_at  │        │  staff   (Price)    │                 │
//! │  └─────────────────────┘        │  vip     (Price)    │                 │
//! │                                 └──────────▲──────────┘                 │
//! │                                            │ selects one column         │
//! │                                 ┌──────────┴──────────┐                 │
//! │                                 │  AccountPriceRole   │                 │
//! │                                 └─────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type here is a read-only snapshot owned by the catalog. Nothing in
//! this crate creates or mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Price;

// =============================================================================
// Account Price Role
// =============================================================================

/// Selects which price column of an item applies to an account.
///
/// Exactly one role per account at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AccountPriceRole {
    /// Members of the CETEN association.
    Ceten,
    /// External guests.
    Exte,
    /// Regular customers.
    #[default]
    Normal,
    /// Bar staff.
    Staff,
    /// VIP customers.
    Vip,
}

impl AccountPriceRole {
    /// Every price role, in the column order of `ItemPrices`.
    pub const ALL: [AccountPriceRole; 5] = [
        AccountPriceRole::Ceten,
        AccountPriceRole::Exte,
        AccountPriceRole::Normal,
        AccountPriceRole::Staff,
        AccountPriceRole::Vip,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            AccountPriceRole::Ceten => "ceten",
            AccountPriceRole::Exte => "exte",
            AccountPriceRole::Normal => "normal",
            AccountPriceRole::Staff => "staff",
            AccountPriceRole::Vip => "vip",
        }
    }
}

impl fmt::Display for AccountPriceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AccountPriceRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AccountPriceRole::ALL
            .into_iter()
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "price_role".to_string(),
                value: s.to_string(),
                allowed: AccountPriceRole::ALL
                    .iter()
                    .map(|r| r.as_str().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Item Prices
// =============================================================================

/// One price per account tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemPrices {
    pub ceten: Price,
    pub exte: Price,
    pub normal: Price,
    pub staff: Price,
    pub vip: Price,
}

impl ItemPrices {
    /// Returns the price of the column selected by `role`.
    #[inline]
    pub const fn get(&self, role: AccountPriceRole) -> Price {
        match role {
            AccountPriceRole::Ceten => self.ceten,
            AccountPriceRole::Exte => self.exte,
            AccountPriceRole::Normal => self.normal,
            AccountPriceRole::Staff => self.staff,
            AccountPriceRole::Vip => self.vip,
        }
    }

    /// Builds a new table by applying `f` to every column.
    pub fn map<F>(&self, mut f: F) -> ItemPrices
    where
        F: FnMut(Price) -> Price,
    {
        ItemPrices {
            ceten: f(self.ceten),
            exte: f(self.exte),
            normal: f(self.normal),
            staff: f(self.staff),
            vip: f(self.vip),
        }
    }

    /// Iterates over `(role, price)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (AccountPriceRole, Price)> + '_ {
        AccountPriceRole::ALL
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }
}

impl Index<AccountPriceRole> for ItemPrices {
    type Output = Price;

    fn index(&self, role: AccountPriceRole) -> &Price {
        match role {
            AccountPriceRole::Ceten => &self.ceten,
            AccountPriceRole::Exte => &self.exte,
            AccountPriceRole::Normal => &self.normal,
            AccountPriceRole::Staff => &self.staff,
            AccountPriceRole::Vip => &self.vip,
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// Whether an item is currently offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    #[default]
    Buyable,
    NotBuyable,
}

/// A catalog item snapshot.
///
/// The resolver only reads `prices`, `promotion` and `promotion_ends_at`.
/// The remaining fields travel with the snapshot for the caller's benefit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,

    #[serde(default)]
    pub category_id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub picture_uri: Option<String>,

    pub prices: ItemPrices,

    /// Discount percentage (0-100) applied to every tier.
    #[serde(default)]
    pub promotion: Option<f64>,

    /// Unix timestamp (seconds) after which `promotion` no longer applies.
    /// Ignored when `promotion` is `None`.
    #[serde(default)]
    pub promotion_ends_at: Option<u64>,

    #[serde(default)]
    pub state: ItemState,

    #[serde(default)]
    pub amount_left: u64,

    /// Maximum units per order, if limited.
    #[serde(default)]
    pub buy_limit: Option<u64>,
}

// =============================================================================
// Unit Tests
// =============================================================================
