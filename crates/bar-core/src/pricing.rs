//! # Price Resolution
//!
//! Turns an item's base price table, the account's price role and the
//! promotion state into what the account is actually charged.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       resolve_price(item, role)                         │
//! │                                                                         │
//! │   item.prices[role]  ──►  base                                          │
//! │          │                                                              │
//! │          ▼                                                              │
//! │   promotion?  ── None ───────────────────────────────►  base            │
//! │          │                                                              │
//! │          ▼ Some(p)                                                      │
//! │   ends_at < now?  ── yes (lapsed) ───────────────────►  base            │
//! │          │                                                              │
//! │          ▼ no, or no expiry                                             │
//! │   floor(base × (1 - p/100))  ────────────────────────►  discounted      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `now == ends_at` still counts as active: a promotion lapses only once the
//! clock is strictly past its end.
//!
//! ## Clock
//! The current time is the only input that does not come from the caller.
//! Every operation comes in three shapes:
//!
//! | Form                     | Time source            |
//! |--------------------------|------------------------|
//! | `resolve_price`          | [`SystemClock`]        |
//! | `resolve_price_with`     | any [`Clock`]          |
//! | `resolve_price_at`       | explicit Unix seconds  |
//!
//! `resolve_all_prices*` read the clock once for all five tiers, so
//! `resolve_all_prices_at(item, t)[role] == resolve_price_at(item, role, t)`.
//!
//! ## Example
//! ```rust
//! use bar_core::money::Price;
//! use bar_core::pricing::{resolve_all_prices_at, resolve_price_at};
//! use bar_core::types::{AccountPriceRole, Item, ItemPrices};
//!
//! let item = Item {
//!     prices: ItemPrices {
//!         normal: Price::from_minor(1000),
//!         vip: Price::from_minor(800),
//!         ..ItemPrices::default()
//!     },
//!     promotion: Some(10.0),
//!     ..Item::default()
//! };
//!
//! let now = 1_700_000_000;
//! assert_eq!(resolve_price_at(&item, AccountPriceRole::Normal, now).minor(), 900);
//! assert_eq!(resolve_price_at(&item, AccountPriceRole::Vip, now).minor(), 720);
//! assert_eq!(resolve_all_prices_at(&item, now).vip.minor(), 720);
//! ```

use chrono::Utc;
use tracing::{debug, warn};

use crate::money::Price;
use crate::types::{AccountPriceRole, Item, ItemPrices};

// =============================================================================
// Clock
// =============================================================================

/// Source of the current time in Unix seconds.
pub trait Clock {
    fn now_unix(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> u64 {
        // Pre-1970 clocks clamp to the epoch
        Utc::now().timestamp().max(0) as u64
    }
}

/// A clock stuck at one instant. Used by tests and by `--at` on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix(&self) -> u64 {
        self.0
    }
}

// =============================================================================
// Promotion Status
// =============================================================================

/// Where an item's promotion stands at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromotionStatus {
    /// The item has no promotion.
    Absent,

    /// The promotion applies.
    Active { percent: f64, ends_at: Option<u64> },

    /// The promotion ended before the evaluated instant.
    Expired { percent: f64, ends_at: u64 },
}

impl PromotionStatus {
    /// Returns the percentage to apply, if any.
    #[inline]
    pub fn active_percent(&self) -> Option<f64> {
        match self {
            PromotionStatus::Active { percent, .. } => Some(*percent),
            PromotionStatus::Absent | PromotionStatus::Expired { .. } => None,
        }
    }
}

impl Item {
    /// Evaluates the promotion against `now` (Unix seconds).
    pub fn promotion_status(&self, now: u64) -> PromotionStatus {
        let Some(percent) = self.promotion else {
            return PromotionStatus::Absent;
        };

        match self.promotion_ends_at {
            Some(ends_at) if now > ends_at => PromotionStatus::Expired { percent, ends_at },
            ends_at => PromotionStatus::Active { percent, ends_at },
        }
    }

    /// Shorthand for `promotion_status(now)` being `Active`.
    #[inline]
    pub fn has_active_promotion(&self, now: u64) -> bool {
        self.promotion_status(now).active_percent().is_some()
    }

    /// Price charged to `role` right now.
    pub fn real_price(&self, role: AccountPriceRole) -> Price {
        resolve_price(self, role)
    }

    /// Full price table as charged right now.
    pub fn real_prices(&self) -> ItemPrices {
        resolve_all_prices(self)
    }
}

// =============================================================================
// Resolution
// =============================================================================

fn active_percent(item: &Item, now: u64) -> Option<f64> {
    match item.promotion_status(now) {
        PromotionStatus::Expired { ends_at, .. } => {
            debug!(item_id = %item.id, ends_at, now, "Promotion expired, using base price");
            None
        }
        status => status.active_percent(),
    }
}

/// Resolves the price for `role` at the instant `now`.
pub fn resolve_price_at(item: &Item, role: AccountPriceRole, now: u64) -> Price {
    let base = item.prices.get(role);

    match active_percent(item, now) {
        Some(percent) => base.apply_promotion(percent),
        None => base,
    }
}

/// Resolves the price for `role`, reading the time from `clock`.
pub fn resolve_price_with<C>(item: &Item, role: AccountPriceRole, clock: &C) -> Price
where
    C: Clock + ?Sized,
{
    resolve_price_at(item, role, clock.now_unix())
}

/// Resolves the price for `role` against the wall clock.
pub fn resolve_price(item: &Item, role: AccountPriceRole) -> Price {
    resolve_price_with(item, role, &SystemClock)
}

/// Resolves every tier at the instant `now`.
///
/// The promotion check runs once; all five columns get the same treatment.
pub fn resolve_all_prices_at(item: &Item, now: u64) -> ItemPrices {
    match active_percent(item, now) {
        Some(percent) => item.prices.map(|base| base.apply_promotion(percent)),
        None => item.prices,
    }
}

/// Resolves every tier, reading the time from `clock` once.
pub fn resolve_all_prices_with<C>(item: &Item, clock: &C) -> ItemPrices
where
    C: Clock + ?Sized,
{
    resolve_all_prices_at(item, clock.now_unix())
}

/// Resolves every tier against the wall clock.
pub fn resolve_all_prices(item: &Item) -> ItemPrices {
    resolve_all_prices_with(item, &SystemClock)
}

/// Resolves a price from a role name as stored on legacy account records.
///
/// An unknown name resolves to zero instead of failing. Callers that can
/// reject bad input should parse with `AccountPriceRole::from_str` first.
pub fn resolve_price_for_role_name(item: &Item, role_name: &str, now: u64) -> Price {
    match role_name.parse::<AccountPriceRole>() {
        Ok(role) => resolve_price_at(item, role, now),
        Err(_) => {
            warn!(item_id = %item.id, role = role_name, "Unknown price role, resolving to zero");
            Price::zero()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
