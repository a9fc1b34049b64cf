//! # Money Module
//!
//! Provides the `Price` type for catalog prices.
//!
//! ## Minor Units Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICES ARE INTEGERS                                                    │
//! │                                                                         │
//! │  Catalog stores:   1000  (= 10.00 in the shop currency)                 │
//! │  Frontend shows:   "10.00"                                              │
//! │                                                                         │
//! │  There are no fractional sub-units. A price is never negative: the     │
//! │  catalog sells things, refunds are not modelled here.                  │
//! │                                                                         │
//! │  The ONE place floating point is involved is the promotion discount,   │
//! │  and its result is truncated straight back to an integer.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bar_core::money::Price;
//!
//! let price = Price::from_minor(1000);
//! assert_eq!(price.apply_promotion(10.0).minor(), 900);
//! assert_eq!(price.to_string(), "10.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Price Type
// =============================================================================

/// A price in the smallest currency unit.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: catalog prices are never negative
/// - **Single field tuple struct**: serializes as a bare JSON integer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Price(u64);

impl Price {
    /// Creates a price from minor units.
    #[inline]
    pub const fn from_minor(minor: u64) -> Self {
        Price(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> u64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> u64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> u64 {
        self.0 % 100
    }

    /// Zero price. Also what an unknown price role resolves to.
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies a percentage discount, truncating toward zero.
    ///
    /// ## Truncation, Not Rounding
    /// ```text
    /// 995 × (1 - 10/100) = 895.5  →  895
    /// ```
    /// The computation runs in `f64` and the result is cast back with `as`,
    /// which drops the fraction. The cast saturates, so a percentage above
    /// 100 yields zero instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use bar_core::money::Price;
    ///
    /// assert_eq!(Price::from_minor(800).apply_promotion(10.0).minor(), 720);
    /// assert_eq!(Price::from_minor(995).apply_promotion(10.0).minor(), 895);
    /// ```
    pub fn apply_promotion(&self, percent: f64) -> Price {
        let discounted = self.0 as f64 * (1.0 - percent / 100.0);
        Price(discounted as u64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the price with two decimals, without a currency symbol.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major(), self.minor_part())
    }
}

impl From<u64> for Price {
    fn from(minor: u64) -> Self {
        Price(minor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
