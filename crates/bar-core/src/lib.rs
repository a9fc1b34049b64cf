//! # bar-core: Pricing Logic for the Bar Backend
//!
//! This crate holds the business rules of the ordering backend as pure
//! functions. The only outside input is the clock, behind [`pricing::Clock`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bar Backend Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        HTTP handlers / catalog serialization (external)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Item + AccountPriceRole               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bar-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │  account  │  │ validation│  │   │
//! │  │   │   Item    │  │ resolve_* │  │  name()   │  │  bounds   │  │   │
//! │  │   │ItemPrices │  │   Clock   │  │ privileges│  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (Item, ItemPrices, AccountPriceRole)
//! - [`money`] - Price type in minor units
//! - [`pricing`] - Price resolution and the clock abstraction
//! - [`account`] - Account display name and privileges
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary checks for snapshots
//!
//! ## Example Usage
//!
//! ```rust
//! use bar_core::{resolve_price_at, AccountPriceRole, Item, ItemPrices, Price};
//!
//! let item = Item {
//!     prices: ItemPrices { normal: Price::from_minor(1000), ..ItemPrices::default() },
//!     promotion: Some(50.0),
//!     promotion_ends_at: Some(1_700_000_000),
//!     ..Item::default()
//! };
//!
//! // Still active at the exact end instant, lapsed one second later
//! assert_eq!(resolve_price_at(&item, AccountPriceRole::Normal, 1_700_000_000).minor(), 500);
//! assert_eq!(resolve_price_at(&item, AccountPriceRole::Normal, 1_700_000_001).minor(), 1000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod account;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use account::{Account, AccountRole};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Price;
pub use pricing::{
    resolve_all_prices, resolve_all_prices_at, resolve_all_prices_with, resolve_price,
    resolve_price_at, resolve_price_for_role_name, resolve_price_with, Clock, FixedClock,
    PromotionStatus, SystemClock,
};
pub use types::*;
