//! # catalog-core: Pure Business Logic for Mini Catalog
//!
//! This crate is the **heart** of Mini Catalog. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Mini Catalog Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (mobile shell)                      │   │
//! │  │    Product List ──► Details ──► Wishlist ──► Cart ──► Checkout │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    catalog-app (Session)                        │   │
//! │  │    add_to_cart, toggle_favorite, apply promo, persist state    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ favorites │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Favorites │  │   │
//! │  │   │           │  │ discounts │  │ CartItem  │  │ id set    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE TRANSITIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart state and its action set
//! - [`favorites`] - Favorite-id membership state
//! - [`promo`] - Promo-code discounting and checkout totals
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every state change is (state, action) → state
//! 2. **No I/O**: Network, file system and clock access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Operations**: Absent ids degrade to no-ops, never panics or errors

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod favorites;
pub mod money;
pub mod promo;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use catalog_core::Cart` instead of
// `use catalog_core::cart::Cart`

pub use cart::{Cart, CartAction, CartItem};
pub use error::PromoError;
pub use favorites::{Favorites, FavoritesAction};
pub use money::Money;
pub use promo::{CheckoutSummary, PromoState};
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The one promo code the checkout screen accepts, matched case-insensitively.
///
/// ## Why a constant?
/// v0.1 ships a single flat-rate campaign. A promo table (per-code rates,
/// expiry) would replace this constant once a backend exists.
pub const PROMO_CODE: &str = "SAVE10";

/// Discount granted by [`PROMO_CODE`], in basis points (1000 = 10%).
pub const PROMO_DISCOUNT_BPS: u32 = 1_000;
