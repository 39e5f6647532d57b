//! # Domain Types
//!
//! Core domain types shared across the Mini Catalog workspace.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    Product      │ ─────► │    CartItem     │  (snapshot at add     │
//! │  │  ─────────────  │        │  ─────────────  │   time, see cart.rs)  │
//! │  │  id             │        │  id             │                        │
//! │  │  name           │        │  name, image    │                        │
//! │  │  price_cents    │        │  price_cents    │                        │
//! │  │  category       │        │  quantity       │                        │
//! │  │  rating/reviews │        └─────────────────┘                        │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog feed owns Product *data*; this crate owns the Product *type*
//! so the cart can snapshot it without depending on any I/O crate.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the browsing catalog.
///
/// Products are read-only from the stores' perspective: the cart copies the
/// fields it displays (id, name, image, price) at add time and never looks
/// back at the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier, also the cart line and favorite key.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Longer marketing copy shown on the details screen.
    pub description: String,

    /// Image URL.
    pub image: String,

    /// Browse category (e.g. "Electronics").
    pub category: String,

    /// Average review rating, 0.0 - 5.0.
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub reviews: u32,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> Product {
        Product {
            id: "1".to_string(),
            name: "Wireless Headphones".to_string(),
            price_cents: 7999,
            description: "Over-ear, noise cancelling".to_string(),
            image: "https://img.example.com/1.jpg".to_string(),
            category: "Electronics".to_string(),
            rating: 4.5,
            reviews: 128,
        }
    }

    #[test]
    fn test_price_as_money() {
        assert_eq!(headphones().price(), Money::from_cents(7999));
    }

    #[test]
    fn test_serializes_camel_case_for_frontend() {
        let json = serde_json::to_value(headphones()).unwrap();
        assert_eq!(json["priceCents"], 7999);
        assert_eq!(json["category"], "Electronics");
        assert!(json.get("price_cents").is_none());
    }
}
