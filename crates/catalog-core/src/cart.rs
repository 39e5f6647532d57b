//! # Cart State
//!
//! The shopping cart: an ordered list of line items plus a derived total.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  Screen Intent            CartAction              State Change          │
//! │  ─────────────            ──────────              ────────────          │
//! │                                                                         │
//! │  Tap "Add to Cart" ──────► AddToCart ───────────► merge or append      │
//! │                                                                         │
//! │  Stepper +/- ────────────► UpdateQuantity ──────► set qty / remove     │
//! │                                                                         │
//! │  Tap trash icon ─────────► RemoveFromCart ──────► drop the line        │
//! │                                                                         │
//! │  Tap "Clear All" ────────► ClearCart ───────────► empty list           │
//! │                                                                         │
//! │  NOTE: every transition ends by recomputing the total from scratch.     │
//! │        The total is derived state, never incrementally maintained.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totality
//! Every action is accepted for every state: absent ids are no-ops, and
//! `apply` never fails. Error surfaces live in the layers that talk to the
//! feed or the disk, not here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the shopping cart.
///
/// ## Snapshot Pattern
/// `name`, `image` and `price_cents` are frozen copies of product data taken
/// when the item was added. If the catalog changes afterwards, the cart keeps
/// displaying (and charging) what the shopper saw at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product ID, unique per line.
    pub id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Image URL at time of adding (frozen).
    pub image: String,

    /// Unit price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Quantity in cart. Held at >= 1 by `UpdateQuantity`/`RemoveFromCart`;
    /// `AddToCart` accepts the payload as-is and leaves validation to callers.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart line from a product and quantity, freezing the fields
    /// the cart displays.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price_cents: product.price_cents,
            quantity,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * self.quantity
    }
}

// =============================================================================
// Cart Actions
// =============================================================================

/// The closed set of cart operations.
///
/// Screens dispatch these; [`Cart::apply`] is the single transition function
/// over (state, action). No other code path mutates a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CartAction {
    /// Add a line, or merge quantities into the existing line with the
    /// same id. On a merge the existing name/image/price win; the incoming
    /// payload only contributes its quantity.
    AddToCart(CartItem),

    /// Drop the line with this id. No-op if absent.
    RemoveFromCart { id: String },

    /// Set a line's quantity to an absolute value. A quantity <= 0 behaves
    /// exactly like `RemoveFromCart`. No-op if the id is absent.
    UpdateQuantity { id: String, quantity: i64 },

    /// Empty the cart unconditionally.
    ClearCart,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart state.
///
/// ## Invariants
/// - Lines are unique by `id` (adding the same product merges quantities)
/// - `total_cents` equals the sum of line totals after every transition
/// - A quantity driven to <= 0 through `UpdateQuantity` removes the line;
///   nothing is ever stored at zero or negative through that path
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartItem>,

    /// Derived running total in cents.
    pub total_cents: i64,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Rebuilds a cart from a list of lines, recomputing the total.
    ///
    /// Any cart coming from outside the transition function (a deserialized
    /// snapshot, a test fixture) should enter through here so the stored
    /// total can never disagree with the lines.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Cart {
            items,
            total_cents: 0,
        };
        cart.recompute_total();
        cart
    }

    /// Applies one action and recomputes the total.
    ///
    /// This is the only mutation entry point. It is total: every action is
    /// defined for every state and the function never fails.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddToCart(item) => self.add_item(item),
            CartAction::RemoveFromCart { id } => self.remove_item(&id),
            CartAction::UpdateQuantity { id, quantity } => self.update_quantity(&id, quantity),
            CartAction::ClearCart => self.items.clear(),
        }
        self.recompute_total();
    }

    /// Merge into an existing line or append a new one.
    ///
    /// The incoming payload's quantity is trusted as-is, including zero or
    /// negative values; screens validate before dispatching and a later
    /// `UpdateQuantity` normalizes anything that slipped through.
    fn add_item(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
    }

    /// Drop the line matching `id`, silently doing nothing when absent.
    fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Absolute quantity set; <= 0 removes the line.
    fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
    }

    /// Recomputes the total by iterating every line.
    ///
    /// Always a full pass: at the cart sizes this app handles (single digits
    /// to low hundreds of lines) a derived value beats maintaining a cached
    /// total under partial updates.
    fn recompute_total(&mut self) {
        self.total_cents = self.items.iter().map(CartItem::line_total_cents).sum();
    }

    /// Returns the running total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the number of unique lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines (the cart badge number).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Looks up a line by product id.
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
