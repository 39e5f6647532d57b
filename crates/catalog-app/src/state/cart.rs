//! # Cart Store
//!
//! Owns the live [`Cart`] for a session.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because facade calls may arrive
//! from any task, and only one should transition the cart at a time. Every
//! transition runs to completion under the lock; there is no await point
//! inside, so callers never observe a partial state.

use std::sync::{Arc, Mutex};

use catalog_core::{Cart, CartAction};

/// Session-owned cart state.
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them mutate. An RwLock would add
/// complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
}

impl CartStore {
    /// Creates a new empty cart store.
    pub fn new() -> Self {
        CartStore::default()
    }

    /// Creates a store seeded from a restored cart.
    pub fn hydrate(cart: Cart) -> Self {
        CartStore {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Applies one action to the cart.
    pub fn dispatch(&self, action: CartAction) {
        self.with_cart_mut(|cart| cart.apply(action));
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let badge = cart_store.with_cart(|cart| cart.total_quantity());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Returns an owned copy of the current cart (for views and snapshots).
    pub fn snapshot(&self) -> Cart {
        self.with_cart(Cart::clone)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
