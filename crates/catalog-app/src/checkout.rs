//! # Checkout Flow
//!
//! Screen-local promo state for one visit to the cart screen.
//!
//! The Cart store never learns about promo codes: the discount is
//! presentation-layer state that evaporates when the screen goes away and
//! is never persisted. This mirrors how the cart screen holds the applied
//! flag and discount next to the form, not in the store.

use catalog_core::{Cart, CheckoutSummary, Money, PromoError, PromoState};
use tracing::debug;

/// Promo state holder for a single checkout.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    promo: PromoState,
}

impl Checkout {
    /// Starts a fresh checkout with no promo applied.
    pub fn new() -> Self {
        Checkout::default()
    }

    /// Attempts to apply a promo code against the cart's current subtotal.
    ///
    /// The discount is captured from the subtotal at this moment; later
    /// cart edits do not change it until the promo is removed and
    /// re-applied.
    pub fn apply_code(&mut self, code: &str, cart: &Cart) -> Result<Money, PromoError> {
        debug!(code = %code, subtotal = cart.total_cents, "apply promo code");
        self.promo.apply(code, cart.total())
    }

    /// Removes the applied promo and resets the discount to zero.
    pub fn remove_promo(&mut self) {
        debug!("remove promo code");
        self.promo.remove();
    }

    /// Whether a promo is currently applied.
    pub fn is_promo_applied(&self) -> bool {
        self.promo.is_applied()
    }

    /// The captured discount (zero when no promo is applied).
    pub fn discount(&self) -> Money {
        self.promo.discount()
    }

    /// The numbers the cart screen renders for this checkout.
    pub fn summary(&self, cart: &Cart) -> CheckoutSummary {
        CheckoutSummary::compute(cart, &self.promo)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
