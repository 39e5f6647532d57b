//! # Promo Discounting
//!
//! Checkout-side promo-code state and the derived totals screens render.
//!
//! ## Where This Lives
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Promo State vs. Cart State                              │
//! │                                                                         │
//! │  Cart store (cart.rs)              Promo state (THIS MODULE)            │
//! │  ─────────────────────             ─────────────────────────            │
//! │  • lives for the session           • lives for one checkout screen      │
//! │  • persisted in snapshots          • never persisted                    │
//! │  • owns items + subtotal           • owns the discount only             │
//! │                                                                         │
//! │  subtotal ──► apply("SAVE10") ──► discount ──► total = sub - discount  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The discount amount is captured once, at application time, from the
//! subtotal that was on screen. Editing the cart afterwards does not
//! recompute it; removing the promo resets it to zero.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::PromoError;
use crate::money::Money;
use crate::{PROMO_CODE, PROMO_DISCOUNT_BPS};

// =============================================================================
// Promo State
// =============================================================================

/// Promo-code state for one checkout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PromoState {
    /// Whether the campaign code has been applied.
    applied: bool,

    /// Discount captured at application time, in cents.
    discount_cents: i64,
}

impl PromoState {
    /// Creates a fresh, unapplied promo state.
    pub fn new() -> Self {
        PromoState::default()
    }

    /// Attempts to apply a code against the given subtotal.
    ///
    /// ## Behavior
    /// - Wrong code: rejected, even when a promo is already applied
    ///   (the shopper gets the "invalid code" message first)
    /// - Matching code, already applied: rejected exactly once per checkout
    /// - Matching code, first time: captures a flat 10% of `subtotal`
    ///
    /// The match is case-insensitive, so "save10" works.
    ///
    /// ## Returns
    /// The captured discount on success.
    pub fn apply(&mut self, code: &str, subtotal: Money) -> Result<Money, PromoError> {
        if !code.trim().eq_ignore_ascii_case(PROMO_CODE) {
            return Err(PromoError::InvalidCode);
        }
        if self.applied {
            return Err(PromoError::AlreadyApplied);
        }

        let discount = subtotal.percentage(PROMO_DISCOUNT_BPS);
        self.applied = true;
        self.discount_cents = discount.cents();
        Ok(discount)
    }

    /// Removes the promo, resetting the discount to zero. The code can be
    /// applied again afterwards.
    pub fn remove(&mut self) {
        *self = PromoState::default();
    }

    /// Whether the code is currently applied.
    #[inline]
    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// The captured discount (zero when not applied).
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// The derived numbers the cart screen renders.
///
/// Read-side only: computed from a cart and a promo state, owned by neither.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutSummary {
    /// Number of distinct lines.
    pub item_count: usize,

    /// Sum of quantities across lines (the cart badge number).
    pub total_quantity: i64,

    /// Cart subtotal in cents.
    pub subtotal_cents: i64,

    /// Promo discount in cents (zero when no promo is applied).
    pub discount_cents: i64,

    /// Amount due: subtotal minus discount.
    pub total_cents: i64,
}

impl CheckoutSummary {
    /// Computes the summary for a cart with a promo state.
    pub fn compute(cart: &Cart, promo: &PromoState) -> Self {
        let subtotal = cart.total_cents;
        let discount = promo.discount().cents();
        CheckoutSummary {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: subtotal,
            discount_cents: discount,
            total_cents: subtotal - discount,
        }
    }

    /// Computes the summary for a cart with no promo in play.
    pub fn of_cart(cart: &Cart) -> Self {
        CheckoutSummary::compute(cart, &PromoState::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
