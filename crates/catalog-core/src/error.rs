//! # Error Types
//!
//! Domain errors for catalog-core.
//!
//! The cart and favorites stores are intentionally total: absent-id lookups
//! degrade to no-ops and `apply` never fails, so there is no error type for
//! them. The only rejections the core produces come from the checkout-side
//! promo flow.

use thiserror::Error;

// =============================================================================
// Promo Error
// =============================================================================

/// Rejections from applying a promo code at checkout.
///
/// Both variants map directly to an alert the cart screen shows; neither
/// changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PromoError {
    /// The entered code does not match the campaign code.
    #[error("Invalid promo code")]
    InvalidCode,

    /// The campaign code was already applied to this checkout.
    #[error("Promo code is already applied")]
    AlreadyApplied,
}

// =============================================================================
// Unit Tests
// =============================================================================
