//! # App Error Type
//!
//! Unified error type for the session facade.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Mini Catalog                           │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  session.add_to_cart('42')                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Facade Method                                                   │  │
//! │  │  Result<T, AppError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Feed miss? ────── AppError { code: NOT_FOUND } ───────────────► │  │
//! │  │  Storage error? ── AppError { code: STORAGE } ─────────────────► │  │
//! │  │  Promo rejection? ─ AppError { code: PROMO } ──────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The store transitions themselves never error: absent ids are no-ops.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are serializable so the frontend receives both a machine-readable
//! `code` and a human-readable `message`.

use serde::Serialize;

use catalog_core::PromoError;
use catalog_data::CatalogError;
use catalog_persist::PersistError;

/// Error returned from session facade methods.
///
/// ## Serialization
/// This is what the frontend receives when a call fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for facade responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Local storage operation failed
    Storage,

    /// Product feed failed
    Feed,

    /// Promo code rejected
    Promo,

    /// Anything that should not happen
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts feed errors to app errors.
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Fixture(e) => {
                // Log the decode detail but return a generic message
                tracing::error!("Product fixture failed to decode: {}", e);
                AppError::new(ErrorCode::Feed, "Product catalog unavailable")
            }
        }
    }
}

/// Converts storage errors to app errors.
impl From<PersistError> for AppError {
    fn from(err: PersistError) -> Self {
        tracing::error!("Local storage operation failed: {}", err);
        AppError::new(ErrorCode::Storage, "Local storage operation failed")
    }
}

/// Converts promo rejections to app errors.
impl From<PromoError> for AppError {
    fn from(err: PromoError) -> Self {
        AppError::new(ErrorCode::Promo, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// =============================================================================
// Unit Tests
// =============================================================================
