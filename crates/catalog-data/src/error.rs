//! # Feed Error Types
//!
//! The feed itself cannot fail at request time (the data is embedded); the
//! only failure point is decoding the fixture at construction.

use thiserror::Error;

/// Product feed errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The embedded product fixture did not decode.
    ///
    /// ## When This Occurs
    /// - `data/products.json` was edited into invalid JSON
    /// - A fixture entry is missing a required Product field
    #[error("Product fixture is invalid: {0}")]
    Fixture(#[from] serde_json::Error),
}
