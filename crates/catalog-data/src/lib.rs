//! # catalog-data: Product Feed for Mini Catalog
//!
//! This crate provides the product catalog the app browses, searches and
//! adds to the cart from.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Mini Catalog Data Flow                             │
//! │                                                                         │
//! │  Session call (search_products)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog-data (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐        ┌────────────────────────────────┐  │   │
//! │  │   │    Catalog    │        │   data/products.json           │  │   │
//! │  │   │ (catalog.rs)  │◄───────│   (embedded at compile time)   │  │   │
//! │  │   │               │        └────────────────────────────────┘  │   │
//! │  │   │ fetch_all     │                                            │   │
//! │  │   │ fetch_by_id   │   each call sleeps for its configured     │   │
//! │  │   │ search        │   delay, then resolves synchronously      │   │
//! │  │   └───────────────┘                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The feed stands in for a product API: operations are async, take a
//! configurable amount of simulated latency, and hand back plain
//! [`catalog_core::Product`] values. From the stores' perspective a fetch
//! that resolves and then dispatches is one atomic transition.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{Catalog, FetchDelays};
pub use error::CatalogError;
