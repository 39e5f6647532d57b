//! # Product Catalog
//!
//! The in-memory product feed with simulated network latency.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "head"                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  session.search_products("head")                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sleep(search delay)  ◄── stands in for network round-trip              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lowercase substring match over name, description and category          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> back to the screen                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use catalog_core::Product;

use crate::error::CatalogError;

/// The embedded product fixture, decoded once at construction.
const FIXTURE: &str = include_str!("../data/products.json");

// =============================================================================
// Fetch Delays
// =============================================================================

/// Simulated latency per feed operation.
///
/// The defaults mirror what a small product API feels like on a mobile
/// connection; tests construct [`FetchDelays::none`] so suites stay fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchDelays {
    /// Latency for a full catalog fetch.
    pub fetch_all: Duration,

    /// Latency for a single-product lookup.
    pub fetch_by_id: Duration,

    /// Latency for a search query.
    pub search: Duration,
}

impl FetchDelays {
    /// The default simulated latency profile.
    pub const fn simulated() -> Self {
        FetchDelays {
            fetch_all: Duration::from_millis(800),
            fetch_by_id: Duration::from_millis(500),
            search: Duration::from_millis(600),
        }
    }

    /// Zero latency, for tests.
    pub const fn none() -> Self {
        FetchDelays {
            fetch_all: Duration::ZERO,
            fetch_by_id: Duration::ZERO,
            search: Duration::ZERO,
        }
    }
}

impl Default for FetchDelays {
    fn default() -> Self {
        FetchDelays::simulated()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The product feed.
///
/// Holds the decoded fixture and answers the three read operations the
/// screens need. All operations clone out of the fixture; the feed itself
/// is never mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    delays: FetchDelays,
}

impl Catalog {
    /// Builds the catalog from the embedded fixture with default latency.
    pub fn from_embedded() -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(FIXTURE)?;
        debug!(count = products.len(), "Product fixture decoded");
        Ok(Catalog {
            products,
            delays: FetchDelays::default(),
        })
    }

    /// Builds a catalog from explicit products, for tests and previews.
    pub fn from_products(products: Vec<Product>) -> Self {
        Catalog {
            products,
            delays: FetchDelays::default(),
        }
    }

    /// Overrides the latency profile.
    pub fn with_delays(mut self, delays: FetchDelays) -> Self {
        self.delays = delays;
        self
    }

    /// Number of products in the feed.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Fetches the full catalog.
    pub async fn fetch_all(&self) -> Vec<Product> {
        sleep(self.delays.fetch_all).await;
        self.products.clone()
    }

    /// Fetches one product by id, `None` when the id is unknown.
    pub async fn fetch_by_id(&self, id: &str) -> Option<Product> {
        sleep(self.delays.fetch_by_id).await;
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Case-insensitive substring search over name, description and
    /// category. An empty query matches everything.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        sleep(self.delays.search).await;

        let needle = query.to_lowercase();
        let hits: Vec<Product> = self
            .products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        debug!(query = %query, hits = hits.len(), "Catalog search");
        hits
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
