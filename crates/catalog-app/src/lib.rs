//! # Mini Catalog App Layer
//!
//! Headless application layer for the Mini Catalog shopping app: everything
//! the mobile shell needs except pixels.
//!
//! ## Module Organization
//! ```text
//! catalog_app/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart store wrapper
//! │   ├── favorites.rs◄─── Favorites store wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── session.rs      ◄─── Session facade (startup, cart/favorites ops)
//! ├── checkout.rs     ◄─── Screen-local promo flow
//! └── error.rs        ◄─── App error type for facade responses
//! ```
//!
//! ## State Management
//! Instead of a single state struct, separate focused state types are
//! composed by an explicitly constructed [`Session`]:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Management                             │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    CartStore     │ │  FavoritesStore  │ │      AppConfig       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • cart lines    │ │  • favorite ids  │ │  • data directory    │   │
//! │  │  • derived total │ │                  │ │  • currency format   │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  WHY: each facade method touches exactly the state it needs, and        │
//! │       tests can construct a session against a temp directory.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod checkout;
pub mod error;
pub mod session;
pub mod state;

pub use checkout::Checkout;
pub use error::{AppError, ErrorCode};
pub use session::{CartView, Session};
pub use state::{AppConfig, CartStore, FavoritesStore};

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Call once at process startup, before building the [`Session`].
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=catalog=trace` - Show trace for catalog crates only
/// - Default: INFO level, debug for the catalog crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
