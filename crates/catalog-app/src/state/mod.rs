//! # State Module
//!
//! Application state for the headless app layer.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Signatures**: Facade methods touch exactly the state they need
//! 4. **Reduced Contention**: The cart and favorites stores never block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │                         ┌───────────┐                                   │
//! │                         │  Session  │  (explicitly constructed at      │
//! │                         └─────┬─────┘   startup, passed to consumers)  │
//! │          ┌──────────────────┬─┴────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌────────────────┐  ┌──────────────────┐            │
//! │  │  CartStore   │  │ FavoritesStore │  │    AppConfig     │            │
//! │  │              │  │                │  │                  │            │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<    │  │  data dir        │            │
//! │  │    Cart >>   │  │   Favorites >> │  │  currency format │            │
//! │  └──────────────┘  └────────────────┘  └──────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore/FavoritesStore: Arc<Mutex<T>> for exclusive access        │
//! │  • AppConfig: read-only after initialization                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod favorites;

pub use cart::CartStore;
pub use config::AppConfig;
pub use favorites::FavoritesStore;
