//! # catalog-persist: Local Persistence for Mini Catalog
//!
//! Best-effort, string-keyed local storage for the app's state tree and the
//! theme-mode setting.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mini Catalog Persistence                             │
//! │                                                                         │
//! │  Session (startup / on demand)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  catalog-persist (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌──────────────────┐   ┌──────────────────┐  │   │
//! │  │   │  KvStore  │   │  StateSnapshot   │   │    ThemeMode     │  │   │
//! │  │   │  (kv.rs)  │◄──│  (snapshot.rs)   │   │    (theme.rs)    │  │   │
//! │  │   │           │   │                  │   │                  │  │   │
//! │  │   │ one file  │   │ "mini-catalog-   │   │  "@theme_mode"   │  │   │
//! │  │   │ per key   │   │  state" key      │   │  key             │  │   │
//! │  │   └───────────┘   └──────────────────┘   └──────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data dir>/mini-catalog-state, <data dir>/@theme_mode                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Reads degrade: any failure (missing file, bad permissions, corrupt JSON,
//! unknown theme string) is logged via `tracing` and reported as "nothing
//! stored". Writes surface a [`PersistError`] and the caller decides whether
//! to care; the Session logs and carries on.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod snapshot;
pub mod theme;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::PersistError;
pub use kv::KvStore;
pub use snapshot::{
    clear_persisted_state, persist_state, restore_state, StateSnapshot, STATE_KEY,
};
pub use theme::{load_theme_mode, save_theme_mode, ThemeMode, THEME_KEY};
