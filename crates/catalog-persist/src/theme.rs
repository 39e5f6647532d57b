//! # Theme Mode Persistence
//!
//! The theme preference is a single string value under its own key, separate
//! from the state snapshot: the theme provider loads it before the stores
//! are even hydrated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::PersistError;
use crate::kv::KvStore;

/// The fixed key the theme mode is stored under.
pub const THEME_KEY: &str = "@theme_mode";

// =============================================================================
// Theme Mode
// =============================================================================

/// The shopper's theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always the light palette.
    Light,

    /// Always the dark palette.
    Dark,

    /// Follow the OS color scheme.
    #[default]
    System,
}

impl ThemeMode {
    /// The stored string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(()),
        }
    }
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the stored theme mode.
///
/// Best-effort: a missing value, a read failure or a string outside the
/// allowed set all fall back to [`ThemeMode::System`].
pub async fn load_theme_mode(store: &KvStore) -> ThemeMode {
    let raw = match store.get(THEME_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return ThemeMode::default(),
        Err(e) => {
            warn!(error = %e, "Failed to load theme mode");
            return ThemeMode::default();
        }
    };

    raw.parse().unwrap_or_default()
}

/// Stores the theme mode.
pub async fn save_theme_mode(store: &KvStore, mode: ThemeMode) -> Result<(), PersistError> {
    store.set(THEME_KEY, mode.as_str()).await
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> KvStore {
        let root = std::env::temp_dir().join(format!("catalog-theme-{}", uuid::Uuid::new_v4()));
        KvStore::open(root).await.unwrap()
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = temp_store().await;

        save_theme_mode(&store, ThemeMode::Dark).await.unwrap();
        assert_eq!(load_theme_mode(&store).await, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_load_with_nothing_stored_is_system() {
        let store = temp_store().await;
        assert_eq!(load_theme_mode(&store).await, ThemeMode::System);
    }

    #[tokio::test]
    async fn test_load_unknown_value_falls_back_to_system() {
        let store = temp_store().await;
        store.set(THEME_KEY, "sepia").await.unwrap();

        assert_eq!(load_theme_mode(&store).await, ThemeMode::System);
    }

    #[test]
    fn test_string_forms() {
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("blue".parse::<ThemeMode>().is_err());
    }
}
