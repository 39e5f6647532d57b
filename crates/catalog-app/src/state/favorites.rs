//! # Favorites Store
//!
//! Owns the live [`Favorites`] set for a session. Same shape as
//! [`super::CartStore`]; the two never lock each other.

use std::sync::{Arc, Mutex};

use catalog_core::{Favorites, FavoritesAction};

/// Session-owned favorites state.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    favorites: Arc<Mutex<Favorites>>,
}

impl FavoritesStore {
    /// Creates a new empty favorites store.
    pub fn new() -> Self {
        FavoritesStore::default()
    }

    /// Creates a store seeded from a restored favorites set.
    pub fn hydrate(favorites: Favorites) -> Self {
        FavoritesStore {
            favorites: Arc::new(Mutex::new(favorites)),
        }
    }

    /// Applies one action to the set.
    pub fn dispatch(&self, action: FavoritesAction) {
        self.with_favorites_mut(|favorites| favorites.apply(action));
    }

    /// Executes a function with read access to the set.
    pub fn with_favorites<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Favorites) -> R,
    {
        let favorites = self.favorites.lock().expect("Favorites mutex poisoned");
        f(&favorites)
    }

    /// Executes a function with write access to the set.
    pub fn with_favorites_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Favorites) -> R,
    {
        let mut favorites = self.favorites.lock().expect("Favorites mutex poisoned");
        f(&mut favorites)
    }

    /// Returns an owned copy of the current set.
    pub fn snapshot(&self) -> Favorites {
        self.with_favorites(Favorites::clone)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_toggles_membership() {
        let store = FavoritesStore::new();
        store.dispatch(FavoritesAction::ToggleFavorite {
            id: "p1".to_string(),
        });

        assert!(store.with_favorites(|f| f.is_favorite("p1")));

        store.dispatch(FavoritesAction::ToggleFavorite {
            id: "p1".to_string(),
        });
        assert!(store.with_favorites(|f| f.is_empty()));
    }

    #[test]
    fn test_hydrate_keeps_restored_ids() {
        let restored = Favorites::from_ids(vec!["a".to_string(), "b".to_string()]);
        let store = FavoritesStore::hydrate(restored);

        assert_eq!(store.snapshot().count(), 2);
    }
}
