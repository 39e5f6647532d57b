//! # Favorites State
//!
//! The wishlist: a set of favorited product ids. Membership is the only
//! observable property; the store knows nothing about the catalog, so any
//! id is accepted whether or not a product behind it exists.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Favorites Actions
// =============================================================================

/// The closed set of favorites operations, applied by [`Favorites::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FavoritesAction {
    /// Flip membership for one id: add when absent, remove when present.
    ToggleFavorite { id: String },

    /// Empty the set unconditionally.
    ClearFavorites,
}

// =============================================================================
// Favorites
// =============================================================================

/// The favorited-product-id set.
///
/// Stored as a Vec rather than a HashSet so snapshots serialize in a stable
/// order; lookups are linear, which is fine at wishlist sizes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Favorites {
    /// Favorited ids, no duplicates.
    pub favorite_ids: Vec<String>,
}

impl Favorites {
    /// Creates a new empty favorites set.
    pub fn new() -> Self {
        Favorites::default()
    }

    /// Rebuilds favorites from stored ids, dropping duplicates so a
    /// hand-edited snapshot cannot break the one-flip-per-toggle rule.
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut favorites = Favorites::new();
        for id in ids {
            if !favorites.is_favorite(&id) {
                favorites.favorite_ids.push(id);
            }
        }
        favorites
    }

    /// Applies one action. Total and infallible, like [`crate::Cart::apply`].
    pub fn apply(&mut self, action: FavoritesAction) {
        match action {
            FavoritesAction::ToggleFavorite { id } => self.toggle(id),
            FavoritesAction::ClearFavorites => self.favorite_ids.clear(),
        }
    }

    /// Exactly one membership flip per call.
    fn toggle(&mut self, id: String) {
        if let Some(index) = self.favorite_ids.iter().position(|f| *f == id) {
            self.favorite_ids.remove(index);
        } else {
            self.favorite_ids.push(id);
        }
    }

    /// Checks membership for one id.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorite_ids.iter().any(|f| f == id)
    }

    /// Returns the number of favorited ids (the wishlist badge number).
    pub fn count(&self) -> usize {
        self.favorite_ids.len()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.favorite_ids.is_empty()
    }

    /// Returns the ids in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.favorite_ids
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(id: &str) -> FavoritesAction {
        FavoritesAction::ToggleFavorite { id: id.to_string() }
    }

    #[test]
    fn test_toggle_adds_when_absent() {
        let mut favorites = Favorites::new();
        favorites.apply(toggle("product-1"));

        assert_eq!(favorites.count(), 1);
        assert!(favorites.is_favorite("product-1"));
    }

    #[test]
    fn test_toggle_removes_when_present() {
        let mut favorites = Favorites::from_ids(vec![
            "product-1".to_string(),
            "product-2".to_string(),
        ]);
        favorites.apply(toggle("product-1"));

        assert_eq!(favorites.count(), 1);
        assert!(!favorites.is_favorite("product-1"));
        assert!(favorites.is_favorite("product-2"));
    }

    #[test]
    fn test_double_toggle_is_involution() {
        let original = Favorites::from_ids(vec![
            "product-1".to_string(),
            "product-2".to_string(),
        ]);

        let mut toggled = original.clone();
        toggled.apply(toggle("product-2"));
        assert_ne!(toggled, original);

        toggled.apply(toggle("product-2"));
        assert_eq!(toggled, original);

        // Same involution from the empty side.
        let mut empty = Favorites::new();
        empty.apply(toggle("p1"));
        assert_eq!(empty.ids(), ["p1"]);
        empty.apply(toggle("p1"));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_multiple_ids_tracked_independently() {
        let mut favorites = Favorites::new();
        favorites.apply(toggle("product-1"));
        favorites.apply(toggle("product-2"));
        favorites.apply(toggle("product-3"));

        assert_eq!(favorites.count(), 3);
        assert!(favorites.is_favorite("product-1"));
        assert!(favorites.is_favorite("product-2"));
        assert!(favorites.is_favorite("product-3"));
    }

    #[test]
    fn test_clear_favorites() {
        let mut favorites = Favorites::from_ids(vec![
            "product-1".to_string(),
            "product-2".to_string(),
            "product-3".to_string(),
        ]);
        favorites.apply(FavoritesAction::ClearFavorites);

        assert!(favorites.is_empty());

        // Clearing an already-empty set stays empty.
        favorites.apply(FavoritesAction::ClearFavorites);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_from_ids_drops_duplicates() {
        let favorites = Favorites::from_ids(vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
        ]);

        assert_eq!(favorites.ids(), ["a", "b"]);
    }
}
