//! # State Snapshots
//!
//! Serializes the full state tree (cart + favorites) to the key-value store
//! under one fixed key, and restores it at startup.
//!
//! ## Restore Semantics
//! Restoring is best-effort by design: there is nothing useful the app can
//! do with a broken snapshot except start fresh, so every read failure is
//! logged and collapsed into `None`. Restored carts re-enter the state
//! world through [`Cart::from_items`] so the derived total is recomputed
//! rather than trusted from disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use catalog_core::{Cart, Favorites};

use crate::error::PersistError;
use crate::kv::KvStore;

/// The fixed key the state tree is stored under.
pub const STATE_KEY: &str = "mini-catalog-state";

// =============================================================================
// State Snapshot
// =============================================================================

/// One serialized copy of the state tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    /// The cart store at save time.
    pub cart: Cart,

    /// The favorites store at save time.
    pub favorites: Favorites,

    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
}

/// Writes the current state tree under [`STATE_KEY`].
pub async fn persist_state(
    store: &KvStore,
    cart: &Cart,
    favorites: &Favorites,
) -> Result<(), PersistError> {
    let snapshot = StateSnapshot {
        cart: cart.clone(),
        favorites: favorites.clone(),
        saved_at: Utc::now(),
    };

    let encoded = serde_json::to_string(&snapshot)?;
    store.set(STATE_KEY, &encoded).await?;
    debug!(
        items = snapshot.cart.item_count(),
        favorites = snapshot.favorites.count(),
        "State snapshot persisted"
    );
    Ok(())
}

/// Reads the persisted state tree, if any.
///
/// Returns `None` for "no snapshot" and for every failure mode: the caller
/// cannot distinguish them and should not have to.
pub async fn restore_state(store: &KvStore) -> Option<StateSnapshot> {
    let raw = match store.get(STATE_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "Failed to read persisted state; starting fresh");
            return None;
        }
    };

    match serde_json::from_str::<StateSnapshot>(&raw) {
        Ok(mut snapshot) => {
            // The stored total and any duplicate ids are untrusted input.
            snapshot.cart = Cart::from_items(snapshot.cart.items);
            snapshot.favorites = Favorites::from_ids(snapshot.favorites.favorite_ids);
            Some(snapshot)
        }
        Err(e) => {
            warn!(error = %e, "Persisted state did not decode; starting fresh");
            None
        }
    }
}

/// Removes the persisted state tree.
pub async fn clear_persisted_state(store: &KvStore) -> Result<(), PersistError> {
    store.remove(STATE_KEY).await
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{CartAction, CartItem, FavoritesAction};

    async fn temp_store() -> KvStore {
        let root = std::env::temp_dir().join(format!("catalog-snap-{}", uuid::Uuid::new_v4()));
        KvStore::open(root).await.unwrap()
    }

    fn sample_state() -> (Cart, Favorites) {
        let mut cart = Cart::new();
        cart.apply(CartAction::AddToCart(CartItem {
            id: "1".to_string(),
            name: "Wireless Headphones".to_string(),
            image: "https://images.minicatalog.dev/products/1.jpg".to_string(),
            price_cents: 7999,
            quantity: 2,
        }));

        let mut favorites = Favorites::new();
        favorites.apply(FavoritesAction::ToggleFavorite {
            id: "3".to_string(),
        });

        (cart, favorites)
    }

    #[tokio::test]
    async fn test_persist_then_restore_round_trips() {
        let store = temp_store().await;
        let (cart, favorites) = sample_state();

        persist_state(&store, &cart, &favorites).await.unwrap();
        let snapshot = restore_state(&store).await.unwrap();

        assert_eq!(snapshot.cart, cart);
        assert_eq!(snapshot.favorites, favorites);
    }

    #[tokio::test]
    async fn test_restore_with_nothing_stored_is_none() {
        let store = temp_store().await;
        assert!(restore_state(&store).await.is_none());
    }

    #[tokio::test]
    async fn test_restore_corrupt_snapshot_is_none() {
        let store = temp_store().await;
        store.set(STATE_KEY, "{not json").await.unwrap();

        assert!(restore_state(&store).await.is_none());
    }

    #[tokio::test]
    async fn test_restore_recomputes_tampered_total() {
        let store = temp_store().await;
        let (cart, favorites) = sample_state();
        persist_state(&store, &cart, &favorites).await.unwrap();

        // Hand-edit the stored total.
        let raw = store.get(STATE_KEY).await.unwrap().unwrap();
        let tampered = raw.replace("\"totalCents\":15998", "\"totalCents\":1");
        assert_ne!(raw, tampered);
        store.set(STATE_KEY, &tampered).await.unwrap();

        let snapshot = restore_state(&store).await.unwrap();
        assert_eq!(snapshot.cart.total_cents, 15998);
    }

    #[tokio::test]
    async fn test_clear_persisted_state() {
        let store = temp_store().await;
        let (cart, favorites) = sample_state();
        persist_state(&store, &cart, &favorites).await.unwrap();

        clear_persisted_state(&store).await.unwrap();
        assert!(restore_state(&store).await.is_none());

        // Clearing when nothing is stored is fine too.
        clear_persisted_state(&store).await.unwrap();
    }
}
