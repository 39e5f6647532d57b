//! # Session Facade
//!
//! The explicitly-constructed state object the frontend talks to.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Startup                                   │
//! │                                                                         │
//! │  1. Resolve Data Directory ───────────────────────────────────────────► │
//! │     • explicit config value, else MINI_CATALOG_DATA_DIR,                │
//! │       else the platform app-data directory                              │
//! │                                                                         │
//! │  2. Open Key-Value Store ─────────────────────────────────────────────► │
//! │                                                                         │
//! │  3. Restore Persisted State (best-effort) ────────────────────────────► │
//! │     • snapshot present: hydrate cart + favorites from it                │
//! │     • missing/corrupt: start from empty stores                          │
//! │                                                                         │
//! │  4. Load Theme Mode (best-effort) ────────────────────────────────────► │
//! │                                                                         │
//! │  5. Decode the Product Fixture ───────────────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is exactly one `Session` per app process, constructed at startup
//! and handed to consumers; nothing in this crate is a global singleton.
//!
//! ## Atomicity
//! Async work (feed fetches, disk I/O) always completes *before* a store
//! transition is applied, and every transition is synchronous, so the
//! stores move atomically from one consistent state to the next.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use tracing::{debug, info, warn};

use catalog_core::{Cart, CartAction, CartItem, CheckoutSummary, FavoritesAction, Product};
use catalog_data::Catalog;
use catalog_persist::{
    clear_persisted_state, load_theme_mode, persist_state, restore_state, save_theme_mode,
    KvStore, ThemeMode,
};

use crate::checkout::Checkout;
use crate::error::AppError;
use crate::state::{AppConfig, CartStore, FavoritesStore};

// =============================================================================
// Cart View
// =============================================================================

/// Cart response for screens: the lines plus the derived totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub totals: CheckoutSummary,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            totals: CheckoutSummary::of_cart(cart),
            items: cart.items.clone(),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// One running app instance: stores, feed, storage and theme.
#[derive(Debug)]
pub struct Session {
    config: AppConfig,
    kv: KvStore,
    catalog: Catalog,
    cart: CartStore,
    favorites: FavoritesStore,
    theme: Mutex<ThemeMode>,
}

impl Session {
    /// Builds a session: resolves storage, restores state, decodes the feed.
    ///
    /// Missing or corrupt persisted state is not an error; the stores just
    /// start empty. Failing to open storage at all is.
    pub async fn init(config: AppConfig) -> Result<Self, AppError> {
        let data_dir = resolve_data_dir(&config)?;
        info!(data_dir = %data_dir.display(), "Starting Mini Catalog session");

        let kv = KvStore::open(data_dir).await?;
        let catalog = Catalog::from_embedded()?.with_delays(config.fetch_delays);

        let (cart, favorites) = match restore_state(&kv).await {
            Some(snapshot) => {
                info!(
                    items = snapshot.cart.item_count(),
                    favorites = snapshot.favorites.count(),
                    "Persisted state restored"
                );
                (
                    CartStore::hydrate(snapshot.cart),
                    FavoritesStore::hydrate(snapshot.favorites),
                )
            }
            None => (CartStore::new(), FavoritesStore::new()),
        };

        let theme = load_theme_mode(&kv).await;

        Ok(Session {
            config,
            kv,
            catalog,
            cart,
            favorites,
            theme: Mutex::new(theme),
        })
    }

    /// The configuration this session was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Gets the current cart contents.
    pub fn cart(&self) -> CartView {
        self.cart.with_cart(|cart| CartView::from(cart))
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Fetches the product from the feed (price is frozen at this moment)
    /// - If already in cart: quantity increases
    /// - If not in cart: added as a new line
    ///
    /// ## Arguments
    /// * `product_id` - Product to add
    /// * `quantity` - Quantity to add (default: 1); screens send >= 1
    pub async fn add_to_cart(
        &self,
        product_id: &str,
        quantity: Option<i64>,
    ) -> Result<CartView, AppError> {
        let quantity = quantity.unwrap_or(1);
        debug!(product_id = %product_id, quantity = %quantity, "add_to_cart");

        let product = self
            .catalog
            .fetch_by_id(product_id)
            .await
            .ok_or_else(|| AppError::not_found("Product", product_id))?;

        self.cart
            .dispatch(CartAction::AddToCart(CartItem::from_product(
                &product, quantity,
            )));
        Ok(self.cart())
    }

    /// Sets the quantity of a cart line. Zero or below removes the line;
    /// an unknown id is a no-op (the view simply comes back unchanged).
    pub fn update_cart_item(&self, product_id: &str, quantity: i64) -> CartView {
        debug!(product_id = %product_id, quantity = %quantity, "update_cart_item");

        self.cart.dispatch(CartAction::UpdateQuantity {
            id: product_id.to_string(),
            quantity,
        });
        self.cart()
    }

    /// Removes a line from the cart. Unknown ids are a no-op.
    pub fn remove_from_cart(&self, product_id: &str) -> CartView {
        debug!(product_id = %product_id, "remove_from_cart");

        self.cart.dispatch(CartAction::RemoveFromCart {
            id: product_id.to_string(),
        });
        self.cart()
    }

    /// Clears all items from the cart.
    pub fn clear_cart(&self) -> CartView {
        debug!("clear_cart");

        self.cart.dispatch(CartAction::ClearCart);
        self.cart()
    }

    /// Sum of quantities across cart lines (the tab-bar badge).
    pub fn cart_badge_count(&self) -> i64 {
        self.cart.with_cart(Cart::total_quantity)
    }

    // =========================================================================
    // Favorites / Wishlist
    // =========================================================================

    /// Flips a product in or out of the wishlist; returns the new membership.
    pub fn toggle_favorite(&self, product_id: &str) -> bool {
        debug!(product_id = %product_id, "toggle_favorite");

        self.favorites.dispatch(FavoritesAction::ToggleFavorite {
            id: product_id.to_string(),
        });
        self.is_favorite(product_id)
    }

    /// Empties the wishlist.
    pub fn clear_favorites(&self) {
        debug!("clear_favorites");
        self.favorites.dispatch(FavoritesAction::ClearFavorites);
    }

    /// Whether a product is currently favorited.
    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.favorites.with_favorites(|f| f.is_favorite(product_id))
    }

    /// Number of favorited products (the wishlist badge).
    pub fn wishlist_count(&self) -> usize {
        self.favorites.with_favorites(catalog_core::Favorites::count)
    }

    /// The favorited products, resolved against the feed. Favorited ids the
    /// feed no longer knows simply do not appear.
    pub async fn wishlist(&self) -> Vec<Product> {
        let favorites = self.favorites.snapshot();
        self.catalog
            .fetch_all()
            .await
            .into_iter()
            .filter(|p| favorites.is_favorite(&p.id))
            .collect()
    }

    // =========================================================================
    // Catalog browsing
    // =========================================================================

    /// Fetches the full product list.
    pub async fn products(&self) -> Vec<Product> {
        self.catalog.fetch_all().await
    }

    /// Fetches one product for the details screen.
    pub async fn product(&self, product_id: &str) -> Result<Product, AppError> {
        self.catalog
            .fetch_by_id(product_id)
            .await
            .ok_or_else(|| AppError::not_found("Product", product_id))
    }

    /// Searches the catalog.
    pub async fn search_products(&self, query: &str) -> Vec<Product> {
        self.catalog.search(query).await
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Starts a checkout flow. The returned value owns the promo state for
    /// one visit to the cart screen; dropping it discards any applied code.
    pub fn begin_checkout(&self) -> Checkout {
        Checkout::new()
    }

    /// A read-only copy of the current cart for checkout computations.
    pub fn cart_snapshot(&self) -> Cart {
        self.cart.snapshot()
    }

    // =========================================================================
    // Persistence & theme
    // =========================================================================

    /// Writes the current state tree to local storage. Best-effort: a
    /// failure is logged and the session carries on.
    pub async fn persist(&self) {
        let cart = self.cart.snapshot();
        let favorites = self.favorites.snapshot();

        if let Err(e) = persist_state(&self.kv, &cart, &favorites).await {
            warn!(error = %e, "Failed to persist state");
        }
    }

    /// Removes the persisted state tree. Best-effort.
    pub async fn clear_persisted(&self) {
        if let Err(e) = clear_persisted_state(&self.kv).await {
            warn!(error = %e, "Failed to clear persisted state");
        }
    }

    /// The current theme preference.
    pub fn theme_mode(&self) -> ThemeMode {
        *self.theme.lock().expect("Theme mutex poisoned")
    }

    /// Updates the theme preference and stores it. Best-effort on the
    /// write: the in-memory preference changes either way.
    pub async fn set_theme_mode(&self, mode: ThemeMode) {
        *self.theme.lock().expect("Theme mutex poisoned") = mode;

        if let Err(e) = save_theme_mode(&self.kv, mode).await {
            warn!(error = %e, "Failed to save theme mode");
        }
    }
}

// =============================================================================
// Data Directory Resolution
// =============================================================================

/// Determines the storage directory.
///
/// ## Priority
/// 1. `AppConfig::data_dir` (tests and embedders)
/// 2. `MINI_CATALOG_DATA_DIR` environment variable
/// 3. Platform app-data directory
///    - **macOS**: `~/Library/Application Support/com.minicatalog.mini-catalog`
///    - **Windows**: `%APPDATA%\minicatalog\mini-catalog\data`
///    - **Linux**: `~/.local/share/mini-catalog`
fn resolve_data_dir(config: &AppConfig) -> Result<PathBuf, AppError> {
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }

    if let Ok(path) = std::env::var("MINI_CATALOG_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = directories::ProjectDirs::from("com", "minicatalog", "mini-catalog")
        .ok_or_else(|| AppError::internal("Could not determine app data directory"))?;

    Ok(proj_dirs.data_dir().to_path_buf())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use catalog_data::FetchDelays;

    fn test_config() -> AppConfig {
        let dir = std::env::temp_dir().join(format!("catalog-session-{}", uuid::Uuid::new_v4()));
        AppConfig {
            data_dir: Some(dir),
            fetch_delays: FetchDelays::none(),
            ..AppConfig::default()
        }
    }

    async fn session() -> Session {
        Session::init(test_config()).await.unwrap()
    }

    #[tokio::test]
    async fn test_starts_empty_without_persisted_state() {
        let session = session().await;

        assert!(session.cart().items.is_empty());
        assert_eq!(session.cart_badge_count(), 0);
        assert_eq!(session.wishlist_count(), 0);
        assert_eq!(session.theme_mode(), ThemeMode::System);
    }

    #[tokio::test]
    async fn test_add_to_cart_freezes_feed_price() {
        let session = session().await;

        let view = session.add_to_cart("1", None).await.unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Wireless Headphones");
        assert_eq!(view.totals.subtotal_cents, 7999);

        // Adding again merges quantity into the same line.
        let view = session.add_to_cart("1", Some(2)).await.unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 3);
        assert_eq!(view.totals.subtotal_cents, 7999 * 3);
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_product() {
        let session = session().await;

        let err = session.add_to_cart("no-such-id", None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_update_and_remove_lines() {
        let session = session().await;
        session.add_to_cart("1", None).await.unwrap();
        session.add_to_cart("8", Some(2)).await.unwrap();

        let view = session.update_cart_item("8", 4);
        assert_eq!(view.totals.subtotal_cents, 7999 + 1999 * 4);

        // Driving a quantity to zero removes the line.
        let view = session.update_cart_item("1", 0);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, "8");

        let view = session.remove_from_cart("8");
        assert!(view.items.is_empty());
        assert_eq!(view.totals.total_cents, 0);
    }

    #[tokio::test]
    async fn test_clear_cart() {
        let session = session().await;
        session.add_to_cart("1", Some(2)).await.unwrap();
        session.add_to_cart("2", None).await.unwrap();

        let view = session.clear_cart();
        assert!(view.items.is_empty());
        assert_eq!(session.cart_badge_count(), 0);
    }

    #[tokio::test]
    async fn test_wishlist_resolves_against_feed() {
        let session = session().await;

        assert!(session.toggle_favorite("3"));
        assert!(session.toggle_favorite("ghost-product"));
        assert_eq!(session.wishlist_count(), 2);

        // Only ids the feed knows come back as products.
        let wishlist = session.wishlist().await;
        assert_eq!(wishlist.len(), 1);
        assert_eq!(wishlist[0].name, "Running Shoes");

        assert!(!session.toggle_favorite("3"));
        session.clear_favorites();
        assert_eq!(session.wishlist_count(), 0);
    }

    #[tokio::test]
    async fn test_search_passthrough() {
        let session = session().await;
        let hits = session.search_products("speaker").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "9");
    }

    #[tokio::test]
    async fn test_persist_and_restore_across_sessions() {
        let config = test_config();

        let first = Session::init(config.clone()).await.unwrap();
        first.add_to_cart("1", Some(2)).await.unwrap();
        first.toggle_favorite("6");
        first.set_theme_mode(ThemeMode::Dark).await;
        first.persist().await;

        let second = Session::init(config.clone()).await.unwrap();
        assert_eq!(second.cart_badge_count(), 2);
        assert_eq!(second.cart().totals.subtotal_cents, 7999 * 2);
        assert!(second.is_favorite("6"));
        assert_eq!(second.theme_mode(), ThemeMode::Dark);

        // After clearing, a third session starts fresh (theme is stored
        // under its own key and survives).
        second.clear_persisted().await;
        let third = Session::init(config).await.unwrap();
        assert!(third.cart().items.is_empty());
        assert_eq!(third.wishlist_count(), 0);
        assert_eq!(third.theme_mode(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_checkout_flow_against_live_cart() {
        let session = session().await;
        session.add_to_cart("6", Some(2)).await.unwrap(); // 2999 × 2

        let mut checkout = session.begin_checkout();
        let cart = session.cart_snapshot();
        let discount = checkout.apply_code("save10", &cart).unwrap();
        assert_eq!(discount.cents(), 600);

        let summary = checkout.summary(&cart);
        assert_eq!(summary.subtotal_cents, 5998);
        assert_eq!(summary.total_cents, 5398);
    }
}
