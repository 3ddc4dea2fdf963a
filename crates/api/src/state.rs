use std::sync::Arc;

use wishlist_db::store::WishlistStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage backend for wishlist items.
    pub store: Arc<dyn WishlistStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WishlistStore>) -> Self {
        Self { store }
    }
}
