pub mod health;
pub mod wishlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST   /add_to_wishlist                 add an item
/// GET    /get_wishlist                    list active items
/// DELETE /remove_from_wishlist/{id}       soft-delete an item
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(wishlist::router())
}
