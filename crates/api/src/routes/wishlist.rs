//! Route definitions for the wishlist resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::wishlist;
use crate::state::AppState;

/// Wishlist routes, mounted under `/api`.
///
/// The id-less remove paths are routed explicitly so an empty id gets the
/// wishlist error body instead of a bare 404.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add_to_wishlist", post(wishlist::add_to_wishlist))
        .route("/get_wishlist", get(wishlist::get_wishlist))
        .route(
            "/remove_from_wishlist/{id}",
            delete(wishlist::remove_from_wishlist),
        )
        .route(
            "/remove_from_wishlist/",
            delete(wishlist::remove_without_id),
        )
        .route("/remove_from_wishlist", delete(wishlist::remove_without_id))
}
