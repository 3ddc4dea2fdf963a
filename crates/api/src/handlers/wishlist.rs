//! Handlers for the wishlist resource.
//!
//! Each handler is a single pass-through to [`WishlistStore`]; there is no
//! field validation beyond JSON type parsing.
//!
//! [`WishlistStore`]: wishlist_db::store::WishlistStore

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use wishlist_core::types::parse_db_id;
use wishlist_db::models::wishlist::{NewWishlistItem, WishlistItem};

use crate::error::{AppError, AppResult, Operation};
use crate::response::MessageResponse;
use crate::state::AppState;

pub const ADDED_MESSAGE: &str = "Added to wishlist successfully";
pub const FETCHED_MESSAGE: &str = "Wishlist fetched successfully";
pub const REMOVED_MESSAGE: &str = "Removed from wishlist successfully";

/// POST /api/add_to_wishlist
///
/// Store the posted item. The created row is not echoed back.
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    payload: Result<Json<NewWishlistItem>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(input) = payload?;

    let item = state
        .store
        .create(&input)
        .await
        .map_err(AppError::storage(Operation::Add))?;
    tracing::info!(id = item.id, "Added to wishlist");

    Ok(Json(MessageResponse::message(ADDED_MESSAGE)))
}

/// GET /api/get_wishlist
///
/// List every item that has not been removed, in insertion order.
pub async fn get_wishlist(
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse<Vec<WishlistItem>>>> {
    let items = state
        .store
        .list_active()
        .await
        .map_err(AppError::storage(Operation::Get))?;

    Ok(Json(MessageResponse::with_data(FETCHED_MESSAGE, items)))
}

/// DELETE /api/remove_from_wishlist/{id}
///
/// Soft-delete an item. An id that matches no active item still succeeds.
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(raw_id) = raw_id?;
    let id = match parse_db_id(&raw_id) {
        None => return Err(AppError::MissingId),
        Some(Err(source)) => {
            return Err(AppError::InvalidId {
                raw: raw_id,
                source,
            })
        }
        Some(Ok(id)) => id,
    };

    let removed = state
        .store
        .soft_delete(id)
        .await
        .map_err(AppError::storage(Operation::Remove))?;
    tracing::info!(id, removed, "Removed from wishlist");

    Ok(Json(MessageResponse::message(REMOVED_MESSAGE)))
}

/// DELETE /api/remove_from_wishlist (with or without trailing slash)
pub async fn remove_without_id() -> AppResult<Json<MessageResponse>> {
    Err(AppError::MissingId)
}
