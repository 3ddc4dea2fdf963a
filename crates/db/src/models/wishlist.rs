//! Wishlist item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wishlist_core::types::{DbId, Timestamp};

/// A row from the `wishlists` table.
///
/// This is the single shape used for both storage and HTTP responses.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct WishlistItem {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub catalog_id: Option<DbId>,
    pub catalog_name: Option<String>,
    pub catalog_type: Option<String>,
    pub catalog_image_url: Option<String>,
    pub catalog_condition: Option<String>,
    pub catalog_strike_price: Option<f64>,
    pub catalog_selling_price: Option<f64>,
    pub created_at: Timestamp,
    /// Set when the item is soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

/// DTO for adding an item to a wishlist.
///
/// Every field is optional. Server-assigned fields (`id`, `created_at`,
/// `deleted_at`) are not accepted and are ignored if a client sends them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewWishlistItem {
    pub user_id: Option<DbId>,
    pub catalog_id: Option<DbId>,
    pub catalog_name: Option<String>,
    pub catalog_type: Option<String>,
    pub catalog_image_url: Option<String>,
    pub catalog_condition: Option<String>,
    pub catalog_strike_price: Option<f64>,
    pub catalog_selling_price: Option<f64>,
}
