//! Repository for the `wishlists` table.

use sqlx::PgPool;
use wishlist_core::types::DbId;

use crate::models::wishlist::{NewWishlistItem, WishlistItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, catalog_id, catalog_name, catalog_type, \
    catalog_image_url, catalog_condition, catalog_strike_price, \
    catalog_selling_price, created_at, deleted_at";

/// Provides create, list and soft-delete operations for wishlist items.
///
/// There is deliberately no update or hard-delete: items are immutable once
/// stored and removal only stamps `deleted_at`.
pub struct WishlistRepo;

impl WishlistRepo {
    /// Insert a new item, returning the stored row with its assigned `id`
    /// and `created_at`.
    pub async fn create(
        pool: &PgPool,
        input: &NewWishlistItem,
    ) -> Result<WishlistItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO wishlists (user_id, catalog_id, catalog_name, catalog_type,
                 catalog_image_url, catalog_condition, catalog_strike_price, catalog_selling_price)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(input.user_id)
            .bind(input.catalog_id)
            .bind(&input.catalog_name)
            .bind(&input.catalog_type)
            .bind(&input.catalog_image_url)
            .bind(&input.catalog_condition)
            .bind(input.catalog_strike_price)
            .bind(input.catalog_selling_price)
            .fetch_one(pool)
            .await
    }

    /// List all items in insertion order. Excludes soft-deleted rows.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<WishlistItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wishlists WHERE deleted_at IS NULL ORDER BY id"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Soft-delete an item by ID. Returns `true` if a row was marked deleted.
    ///
    /// An unknown or already-deleted ID affects no rows and is not an error.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE wishlists SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find an item by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WishlistItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wishlists WHERE id = $1");
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
