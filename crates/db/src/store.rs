//! The storage capability handed to request handlers.
//!
//! Handlers hold an `Arc<dyn WishlistStore>` instead of a pool so they can
//! be exercised against an in-memory substitute.

use async_trait::async_trait;
use wishlist_core::types::DbId;

use crate::models::wishlist::{NewWishlistItem, WishlistItem};
use crate::repositories::WishlistRepo;
use crate::{DbError, DbPool};

/// Create, read and soft-delete over wishlist items.
#[async_trait]
pub trait WishlistStore: Send + Sync {
    /// Persist a new item and return it with server-assigned fields.
    async fn create(&self, input: &NewWishlistItem) -> Result<WishlistItem, DbError>;

    /// All items that have not been soft-deleted, in insertion order.
    async fn list_active(&self) -> Result<Vec<WishlistItem>, DbError>;

    /// Mark an item deleted. `Ok(false)` means no active row matched.
    async fn soft_delete(&self, id: DbId) -> Result<bool, DbError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}

/// [`WishlistStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgWishlistStore {
    pool: DbPool,
}

impl PgWishlistStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistStore for PgWishlistStore {
    async fn create(&self, input: &NewWishlistItem) -> Result<WishlistItem, DbError> {
        let item = WishlistRepo::create(&self.pool, input).await?;
        tracing::debug!(id = item.id, "Inserted wishlist item");
        Ok(item)
    }

    async fn list_active(&self) -> Result<Vec<WishlistItem>, DbError> {
        Ok(WishlistRepo::list_active(&self.pool).await?)
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, DbError> {
        let deleted = WishlistRepo::soft_delete(&self.pool, id).await?;
        if !deleted {
            tracing::debug!(id, "Soft-delete matched no active wishlist item");
        }
        Ok(deleted)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
