//! Shared helpers for the API integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use wishlist_api::config::ServerConfig;
use wishlist_api::router::build_app_router;
use wishlist_api::state::AppState;
use wishlist_core::types::DbId;
use wishlist_db::models::wishlist::{NewWishlistItem, WishlistItem};
use wishlist_db::store::{PgWishlistStore, WishlistStore};
use wishlist_db::DbError;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
    }
}

/// Full application router over the given store, with the production
/// middleware stack.
pub fn build_test_app(store: Arc<dyn WishlistStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

/// Full application router over a migrated PostgreSQL pool.
pub async fn build_pg_app(pool: PgPool) -> Router {
    wishlist_db::run_migrations(&pool).await.unwrap();
    build_test_app(Arc::new(PgWishlistStore::new(pool)))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, Some("application/json"), body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<String>,
) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    send(app, builder.body(Body::from(body.into())).unwrap()).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// In-memory stores
// ---------------------------------------------------------------------------

/// [`WishlistStore`] kept in a `Vec`, counting calls so tests can assert
/// that guarded paths never reach storage.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<WishlistItem>>,
    pub create_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every row, including soft-deleted ones.
    pub fn all_rows(&self) -> Vec<WishlistItem> {
        self.rows.lock().unwrap().clone()
    }

    pub fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WishlistStore for MemoryStore {
    async fn create(&self, input: &NewWishlistItem) -> Result<WishlistItem, DbError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let item = WishlistItem {
            id: rows.len() as DbId + 1,
            user_id: input.user_id,
            catalog_id: input.catalog_id,
            catalog_name: input.catalog_name.clone(),
            catalog_type: input.catalog_type.clone(),
            catalog_image_url: input.catalog_image_url.clone(),
            catalog_condition: input.catalog_condition.clone(),
            catalog_strike_price: input.catalog_strike_price,
            catalog_selling_price: input.catalog_selling_price,
            created_at: chrono::Utc::now(),
            deleted_at: None,
        };
        rows.push(item.clone());
        Ok(item)
    }

    async fn list_active(&self) -> Result<Vec<WishlistItem>, DbError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, DbError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == id && r.deleted_at.is_none()) {
            Some(row) => {
                row.deleted_at = Some(chrono::Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

/// [`WishlistStore`] whose every call fails as if the pool were exhausted.
pub struct FailingStore;

#[async_trait]
impl WishlistStore for FailingStore {
    async fn create(&self, _input: &NewWishlistItem) -> Result<WishlistItem, DbError> {
        Err(DbError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn list_active(&self) -> Result<Vec<WishlistItem>, DbError> {
        Err(DbError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn soft_delete(&self, _id: DbId) -> Result<bool, DbError> {
        Err(DbError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), DbError> {
        Err(DbError::Query(sqlx::Error::PoolTimedOut))
    }
}
