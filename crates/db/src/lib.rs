//! Persistence layer for the wishlist service.
//!
//! Owns the connection pool, the `wishlists` table schema and every SQL
//! statement the service issues. Callers outside this crate talk to the
//! database through [`store::WishlistStore`].

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod config;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub use config::DbConfig;

pub type DbPool = sqlx::PgPool;

/// Boxed error used where the failing component is not always sqlx.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The pool could not be built, either because a setting was malformed
    /// or because the server refused the connection.
    #[error("could not connect to database")]
    Connection(#[source] BoxError),

    /// Schema reconciliation failed.
    #[error("schema migration failed")]
    Migration(#[source] sqlx::Error),

    /// A query against an established pool failed.
    #[error("database query failed")]
    Query(#[from] sqlx::Error),
}

/// Create a connection pool from discrete connection settings.
///
/// Settings are used as given. A port or SSL mode that does not parse is
/// reported as [`DbError::Connection`], the same as a refused connection.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, DbError> {
    let options = connect_options(config)?;
    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
        .map_err(|e| DbError::Connection(e.into()))
}

/// Build connect options from [`DbConfig`] without opening a connection.
pub fn connect_options(config: &DbConfig) -> Result<PgConnectOptions, DbError> {
    let port: u16 = config
        .port
        .parse()
        .map_err(|e: std::num::ParseIntError| DbError::Connection(e.into()))?;
    let ssl_mode = PgSslMode::from_str(&config.sslmode)
        .map_err(|e| DbError::Connection(e.into()))?;

    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.dbname)
        .ssl_mode(ssl_mode))
}

/// Verify the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Bring the live schema in line with the declared `wishlists` table.
///
/// Additive only; safe to call on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    schema::migrate(pool).await.map_err(DbError::Migration)
}
