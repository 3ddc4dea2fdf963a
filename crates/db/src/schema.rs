//! Declared shape of the `wishlists` table and additive reconciliation.
//!
//! The live schema is brought up to date by issuing idempotent DDL for every
//! declared column and index. Nothing is ever dropped or renamed, so columns
//! added by hand (or by an older deployment) survive untouched.

use crate::DbPool;

/// Table holding wishlist items.
pub const TABLE: &str = "wishlists";

/// Key for the advisory lock held while reconciling, so two processes
/// starting at once do not interleave DDL.
const MIGRATION_LOCK_KEY: i64 = 0x7769_7368_6c69_7374;

/// A column on [`TABLE`] other than the primary key.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
}

/// A single-column btree index on [`TABLE`].
#[derive(Debug, Clone, Copy)]
pub struct IndexDef {
    pub name: &'static str,
    pub column: &'static str,
}

impl ColumnDef {
    fn add_statement(&self) -> String {
        let ColumnDef { name, sql_type } = self;
        format!("ALTER TABLE {TABLE} ADD COLUMN IF NOT EXISTS {name} {sql_type}")
    }
}

impl IndexDef {
    fn create_statement(&self) -> String {
        let IndexDef { name, column } = self;
        format!("CREATE INDEX IF NOT EXISTS {name} ON {TABLE} ({column})")
    }
}

const fn column(name: &'static str, sql_type: &'static str) -> ColumnDef {
    ColumnDef { name, sql_type }
}

const fn index(name: &'static str, column: &'static str) -> IndexDef {
    IndexDef { name, column }
}

pub const COLUMNS: &[ColumnDef] = &[
    column("user_id", "BIGINT"),
    column("catalog_id", "BIGINT"),
    column("catalog_name", "TEXT"),
    column("catalog_type", "TEXT"),
    column("catalog_image_url", "TEXT"),
    column("catalog_condition", "TEXT"),
    column("catalog_strike_price", "DOUBLE PRECISION"),
    column("catalog_selling_price", "DOUBLE PRECISION"),
    column("created_at", "TIMESTAMPTZ NOT NULL DEFAULT NOW()"),
    column("deleted_at", "TIMESTAMPTZ"),
];

pub const INDEXES: &[IndexDef] = &[
    index("idx_wishlists_user_id", "user_id"),
    index("idx_wishlists_catalog_id", "catalog_id"),
    index("idx_wishlists_deleted_at", "deleted_at"),
];

/// DDL statements, in execution order, that reconcile the live schema.
pub fn migration_statements() -> Vec<String> {
    let create_table = format!("CREATE TABLE IF NOT EXISTS {TABLE} (id BIGSERIAL PRIMARY KEY)");
    let mut statements = vec![create_table];
    statements.extend(COLUMNS.iter().map(ColumnDef::add_statement));
    statements.extend(INDEXES.iter().map(IndexDef::create_statement));
    statements
}

/// Apply [`migration_statements`] in one transaction under an advisory lock.
pub async fn migrate(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    let statements = migration_statements();
    for statement in &statements {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    tracing::debug!(
        table = TABLE,
        statements = statements.len(),
        "Schema reconciled"
    );
    Ok(())
}
