//! Integration tests for additive schema reconciliation.

use sqlx::PgPool;
use wishlist_db::schema::{COLUMNS, INDEXES, TABLE};

async fn column_names(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar(
        "SELECT column_name::text FROM information_schema.columns
         WHERE table_name = $1 ORDER BY column_name",
    )
    .bind(TABLE)
    .fetch_all(pool)
    .await
    .unwrap()
}

async fn index_names(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar(
        "SELECT indexname::text FROM pg_indexes
         WHERE tablename = $1 ORDER BY indexname",
    )
    .bind(TABLE)
    .fetch_all(pool)
    .await
    .unwrap()
}

/// Fresh database: every declared column and index exists afterwards.
#[sqlx::test(migrations = false)]
async fn test_migrate_creates_table(pool: PgPool) {
    wishlist_db::run_migrations(&pool).await.unwrap();

    let columns = column_names(&pool).await;
    assert!(columns.contains(&"id".to_string()));
    for column in COLUMNS {
        assert!(
            columns.iter().any(|c| c == column.name),
            "missing column {}",
            column.name
        );
    }

    let indexes = index_names(&pool).await;
    for index in INDEXES {
        assert!(
            indexes.iter().any(|i| i == index.name),
            "missing index {}",
            index.name
        );
    }
}

/// Running twice is a no-op: no error and no schema diff.
#[sqlx::test(migrations = false)]
async fn test_migrate_is_idempotent(pool: PgPool) {
    wishlist_db::run_migrations(&pool).await.unwrap();
    let columns_before = column_names(&pool).await;
    let indexes_before = index_names(&pool).await;

    wishlist_db::run_migrations(&pool).await.unwrap();

    assert_eq!(column_names(&pool).await, columns_before);
    assert_eq!(index_names(&pool).await, indexes_before);
}

/// A partial pre-existing table gains the missing columns and keeps its
/// rows and any extra columns.
#[sqlx::test(migrations = false)]
async fn test_migrate_adds_missing_columns_without_dropping(pool: PgPool) {
    sqlx::query(
        "CREATE TABLE wishlists (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT,
            legacy_note TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO wishlists (user_id, legacy_note) VALUES (3, 'keep me')")
        .execute(&pool)
        .await
        .unwrap();

    wishlist_db::run_migrations(&pool).await.unwrap();

    let columns = column_names(&pool).await;
    assert!(columns.contains(&"legacy_note".to_string()));
    assert!(columns.contains(&"catalog_selling_price".to_string()));
    assert!(columns.contains(&"deleted_at".to_string()));

    let (note, created_at_set): (String, bool) = sqlx::query_as(
        "SELECT legacy_note, created_at IS NOT NULL FROM wishlists
         WHERE user_id = 3",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(note, "keep me");
    assert!(created_at_set, "existing rows should be backfilled by the default");
}
