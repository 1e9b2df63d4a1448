//! Schema presence checks used by the health endpoint.

use flickfinder_db::{missing_tables, REQUIRED_TABLES};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn migrated_schema_has_every_required_table(pool: SqlitePool) {
    assert!(missing_tables(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = false)]
async fn empty_schema_reports_all_tables_missing(pool: SqlitePool) {
    assert_eq!(missing_tables(&pool).await.unwrap(), REQUIRED_TABLES.to_vec());
}

#[sqlx::test(migrations = false)]
async fn partial_schema_reports_only_absent_tables(pool: SqlitePool) {
    sqlx::query("CREATE TABLE movies (id INTEGER PRIMARY KEY, title TEXT, year INTEGER)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("CREATE TABLE ratings (movie_id INTEGER, rating REAL, votes INTEGER)")
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(missing_tables(&pool).await.unwrap(), vec!["people", "stars"]);
}
