// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use shopfront::db;
use shopfront::models::Product;
use shopfront::services::catalog;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub fn setup_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

/// A fresh in-memory database with the storefront schema applied. One
/// connection only, so the database lives as long as the pool.
pub async fn test_pool() -> SqlitePool {
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .idle_timeout(None)
    .max_lifetime(None)
    .connect("sqlite::memory:")
    .await
    .expect("failed to open in-memory sqlite pool");
  db::init_schema(&pool).await.expect("failed to create schema");
  pool
}

pub async fn add_test_product(pool: &SqlitePool, name: &str, price_cents: i64) -> Product {
  let product_id = sqlx::query("INSERT INTO products (name, description, price_cents, image_url) VALUES ($1, $2, $3, $4)")
    .bind(name)
    .bind("test product")
    .bind(price_cents)
    .bind("")
    .execute(pool)
    .await
    .expect("failed to insert test product")
    .last_insert_rowid();

  catalog::get_product(pool, product_id)
    .await
    .expect("failed to fetch test product")
    .expect("test product missing after insert")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
  sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
    .fetch_one(pool)
    .await
    .expect("failed to count rows")
}
