// src/db.rs

//! Connection bootstrap, schema creation and catalog seeding.

use crate::errors::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{info, instrument};

pub async fn connect(database_url: &str) -> Result<SqlitePool> {
  let options = database_url.parse::<SqliteConnectOptions>()?.create_if_missing(true);
  let pool = SqlitePoolOptions::new().connect_with(options).await?;
  Ok(pool)
}

/// Creates the storefront tables if they do not exist yet. Identifiers are
/// auto-assigned row ids; order items snapshot the unit price at purchase
/// time so later catalog edits cannot rewrite order history.
#[instrument(skip(pool))]
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
  sqlx::query(
    "CREATE TABLE IF NOT EXISTS products (
       id INTEGER PRIMARY KEY AUTOINCREMENT,
       name TEXT NOT NULL,
       description TEXT NOT NULL DEFAULT '',
       price_cents INTEGER NOT NULL DEFAULT 0,
       image_url TEXT NOT NULL DEFAULT ''
     )",
  )
  .execute(pool)
  .await?;

  sqlx::query(
    "CREATE TABLE IF NOT EXISTS orders (
       id INTEGER PRIMARY KEY AUTOINCREMENT,
       created_at TEXT NOT NULL,
       total_cents INTEGER NOT NULL DEFAULT 0
     )",
  )
  .execute(pool)
  .await?;

  sqlx::query(
    "CREATE TABLE IF NOT EXISTS order_items (
       id INTEGER PRIMARY KEY AUTOINCREMENT,
       order_id INTEGER NOT NULL REFERENCES orders(id),
       product_id INTEGER NOT NULL REFERENCES products(id),
       quantity INTEGER NOT NULL DEFAULT 1,
       unit_price_cents INTEGER NOT NULL DEFAULT 0
     )",
  )
  .execute(pool)
  .await?;

  info!("Database schema ready.");
  Ok(())
}

const SAMPLE_PRODUCTS: &[(&str, &str, i64, &str)] = &[
  (
    "Canvas Backpack",
    "Durable 20L backpack great for everyday carry.",
    4999,
    "https://images.unsplash.com/photo-1514477917009-389c76a86b68?q=80&w=1200",
  ),
  (
    "Stainless Water Bottle",
    "Insulated 750ml keeps drinks cold or hot for hours.",
    2499,
    "https://images.unsplash.com/photo-1558640469-76b1d33f11d6?q=80&w=1200",
  ),
  (
    "Wireless Earbuds",
    "Compact case, long battery life, crisp sound.",
    7999,
    "https://images.unsplash.com/photo-1585386959984-a41552231658?q=80&w=1200",
  ),
];

/// Inserts the demo products when the catalog is empty. A no-op otherwise,
/// so restarting the server never duplicates rows.
#[instrument(skip(pool))]
pub async fn seed_sample_products(pool: &SqlitePool) -> Result<()> {
  let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products").fetch_one(pool).await?;
  if count > 0 {
    info!(existing = count, "Catalog already populated; skipping seed.");
    return Ok(());
  }

  for (name, description, price_cents, image_url) in SAMPLE_PRODUCTS {
    sqlx::query("INSERT INTO products (name, description, price_cents, image_url) VALUES ($1, $2, $3, $4)")
      .bind(name)
      .bind(description)
      .bind(price_cents)
      .bind(image_url)
      .execute(pool)
      .await?;
  }

  info!(seeded = SAMPLE_PRODUCTS.len(), "Seeded sample products into empty catalog.");
  Ok(())
}
