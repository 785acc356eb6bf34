// src/services/catalog.rs

//! Read access to the product catalog, plus the single write the admin
//! surface needs. Products are never updated or deleted.

use crate::errors::{AppError, Result};
use crate::models::Product;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{info, instrument};

/// Fields for a new product as submitted by the admin form. The price comes
/// in major units (euros) and is stored in cents.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub price_eur: f64,
  #[serde(default)]
  pub image_url: String,
}

#[instrument(skip(pool))]
pub async fn list_products(pool: &SqlitePool) -> Result<Vec<Product>> {
  let products: Vec<Product> =
    sqlx::query_as("SELECT id, name, description, price_cents, image_url FROM products ORDER BY id ASC")
      .fetch_all(pool)
      .await?;
  Ok(products)
}

#[instrument(skip(pool))]
pub async fn get_product(pool: &SqlitePool, product_id: i64) -> Result<Option<Product>> {
  let product: Option<Product> =
    sqlx::query_as("SELECT id, name, description, price_cents, image_url FROM products WHERE id = $1")
      .bind(product_id)
      .fetch_optional(pool)
      .await?;
  Ok(product)
}

#[instrument(skip(pool, new_product), fields(name = %new_product.name))]
pub async fn insert_product(pool: &SqlitePool, new_product: NewProduct) -> Result<Product> {
  if new_product.name.trim().is_empty() {
    return Err(AppError::Validation("Product name must not be empty.".to_string()));
  }
  if new_product.price_eur < 0.0 || !new_product.price_eur.is_finite() {
    return Err(AppError::Validation("Product price must be a non-negative number.".to_string()));
  }
  let price_cents = (new_product.price_eur * 100.0).round() as i64;

  let product_id = sqlx::query("INSERT INTO products (name, description, price_cents, image_url) VALUES ($1, $2, $3, $4)")
    .bind(&new_product.name)
    .bind(&new_product.description)
    .bind(price_cents)
    .bind(&new_product.image_url)
    .execute(pool)
    .await?
    .last_insert_rowid();

  info!(product_id, price_cents, "Product added to catalog.");

  Ok(Product {
    id: product_id,
    name: new_product.name,
    description: new_product.description,
    price_cents,
    image_url: new_product.image_url,
  })
}
