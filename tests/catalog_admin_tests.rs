// tests/catalog_admin_tests.rs
mod common; // Reference the common module

use common::*;
use shopfront::db;
use shopfront::errors::AppError;
use shopfront::services::{admin, catalog};

fn new_product(name: &str, price_eur: f64) -> catalog::NewProduct {
  catalog::NewProduct {
    name: name.to_string(),
    description: String::new(),
    price_eur,
    image_url: String::new(),
  }
}

#[tokio::test]
async fn list_products_returns_catalog_in_insertion_order() {
  setup_tracing();
  let pool = test_pool().await;
  let first = add_test_product(&pool, "Backpack", 4999).await;
  let second = add_test_product(&pool, "Bottle", 2499).await;

  let products = catalog::list_products(&pool).await.expect("list");

  assert_eq!(products.len(), 2);
  assert_eq!(products[0].id, first.id);
  assert_eq!(products[1].id, second.id);
}

#[tokio::test]
async fn get_product_missing_returns_none() {
  setup_tracing();
  let pool = test_pool().await;

  let found = catalog::get_product(&pool, 12_345).await.expect("lookup");
  assert!(found.is_none());
}

#[tokio::test]
async fn admin_gate_rejects_wrong_password() {
  setup_tracing();

  assert!(matches!(admin::require_admin("nope", "admin"), Err(AppError::Auth(_))));
  assert!(admin::require_admin("admin", "admin").is_ok());
}

#[tokio::test]
async fn add_product_with_wrong_credential_creates_nothing() {
  setup_tracing();
  let pool = test_pool().await;

  let result = admin::add_product(&pool, new_product("Scarf", 19.99), "wrong", "admin").await;

  assert!(matches!(result, Err(AppError::Auth(_))));
  assert_eq!(count_rows(&pool, "products").await, 0);
}

#[tokio::test]
async fn add_product_with_correct_credential_stores_price_in_cents() {
  setup_tracing();
  let pool = test_pool().await;

  let product = admin::add_product(&pool, new_product("Scarf", 12.5), "admin", "admin")
    .await
    .expect("add product");

  assert_eq!(product.price_cents, 1250);

  let stored = catalog::get_product(&pool, product.id)
    .await
    .expect("lookup")
    .expect("stored product");
  assert_eq!(stored.name, "Scarf");
  assert_eq!(stored.price_cents, 1250);
}

#[tokio::test]
async fn insert_product_rejects_blank_name_and_negative_price() {
  setup_tracing();
  let pool = test_pool().await;

  let blank = catalog::insert_product(&pool, new_product("   ", 5.0)).await;
  assert!(matches!(blank, Err(AppError::Validation(_))));

  let negative = catalog::insert_product(&pool, new_product("Scarf", -1.0)).await;
  assert!(matches!(negative, Err(AppError::Validation(_))));

  assert_eq!(count_rows(&pool, "products").await, 0);
}

#[tokio::test]
async fn seeding_is_idempotent() {
  setup_tracing();
  let pool = test_pool().await;

  db::seed_sample_products(&pool).await.expect("first seed");
  let after_first = count_rows(&pool, "products").await;
  assert!(after_first > 0);

  db::seed_sample_products(&pool).await.expect("second seed");
  assert_eq!(count_rows(&pool, "products").await, after_first);
}
