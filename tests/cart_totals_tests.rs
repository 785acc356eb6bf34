// tests/cart_totals_tests.rs
mod common; // Reference the common module

use common::*;
use shopfront::cart::Cart;
use shopfront::services::pricing;

#[tokio::test]
async fn totals_multiply_quantity_by_current_price() {
  setup_tracing();
  let pool = test_pool().await;
  let backpack = add_test_product(&pool, "Backpack", 499).await;
  let bottle = add_test_product(&pool, "Bottle", 250).await;

  let mut cart = Cart::new();
  cart.add(backpack.id, 2);
  cart.add(bottle.id, 1);

  let totals = pricing::cart_totals(&pool, &cart).await.expect("totals");

  assert_eq!(totals.lines.len(), 2);
  assert_eq!(totals.lines[0].line_total_cents, 998);
  assert_eq!(totals.lines[1].line_total_cents, 250);
  assert_eq!(totals.subtotal_cents, 1248);

  let summed: i64 = totals.lines.iter().map(|line| line.line_total_cents).sum();
  assert_eq!(totals.subtotal_cents, summed);
}

#[tokio::test]
async fn totals_skip_products_missing_from_catalog() {
  setup_tracing();
  let pool = test_pool().await;
  let bottle = add_test_product(&pool, "Bottle", 250).await;

  let mut cart = Cart::new();
  cart.add(bottle.id, 3);
  cart.add(99_999, 2); // never existed

  let totals = pricing::cart_totals(&pool, &cart).await.expect("totals");

  // The vanished product is skipped silently, not reported.
  assert_eq!(totals.lines.len(), 1);
  assert_eq!(totals.lines[0].product.id, bottle.id);
  assert_eq!(totals.subtotal_cents, 750);
  // The cart itself keeps the stale entry.
  assert_eq!(cart.quantity_of(99_999), 2);
}

#[tokio::test]
async fn totals_of_empty_cart_are_zero() {
  setup_tracing();
  let pool = test_pool().await;
  let cart = Cart::new();

  let totals = pricing::cart_totals(&pool, &cart).await.expect("totals");

  assert!(totals.lines.is_empty());
  assert_eq!(totals.subtotal_cents, 0);
}

#[tokio::test]
async fn totals_follow_live_catalog_prices() {
  setup_tracing();
  let pool = test_pool().await;
  let bottle = add_test_product(&pool, "Bottle", 250).await;

  let mut cart = Cart::new();
  cart.add(bottle.id, 1);

  sqlx::query("UPDATE products SET price_cents = 300 WHERE id = $1")
    .bind(bottle.id)
    .execute(&pool)
    .await
    .expect("price update");

  let totals = pricing::cart_totals(&pool, &cart).await.expect("totals");
  assert_eq!(totals.subtotal_cents, 300);
}
