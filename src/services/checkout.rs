// src/services/checkout.rs

//! Turns a cart into a persisted order.

use crate::cart::Cart;
use crate::errors::{AppError, Result};
use crate::models::Order;
use crate::services::pricing;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};

/// Places an order for everything in the cart.
///
/// The cart is first resolved against the catalog (entries for vanished
/// products drop out); a cart with no valid lines yields `EmptyCart` and no
/// order row. Otherwise the order and all its items are written in a single
/// transaction, each item capturing the product's current price as
/// `unit_price_cents`. On success the cart is cleared.
#[instrument(skip(pool, cart), fields(entries = cart.len()))]
pub async fn place_order(pool: &SqlitePool, cart: &mut Cart) -> Result<Order> {
  let totals = pricing::cart_totals(pool, cart).await?;
  if totals.lines.is_empty() {
    return Err(AppError::EmptyCart);
  }

  let created_at = Utc::now();
  let mut tx = pool.begin().await?;

  let order_id = sqlx::query("INSERT INTO orders (created_at, total_cents) VALUES ($1, $2)")
    .bind(created_at)
    .bind(totals.subtotal_cents)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

  for line in &totals.lines {
    sqlx::query("INSERT INTO order_items (order_id, product_id, quantity, unit_price_cents) VALUES ($1, $2, $3, $4)")
      .bind(order_id)
      .bind(line.product.id)
      .bind(line.quantity)
      .bind(line.product.price_cents)
      .execute(&mut *tx)
      .await?;
  }

  tx.commit().await?;
  cart.clear();

  info!(
    order_id,
    total_cents = totals.subtotal_cents,
    items = totals.lines.len(),
    "Order placed."
  );

  Ok(Order {
    id: order_id,
    created_at,
    total_cents: totals.subtotal_cents,
  })
}
