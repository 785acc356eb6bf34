// src/services/orders.rs

//! Read access to finalized orders.

use crate::errors::Result;
use crate::models::{Order, OrderItem};
use sqlx::SqlitePool;
use tracing::instrument;

#[instrument(skip(pool))]
pub async fn get_order(pool: &SqlitePool, order_id: i64) -> Result<Option<(Order, Vec<OrderItem>)>> {
  let order: Option<Order> = sqlx::query_as("SELECT id, created_at, total_cents FROM orders WHERE id = $1")
    .bind(order_id)
    .fetch_optional(pool)
    .await?;
  let Some(order) = order else {
    return Ok(None);
  };

  let items: Vec<OrderItem> = sqlx::query_as(
    "SELECT id, order_id, product_id, quantity, unit_price_cents FROM order_items WHERE order_id = $1 ORDER BY id ASC",
  )
  .bind(order_id)
  .fetch_all(pool)
  .await?;

  Ok(Some((order, items)))
}
