// src/models/order_item.rs

use serde::Serialize;
use sqlx::FromRow;

/// One product line inside an order. `unit_price_cents` is the catalog price
/// captured at checkout time; later price changes must not touch it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
  pub id: i64,
  pub order_id: i64,
  pub product_id: i64,
  pub quantity: i64,
  pub unit_price_cents: i64,
}
