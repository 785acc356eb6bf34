// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A completed checkout. Immutable once written; the total is frozen at
/// creation and never recomputed from the catalog.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: i64,
  pub created_at: DateTime<Utc>,
  pub total_cents: i64,
}
