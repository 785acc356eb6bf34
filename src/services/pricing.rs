// src/services/pricing.rs

//! Resolves a cart against the current catalog into priced line items.

use crate::cart::Cart;
use crate::errors::Result;
use crate::models::Product;
use crate::services::catalog;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

/// A cart entry resolved against the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
  pub product: Product,
  pub quantity: i64,
  pub line_total_cents: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CartTotals {
  pub lines: Vec<CartLine>,
  pub subtotal_cents: i64,
}

/// Computes line totals and the subtotal for every cart entry, in ascending
/// product-id order. Entries whose product has vanished from the catalog are
/// skipped, not reported; the cart itself is left untouched.
#[instrument(skip(pool, cart), fields(entries = cart.len()))]
pub async fn cart_totals(pool: &SqlitePool, cart: &Cart) -> Result<CartTotals> {
  let mut lines = Vec::with_capacity(cart.len());
  let mut subtotal_cents = 0;

  for (product_id, quantity) in cart.iter() {
    let Some(product) = catalog::get_product(pool, product_id).await? else {
      debug!(product_id, "Skipping cart entry for product no longer in catalog.");
      continue;
    };
    let line_total_cents = product.price_cents * quantity;
    subtotal_cents += line_total_cents;
    lines.push(CartLine {
      product,
      quantity,
      line_total_cents,
    });
  }

  Ok(CartTotals { lines, subtotal_cents })
}
