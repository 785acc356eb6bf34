// src/web/session.rs

//! Per-visitor cart persistence.
//!
//! The cart itself is a plain value; this module is the only place that
//! knows it lives in the visitor's cookie session between requests.

use crate::cart::Cart;
use crate::errors::{AppError, Result};
use actix_session::Session;

pub const CART_SESSION_KEY: &str = "cart";

/// Loads the visitor's cart, falling back to an empty one on first visit.
pub fn load_cart(session: &Session) -> Result<Cart> {
  let cart = session
    .get::<Cart>(CART_SESSION_KEY)
    .map_err(|e| AppError::Session(format!("Failed to read cart from session: {}", e)))?
    .unwrap_or_default();
  Ok(cart)
}

pub fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
  session
    .insert(CART_SESSION_KEY, cart)
    .map_err(|e| AppError::Session(format!("Failed to store cart in session: {}", e)))
}
