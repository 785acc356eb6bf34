// src/web/handlers/cart_handlers.rs

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::services::pricing;
use crate::state::AppState;
use crate::web::session::{load_cart, save_cart};

fn default_quantity() -> i64 {
  1
}

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct AddToCartPayload {
  pub product_id: i64,
  #[serde(default = "default_quantity")]
  pub quantity: i64,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartPayload {
  pub product_id: i64,
  pub quantity: i64,
}

// --- Handler Implementations ---

#[instrument(name = "handler::view_cart", skip(app_state, session))]
pub async fn view_cart_handler(app_state: web::Data<AppState>, session: Session) -> Result<HttpResponse, AppError> {
  let cart = load_cart(&session)?;
  let totals = pricing::cart_totals(&app_state.db_pool, &cart).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart fetched successfully.",
      "items": totals.lines,
      "subtotal_cents": totals.subtotal_cents,
      "cart_quantity": cart.total_quantity()
  })))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(session, payload),
    fields(product_id = %payload.product_id, quantity = %payload.quantity)
)]
pub async fn add_to_cart_handler(
  session: Session,
  payload: web::Json<AddToCartPayload>,
) -> Result<HttpResponse, AppError> {
  if payload.quantity <= 0 {
    warn!("Rejecting add-to-cart with non-positive quantity {}.", payload.quantity);
    return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
  }

  // No catalog lookup here: an entry whose product has vanished simply drops
  // out of the totals later.
  let mut cart = load_cart(&session)?;
  cart.add(payload.product_id, payload.quantity);
  save_cart(&session, &cart)?;

  info!(
    "Cart now holds {} of product {}.",
    cart.quantity_of(payload.product_id),
    payload.product_id
  );

  Ok(HttpResponse::Ok().json(json!({
      "message": "Item added to cart.",
      "cart_quantity": cart.total_quantity()
  })))
}

#[instrument(
    name = "handler::update_cart",
    skip(app_state, session, payload),
    fields(product_id = %payload.product_id, quantity = %payload.quantity)
)]
pub async fn update_cart_handler(
  app_state: web::Data<AppState>,
  session: Session,
  payload: web::Json<UpdateCartPayload>,
) -> Result<HttpResponse, AppError> {
  let mut cart = load_cart(&session)?;
  // Zero or negative means "remove the line".
  cart.set_quantity(payload.product_id, payload.quantity);
  save_cart(&session, &cart)?;

  let totals = pricing::cart_totals(&app_state.db_pool, &cart).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart updated.",
      "items": totals.lines,
      "subtotal_cents": totals.subtotal_cents,
      "cart_quantity": cart.total_quantity()
  })))
}
