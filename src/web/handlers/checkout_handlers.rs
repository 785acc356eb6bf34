// src/web/handlers/checkout_handlers.rs

use actix_session::Session;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::checkout;
use crate::state::AppState;
use crate::web::session::{load_cart, save_cart};

#[instrument(name = "handler::checkout", skip(app_state, session))]
pub async fn checkout_handler(app_state: web::Data<AppState>, session: Session) -> Result<HttpResponse, AppError> {
  let mut cart = load_cart(&session)?;

  match checkout::place_order(&app_state.db_pool, &mut cart).await {
    Ok(order) => {
      // The service cleared the cart; persist that back to the session.
      save_cart(&session, &cart)?;
      info!("Checkout complete for order {}.", order.id);
      Ok(HttpResponse::Created().json(json!({
          "message": "Thank you for your order!",
          "order_id": order.id,
          "total_cents": order.total_cents
      })))
    }
    // An empty cart is not an error to the visitor: send them back to the
    // cart page, as the storefront always has.
    Err(AppError::EmptyCart) => {
      info!("Checkout attempted with an empty cart; redirecting back.");
      Ok(
        HttpResponse::SeeOther()
          .insert_header((header::LOCATION, "/api/v1/cart"))
          .finish(),
      )
    }
    Err(other) => Err(other),
  }
}
