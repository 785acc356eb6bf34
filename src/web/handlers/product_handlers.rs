// src/web/handlers/product_handlers.rs

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::services::catalog;
use crate::state::AppState;
use crate::web::session::load_cart;

#[instrument(name = "handler::list_products", skip(app_state, session))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  session: Session,
) -> Result<HttpResponse, AppError> {
  let products = catalog::list_products(&app_state.db_pool).await?;
  let cart = load_cart(&session)?;

  info!("Successfully fetched {} products.", products.len());

  // `cart_quantity` feeds the cart badge the storefront shows on every page.
  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully.",
      "products": products,
      "cart_quantity": cart.total_quantity()
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, session, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  session: Session,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match catalog::get_product(&app_state.db_pool, product_id).await? {
    Some(product) => {
      let cart = load_cart(&session)?;
      Ok(HttpResponse::Ok().json(json!({
          "message": "Product fetched successfully.",
          "product": product,
          "cart_quantity": cart.total_quantity()
      })))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}
