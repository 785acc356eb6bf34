// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{instrument, warn};

use crate::errors::AppError;
use crate::services::orders;
use crate::state::AppState;

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  match orders::get_order(&app_state.db_pool, order_id).await? {
    Some((order, items)) => Ok(HttpResponse::Ok().json(json!({
        "message": "Order fetched successfully.",
        "order": order,
        "items": items
    }))),
    None => {
      warn!("Order with ID {} not found.", order_id);
      Err(AppError::NotFound(format!("Order with ID {} not found.", order_id)))
    }
  }
}
