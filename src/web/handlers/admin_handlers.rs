// src/web/handlers/admin_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::{AppError, Result as AppResult};
use crate::services::admin;
use crate::services::catalog::{self, NewProduct};
use crate::state::AppState;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct AdminLoginPayload {
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct AdminCredentialQuery {
  pub password: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct AddProductPayload {
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub price_eur: f64,
  #[serde(default)]
  pub image_url: String,
  pub password: String,
}

fn credential_or_denied(query: &AdminCredentialQuery) -> AppResult<&str> {
  query
    .password
    .as_deref()
    .ok_or_else(|| AppError::Auth("Missing admin password.".to_string()))
}

// --- Handler Implementations ---

#[instrument(name = "handler::admin_login", skip(app_state, payload))]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AdminLoginPayload>,
) -> Result<HttpResponse, AppError> {
  admin::require_admin(&payload.password, &app_state.config.admin_password)?;
  info!("Admin credentials accepted.");
  Ok(HttpResponse::Ok().json(json!({ "message": "Admin credentials accepted." })))
}

#[instrument(name = "handler::admin_list_products", skip(app_state, query))]
pub async fn list_admin_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<AdminCredentialQuery>,
) -> Result<HttpResponse, AppError> {
  admin::require_admin(credential_or_denied(&query)?, &app_state.config.admin_password)?;

  let products = catalog::list_products(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully.",
      "products": products
  })))
}

#[instrument(name = "handler::admin_add_product", skip(app_state, payload), fields(name = %payload.name))]
pub async fn add_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddProductPayload>,
) -> Result<HttpResponse, AppError> {
  let AddProductPayload {
    name,
    description,
    price_eur,
    image_url,
    password,
  } = payload.into_inner();

  let fields = NewProduct {
    name,
    description,
    price_eur,
    image_url,
  };
  let product = admin::add_product(&app_state.db_pool, fields, &password, &app_state.config.admin_password).await?;

  info!("Admin added product {}.", product.id);
  Ok(HttpResponse::Created().json(json!({
      "message": "Product added successfully.",
      "product": product
  })))
}
