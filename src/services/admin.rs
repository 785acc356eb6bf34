// src/services/admin.rs

//! The admin gate: a single shared-secret check in front of the catalog
//! write. Deliberately weak (one password, no accounts, no lockout); the
//! operations it guards would move behind a real capability system before
//! any production use.

use crate::errors::{AppError, Result};
use crate::models::Product;
use crate::services::catalog::{self, NewProduct};
use sqlx::SqlitePool;
use tracing::instrument;

/// Compares the supplied credential against the configured admin password.
/// On mismatch nothing further executes.
pub fn require_admin(supplied: &str, expected: &str) -> Result<()> {
  if supplied != expected {
    return Err(AppError::Auth("Invalid admin password.".to_string()));
  }
  Ok(())
}

/// Adds a product to the catalog if the credential checks out.
#[instrument(skip(pool, fields, credential, expected), fields(name = %fields.name))]
pub async fn add_product(pool: &SqlitePool, fields: NewProduct, credential: &str, expected: &str) -> Result<Product> {
  require_admin(credential, expected)?;
  catalog::insert_product(pool, fields).await
}
