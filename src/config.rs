// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  // Shared secret for the admin surface.
  pub admin_password: String,

  // Master key for the cookie session. Must be at least 64 bytes when set;
  // a random key is generated at startup otherwise (carts then do not
  // survive a server restart).
  pub session_secret: Option<String>,

  // Seed sample products into an empty catalog on startup.
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL").unwrap_or_else(|_| "sqlite://shop.db".to_string());

    let admin_password = get_env("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());

    let session_secret = get_env("SECRET_KEY").ok();
    if let Some(secret) = &session_secret {
      if secret.len() < 64 {
        return Err(AppError::Config(
          "SECRET_KEY must be at least 64 bytes to key the session cookie".to_string(),
        ));
      }
    }

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      admin_password,
      session_secret,
      seed_db,
    })
  }
}
