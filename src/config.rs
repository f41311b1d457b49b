// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Postgres connection string. When unset the server runs against the
  /// in-memory store backend, which is useful for local poking and demos.
  pub database_url: Option<String>,

  /// Key material for the session cookie. Must be at least 32 bytes when
  /// provided; a random key is generated otherwise (sessions then reset on
  /// every server restart).
  pub session_key: Option<String>,

  /// Whether the session cookie requires HTTPS.
  pub cookie_secure: bool,

  /// Seed catalog reference data and the initial accounts on startup.
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

    let database_url = get_env("DATABASE_URL").ok();

    let session_key = get_env("SESSION_KEY").ok();
    if let Some(key) = &session_key {
      if key.len() < 32 {
        return Err(AppError::Config(
          "SESSION_KEY must be at least 32 bytes of key material".to_string(),
        ));
      }
    }

    let cookie_secure = get_env("COOKIE_SECURE")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid COOKIE_SECURE value: {}", e)))?;

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      session_key,
      cookie_secure,
      seed_db,
    })
  }
}
