// src/models/developer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameDeveloper {
  pub id: Uuid,
  pub name: String,
  pub description: String,
  pub logo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameDeveloper {
  pub name: String,
  pub description: String,
  pub logo_url: String,
}
