// src/models/rating.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A PEGI-style age rating.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameRating {
  pub id: Uuid,
  pub name: String,
  pub description: String,
  pub logo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameRating {
  pub name: String,
  pub description: String,
  pub logo_url: String,
}
