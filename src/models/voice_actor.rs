// src/models/voice_actor.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VoiceActor {
  pub id: Uuid,
  pub full_name: String,
  pub bio: String,
  pub picture_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVoiceActor {
  pub full_name: String,
  pub bio: String,
  pub picture_url: String,
}
