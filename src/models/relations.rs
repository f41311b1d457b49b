// src/models/relations.rs

//! Explicit join records for the game many-to-many relations. The pairs
//! are composite keys; there are no surrogate ids.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRow)]
pub struct GamePlatform {
  pub game_id: Uuid,
  pub platform_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRow)]
pub struct GameVoiceActor {
  pub game_id: Uuid,
  pub voice_actor_id: Uuid,
}
