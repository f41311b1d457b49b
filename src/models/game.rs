// src/models/game.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType};
use uuid::Uuid;

use crate::models::developer::GameDeveloper;
use crate::models::platform::Platform;
use crate::models::publisher::GamePublisher;
use crate::models::rating::GameRating;
use crate::models::voice_actor::VoiceActor;

/// The genre catalogue the store recognises. Persisted as the
/// `game_genre_enum` Postgres type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "game_genre_enum", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GameGenre {
  Sandbox,
  Rts,
  Shooter,
  Moba,
  Rpg,
  SportSimulation,
  ActionAdventure,
  Survival,
  Horror,
  Platformer,
  TurnStrategy,
  Party,
  GrandStrategy,
  SocialSimulation,
  Action,
  Racing,
  Simulation,
  Puzzle,
  Fighting,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Game {
  pub id: Uuid,
  pub name: String,
  pub description: String,
  pub release_date: NaiveDate,
  /// Prices are integer pence; totals never touch floating point.
  pub price_pence: i64,
  pub image_url: String,
  pub genre: GameGenre,
  pub rating_id: Uuid,
  pub developer_id: Uuid,
  pub publisher_id: Uuid,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a game, including the many-to-many
/// association id lists (the join rows are replaced wholesale on update).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
  pub name: String,
  pub description: String,
  pub release_date: NaiveDate,
  pub price_pence: i64,
  pub image_url: String,
  pub genre: GameGenre,
  pub rating_id: Uuid,
  pub developer_id: Uuid,
  pub publisher_id: Uuid,
  #[serde(default)]
  pub platform_ids: Vec<Uuid>,
  #[serde(default)]
  pub voice_actor_ids: Vec<Uuid>,
}

/// A game joined with its reference entities, for the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct GameDetail {
  #[serde(flatten)]
  pub game: Game,
  pub rating: GameRating,
  pub developer: GameDeveloper,
  pub publisher: GamePublisher,
  pub platforms: Vec<Platform>,
  pub voice_actors: Vec<VoiceActor>,
}

/// The reference lists an admin needs when filling in a game form,
/// each sorted by name.
#[derive(Debug, Clone, Serialize, Default)]
pub struct DropdownValues {
  pub developers: Vec<GameDeveloper>,
  pub publishers: Vec<GamePublisher>,
  pub ratings: Vec<GameRating>,
  pub platforms: Vec<Platform>,
  pub voice_actors: Vec<VoiceActor>,
}
