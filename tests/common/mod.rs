// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use game_store_app::db::{GameStore, LookupStore, MemStoreDb, StoreDb, UserStore};
use game_store_app::models::{
  Game, GameGenre, NewGame, NewGameDeveloper, NewGamePublisher, NewGameRating, NewUser, StoreUser, UserRole,
};
use game_store_app::services::auth;

/// Lookup rows every test game hangs off.
pub struct TestLookups {
  pub rating_id: Uuid,
  pub developer_id: Uuid,
  pub publisher_id: Uuid,
}

pub fn mem_db() -> Arc<MemStoreDb> {
  Arc::new(MemStoreDb::new())
}

pub async fn insert_lookups(db: &dyn StoreDb) -> TestLookups {
  let rating = db
    .insert_rating(&NewGameRating {
      name: "PEGI 16".into(),
      description: "Suitable for ages 16 and over.".into(),
      logo_url: "/images/ratings/pegi16.png".into(),
    })
    .await
    .unwrap();
  let developer = db
    .insert_developer(&NewGameDeveloper {
      name: "Test Studio".into(),
      description: "A test studio.".into(),
      logo_url: "/images/developers/test.png".into(),
    })
    .await
    .unwrap();
  let publisher = db
    .insert_publisher(&NewGamePublisher {
      name: "Test Publishing".into(),
      description: "A test publisher.".into(),
      logo_url: "/images/publishers/test.png".into(),
    })
    .await
    .unwrap();

  TestLookups {
    rating_id: rating.id,
    developer_id: developer.id,
    publisher_id: publisher.id,
  }
}

pub async fn insert_game(db: &dyn StoreDb, lookups: &TestLookups, name: &str, price_pence: i64) -> Game {
  db.insert_game(&NewGame {
    name: name.to_string(),
    description: format!("{name} description"),
    release_date: NaiveDate::from_ymd_opt(2023, 3, 3).unwrap(),
    price_pence,
    image_url: "/images/games/test.png".into(),
    genre: GameGenre::Rpg,
    rating_id: lookups.rating_id,
    developer_id: lookups.developer_id,
    publisher_id: lookups.publisher_id,
    platform_ids: Vec::new(),
    voice_actor_ids: Vec::new(),
  })
  .await
  .unwrap()
}

pub async fn insert_user(db: &dyn StoreDb, email: &str, role: UserRole) -> StoreUser {
  db.insert_user(&NewUser {
    email: email.to_string(),
    password_hash: auth::hash_password("test_password").unwrap(),
    first_name: "Test".into(),
    last_name: "User".into(),
    role,
  })
  .await
  .unwrap()
}

/// Updates a game's price in place, leaving every other field untouched.
pub async fn set_game_price(db: &dyn StoreDb, game: &Game, price_pence: i64) {
  db.update_game(
    game.id,
    &NewGame {
      name: game.name.clone(),
      description: game.description.clone(),
      release_date: game.release_date,
      price_pence,
      image_url: game.image_url.clone(),
      genre: game.genre,
      rating_id: game.rating_id,
      developer_id: game.developer_id,
      publisher_id: game.publisher_id,
      platform_ids: Vec::new(),
      voice_actor_ids: Vec::new(),
    },
  )
  .await
  .unwrap()
  .expect("game should exist");
}
