// src/db/seed.rs

//! Development seed data. Only runs against an empty store, so restarting
//! the server with SEED_DB=true never duplicates rows.

use chrono::NaiveDate;

use crate::db::{GameStore, LookupStore, StoreDb, UserStore};
use crate::errors::Result;
use crate::models::{
  GameGenre, NewGame, NewGameDeveloper, NewGamePublisher, NewGameRating, NewPlatform, NewUser, NewVoiceActor,
  UserRole,
};
use crate::services::auth;

/// Populates lookup tables, a handful of games and two accounts.
///
/// Default credentials: `admin@gamestore.dev` / `admin_password` and
/// `player@gamestore.dev` / `player_password`.
pub async fn seed(db: &dyn StoreDb) -> Result<()> {
  if !db.ratings().await?.is_empty() {
    tracing::info!("Store already contains data, skipping seed.");
    return Ok(());
  }
  tracing::info!("Seeding store with development data...");

  // --- Ratings (PEGI) ---
  let mut ratings = Vec::new();
  for (name, description) in [
    ("PEGI 3", "Suitable for all age groups."),
    ("PEGI 7", "Suitable for ages 7 and over."),
    ("PEGI 12", "Suitable for ages 12 and over."),
    ("PEGI 16", "Suitable for ages 16 and over."),
    ("PEGI 18", "Suitable only for adults."),
  ] {
    ratings.push(
      db.insert_rating(&NewGameRating {
        name: name.to_string(),
        description: description.to_string(),
        logo_url: format!("/images/ratings/{}.png", name.to_lowercase().replace(' ', "_")),
      })
      .await?,
    );
  }

  // --- Platforms ---
  let ps5 = db
    .insert_platform(&NewPlatform {
      name: "PlayStation 5".into(),
      description: "Sony's ninth-generation home console.".into(),
      release_date: NaiveDate::from_ymd_opt(2020, 11, 12).unwrap(),
      price_pence: 47999,
      platform_developer: "Sony Interactive Entertainment".into(),
      image_url: "/images/platforms/ps5.png".into(),
    })
    .await?;
  let xbox = db
    .insert_platform(&NewPlatform {
      name: "Xbox Series X".into(),
      description: "Microsoft's ninth-generation home console.".into(),
      release_date: NaiveDate::from_ymd_opt(2020, 11, 10).unwrap(),
      price_pence: 44999,
      platform_developer: "Microsoft".into(),
      image_url: "/images/platforms/xbox_series_x.png".into(),
    })
    .await?;

  // --- Developers ---
  let santa_monica = db
    .insert_developer(&NewGameDeveloper {
      name: "Santa Monica Studio".into(),
      description: "First-party studio best known for the God of War series.".into(),
      logo_url: "/images/developers/santa_monica.png".into(),
    })
    .await?;
  let naughty_dog = db
    .insert_developer(&NewGameDeveloper {
      name: "Naughty Dog".into(),
      description: "Studio behind The Last of Us and Uncharted.".into(),
      logo_url: "/images/developers/naughty_dog.png".into(),
    })
    .await?;
  let mojang = db
    .insert_developer(&NewGameDeveloper {
      name: "Mojang Studios".into(),
      description: "Creators of Minecraft.".into(),
      logo_url: "/images/developers/mojang.png".into(),
    })
    .await?;

  // --- Publishers ---
  let sony = db
    .insert_publisher(&NewGamePublisher {
      name: "Sony Interactive Entertainment".into(),
      description: "Publishing arm of PlayStation.".into(),
      logo_url: "/images/publishers/sie.png".into(),
    })
    .await?;
  let microsoft = db
    .insert_publisher(&NewGamePublisher {
      name: "Xbox Game Studios".into(),
      description: "Publishing arm of Xbox.".into(),
      logo_url: "/images/publishers/xbox_game_studios.png".into(),
    })
    .await?;

  // --- Voice actors ---
  let mut actors = Vec::new();
  for (full_name, bio) in [
    ("Christopher Judge", "Voice of Kratos in the modern God of War games."),
    ("Troy Baker", "Voice of Joel in The Last of Us."),
    ("Laura Bailey", "Voice of Abby in The Last of Us Part II."),
    ("Nolan North", "Voice of Nathan Drake in the Uncharted series."),
  ] {
    actors.push(
      db.insert_voice_actor(&NewVoiceActor {
        full_name: full_name.to_string(),
        bio: bio.to_string(),
        picture_url: format!(
          "/images/voice_actors/{}.png",
          full_name.to_lowercase().replace(' ', "_")
        ),
      })
      .await?,
    );
  }

  // --- Games ---
  db.insert_game(&NewGame {
    name: "God of War Ragnarok".into(),
    description: "Kratos and Atreus journey through the Nine Realms as Fimbulwinter sets in.".into(),
    release_date: NaiveDate::from_ymd_opt(2022, 11, 9).unwrap(),
    price_pence: 5999,
    image_url: "/images/games/gow_ragnarok.png".into(),
    genre: GameGenre::ActionAdventure,
    rating_id: ratings[4].id,
    developer_id: santa_monica.id,
    publisher_id: sony.id,
    platform_ids: vec![ps5.id],
    voice_actor_ids: vec![actors[0].id],
  })
  .await?;

  db.insert_game(&NewGame {
    name: "The Last of Us Part I".into(),
    description: "Survive a ravaged civilization with Joel and Ellie, rebuilt for a new generation.".into(),
    release_date: NaiveDate::from_ymd_opt(2022, 9, 2).unwrap(),
    price_pence: 4999,
    image_url: "/images/games/tlou_part1.png".into(),
    genre: GameGenre::Survival,
    rating_id: ratings[4].id,
    developer_id: naughty_dog.id,
    publisher_id: sony.id,
    platform_ids: vec![ps5.id],
    voice_actor_ids: vec![actors[1].id, actors[2].id],
  })
  .await?;

  db.insert_game(&NewGame {
    name: "Uncharted 4: A Thief's End".into(),
    description: "Nathan Drake is pulled back into the world of thieves for one last treasure hunt.".into(),
    release_date: NaiveDate::from_ymd_opt(2016, 5, 10).unwrap(),
    price_pence: 1999,
    image_url: "/images/games/uncharted4.png".into(),
    genre: GameGenre::ActionAdventure,
    rating_id: ratings[3].id,
    developer_id: naughty_dog.id,
    publisher_id: sony.id,
    platform_ids: vec![ps5.id],
    voice_actor_ids: vec![actors[3].id],
  })
  .await?;

  db.insert_game(&NewGame {
    name: "Minecraft".into(),
    description: "Build, explore and survive in an endlessly generated blocky world.".into(),
    release_date: NaiveDate::from_ymd_opt(2011, 11, 18).unwrap(),
    price_pence: 1999,
    image_url: "/images/games/minecraft.png".into(),
    genre: GameGenre::Sandbox,
    rating_id: ratings[1].id,
    developer_id: mojang.id,
    publisher_id: microsoft.id,
    platform_ids: vec![ps5.id, xbox.id],
    voice_actor_ids: Vec::new(),
  })
  .await?;

  // --- Accounts ---
  db.insert_user(&NewUser {
    email: "admin@gamestore.dev".into(),
    password_hash: auth::hash_password("admin_password")?,
    first_name: "Ada".into(),
    last_name: "Admin".into(),
    role: UserRole::Admin,
  })
  .await?;
  db.insert_user(&NewUser {
    email: "player@gamestore.dev".into(),
    password_hash: auth::hash_password("player_password")?,
    first_name: "Pat".into(),
    last_name: "Player".into(),
    role: UserRole::User,
  })
  .await?;

  tracing::info!("Seed complete.");
  Ok(())
}
