// src/db/postgres.rs

//! Postgres implementation of the store traits, using runtime sqlx queries.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use uuid::Uuid;

use crate::db::{CartStore, GameStore, LookupStore, OrderStore, UserStore};
use crate::errors::Result;
use crate::models::{
  CartItem, CartLine, DropdownValues, Game, GameDetail, GameDeveloper, GamePublisher, GameRating, NewGame,
  NewGameDeveloper, NewGamePublisher, NewGameRating, NewOrderItem, NewPlatform, NewUser, NewVoiceActor, Order,
  OrderItemDetail, OrderWithItems, Page, Platform, StoreUser, VoiceActor,
};

/// Bootstrap DDL. Executed at startup; every statement is idempotent.
const SCHEMA: &str = r#"
DO $$ BEGIN
  CREATE TYPE game_genre_enum AS ENUM (
    'sandbox', 'rts', 'shooter', 'moba', 'rpg', 'sport_simulation',
    'action_adventure', 'survival', 'horror', 'platformer', 'turn_strategy',
    'party', 'grand_strategy', 'social_simulation', 'action', 'racing',
    'simulation', 'puzzle', 'fighting'
  );
EXCEPTION WHEN duplicate_object THEN NULL;
END $$;

DO $$ BEGIN
  CREATE TYPE user_role_enum AS ENUM ('admin', 'user');
EXCEPTION WHEN duplicate_object THEN NULL;
END $$;

CREATE TABLE IF NOT EXISTS game_developers (
  id          UUID PRIMARY KEY,
  name        TEXT NOT NULL,
  description TEXT NOT NULL,
  logo_url    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS game_publishers (
  id          UUID PRIMARY KEY,
  name        TEXT NOT NULL,
  description TEXT NOT NULL,
  logo_url    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS game_ratings (
  id          UUID PRIMARY KEY,
  name        TEXT NOT NULL,
  description TEXT NOT NULL,
  logo_url    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS platforms (
  id                 UUID PRIMARY KEY,
  name               TEXT NOT NULL,
  description        TEXT NOT NULL,
  release_date       DATE NOT NULL,
  price_pence        BIGINT NOT NULL,
  platform_developer TEXT NOT NULL,
  image_url          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS voice_actors (
  id          UUID PRIMARY KEY,
  full_name   TEXT NOT NULL,
  bio         TEXT NOT NULL,
  picture_url TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS games (
  id           UUID PRIMARY KEY,
  name         TEXT NOT NULL,
  description  TEXT NOT NULL,
  release_date DATE NOT NULL,
  price_pence  BIGINT NOT NULL,
  image_url    TEXT NOT NULL,
  genre        game_genre_enum NOT NULL,
  rating_id    UUID NOT NULL REFERENCES game_ratings(id),
  developer_id UUID NOT NULL REFERENCES game_developers(id),
  publisher_id UUID NOT NULL REFERENCES game_publishers(id),
  created_at   TIMESTAMPTZ NOT NULL DEFAULT now(),
  updated_at   TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS game_platforms (
  game_id     UUID NOT NULL REFERENCES games(id) ON DELETE CASCADE,
  platform_id UUID NOT NULL REFERENCES platforms(id),
  PRIMARY KEY (game_id, platform_id)
);

CREATE TABLE IF NOT EXISTS game_voice_actors (
  game_id        UUID NOT NULL REFERENCES games(id) ON DELETE CASCADE,
  voice_actor_id UUID NOT NULL REFERENCES voice_actors(id),
  PRIMARY KEY (game_id, voice_actor_id)
);

CREATE TABLE IF NOT EXISTS store_users (
  id            UUID PRIMARY KEY,
  email         TEXT NOT NULL UNIQUE,
  password_hash TEXT NOT NULL,
  first_name    TEXT NOT NULL,
  last_name     TEXT NOT NULL,
  role          user_role_enum NOT NULL,
  created_at    TIMESTAMPTZ NOT NULL DEFAULT now(),
  updated_at    TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS cart_items (
  id       UUID PRIMARY KEY,
  cart_id  TEXT NOT NULL,
  game_id  UUID NOT NULL REFERENCES games(id) ON DELETE CASCADE,
  quantity INT NOT NULL,
  added_at TIMESTAMPTZ NOT NULL DEFAULT now(),
  UNIQUE (cart_id, game_id)
);

CREATE TABLE IF NOT EXISTS orders (
  id        UUID PRIMARY KEY,
  user_id   UUID NOT NULL REFERENCES store_users(id),
  email     TEXT NOT NULL,
  placed_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- order_items.game_id is intentionally not a foreign key: order history
-- must survive a game being deleted from the catalog.
CREATE TABLE IF NOT EXISTS order_items (
  id               UUID PRIMARY KEY,
  order_id         UUID NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
  game_id          UUID NOT NULL,
  quantity         INT NOT NULL,
  unit_price_pence BIGINT NOT NULL
);
"#;

#[derive(Clone)]
pub struct PgStoreDb {
  pool: PgPool,
}

impl PgStoreDb {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn connect(database_url: &str) -> Result<Self> {
    let pool = PgPool::connect(database_url).await?;
    Ok(Self::new(pool))
  }

  /// Creates the enum types and tables if they do not exist yet.
  pub async fn init_schema(&self) -> Result<()> {
    sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
    tracing::info!("Database schema is in place.");
    Ok(())
  }
}

#[derive(FromRow)]
struct OrderItemRow {
  id: Uuid,
  order_id: Uuid,
  game_id: Uuid,
  game_name: Option<String>,
  quantity: i32,
  unit_price_pence: i64,
}

impl PgStoreDb {
  /// Loads the given orders' items (joined with current game names) and
  /// groups them by order id.
  async fn items_for_orders(&self, order_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<OrderItemDetail>>> {
    let rows: Vec<OrderItemRow> = sqlx::query_as(
      "SELECT oi.id, oi.order_id, oi.game_id, g.name AS game_name, oi.quantity, oi.unit_price_pence \
       FROM order_items oi LEFT JOIN games g ON g.id = oi.game_id \
       WHERE oi.order_id = ANY($1) ORDER BY oi.id",
    )
    .bind(order_ids)
    .fetch_all(&self.pool)
    .await?;

    let mut grouped: HashMap<Uuid, Vec<OrderItemDetail>> = HashMap::new();
    for row in rows {
      grouped.entry(row.order_id).or_default().push(OrderItemDetail {
        id: row.id,
        game_id: row.game_id,
        game_name: row.game_name,
        quantity: row.quantity,
        unit_price_pence: row.unit_price_pence,
      });
    }
    Ok(grouped)
  }

  async fn orders_with_items(&self, orders: Vec<Order>) -> Result<Vec<OrderWithItems>> {
    let ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
    let mut grouped = self.items_for_orders(&ids).await?;

    let user_ids: Vec<Uuid> = orders.iter().map(|o| o.user_id).collect();
    let users: Vec<StoreUser> = sqlx::query_as("SELECT * FROM store_users WHERE id = ANY($1)")
      .bind(&user_ids)
      .fetch_all(&self.pool)
      .await?;

    Ok(
      orders
        .into_iter()
        .map(|order| {
          let items = grouped.remove(&order.id).unwrap_or_default();
          let user = users.iter().find(|u| u.id == order.user_id).cloned();
          OrderWithItems { order, user, items }
        })
        .collect(),
    )
  }
}

#[async_trait]
impl GameStore for PgStoreDb {
  async fn games_page(&self, page: i64, page_size: i64, search: Option<&str>) -> Result<Page<Game>> {
    let page = page.max(1);
    let pattern = search.map(|s| format!("%{}%", s));

    let (total_items, items): (i64, Vec<Game>) = match &pattern {
      Some(pattern) => {
        let total: i64 =
          sqlx::query_scalar("SELECT COUNT(*) FROM games WHERE name ILIKE $1 OR description ILIKE $1")
            .bind(pattern)
            .fetch_one(&self.pool)
            .await?;
        let items = sqlx::query_as(
          "SELECT * FROM games WHERE name ILIKE $1 OR description ILIKE $1 ORDER BY name ASC OFFSET $2 LIMIT $3",
        )
        .bind(pattern)
        .bind((page - 1) * page_size)
        .bind(page_size)
        .fetch_all(&self.pool)
        .await?;
        (total, items)
      }
      None => {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM games")
          .fetch_one(&self.pool)
          .await?;
        let items = sqlx::query_as("SELECT * FROM games ORDER BY name ASC OFFSET $1 LIMIT $2")
          .bind((page - 1) * page_size)
          .bind(page_size)
          .fetch_all(&self.pool)
          .await?;
        (total, items)
      }
    };

    Ok(Page::new(items, page, page_size, total_items))
  }

  async fn game_by_id(&self, id: Uuid) -> Result<Option<Game>> {
    let game = sqlx::query_as("SELECT * FROM games WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(game)
  }

  async fn game_detail(&self, id: Uuid) -> Result<Option<GameDetail>> {
    let Some(game) = self.game_by_id(id).await? else {
      return Ok(None);
    };

    let rating: GameRating = sqlx::query_as("SELECT * FROM game_ratings WHERE id = $1")
      .bind(game.rating_id)
      .fetch_one(&self.pool)
      .await?;
    let developer: GameDeveloper = sqlx::query_as("SELECT * FROM game_developers WHERE id = $1")
      .bind(game.developer_id)
      .fetch_one(&self.pool)
      .await?;
    let publisher: GamePublisher = sqlx::query_as("SELECT * FROM game_publishers WHERE id = $1")
      .bind(game.publisher_id)
      .fetch_one(&self.pool)
      .await?;
    let platforms: Vec<Platform> = sqlx::query_as(
      "SELECT p.* FROM platforms p JOIN game_platforms gp ON gp.platform_id = p.id \
       WHERE gp.game_id = $1 ORDER BY p.name ASC",
    )
    .bind(id)
    .fetch_all(&self.pool)
    .await?;
    let voice_actors: Vec<VoiceActor> = sqlx::query_as(
      "SELECT v.* FROM voice_actors v JOIN game_voice_actors gv ON gv.voice_actor_id = v.id \
       WHERE gv.game_id = $1 ORDER BY v.full_name ASC",
    )
    .bind(id)
    .fetch_all(&self.pool)
    .await?;

    Ok(Some(GameDetail {
      game,
      rating,
      developer,
      publisher,
      platforms,
      voice_actors,
    }))
  }

  async fn insert_game(&self, new: &NewGame) -> Result<Game> {
    let now = Utc::now();
    let game = Game {
      id: Uuid::new_v4(),
      name: new.name.clone(),
      description: new.description.clone(),
      release_date: new.release_date,
      price_pence: new.price_pence,
      image_url: new.image_url.clone(),
      genre: new.genre,
      rating_id: new.rating_id,
      developer_id: new.developer_id,
      publisher_id: new.publisher_id,
      created_at: now,
      updated_at: now,
    };

    let mut tx = self.pool.begin().await?;
    sqlx::query(
      "INSERT INTO games (id, name, description, release_date, price_pence, image_url, genre, \
       rating_id, developer_id, publisher_id, created_at, updated_at) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
    )
    .bind(game.id)
    .bind(&game.name)
    .bind(&game.description)
    .bind(game.release_date)
    .bind(game.price_pence)
    .bind(&game.image_url)
    .bind(game.genre)
    .bind(game.rating_id)
    .bind(game.developer_id)
    .bind(game.publisher_id)
    .bind(game.created_at)
    .bind(game.updated_at)
    .execute(&mut *tx)
    .await?;

    for platform_id in &new.platform_ids {
      sqlx::query("INSERT INTO game_platforms (game_id, platform_id) VALUES ($1, $2)")
        .bind(game.id)
        .bind(platform_id)
        .execute(&mut *tx)
        .await?;
    }
    for voice_actor_id in &new.voice_actor_ids {
      sqlx::query("INSERT INTO game_voice_actors (game_id, voice_actor_id) VALUES ($1, $2)")
        .bind(game.id)
        .bind(voice_actor_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(game)
  }

  async fn update_game(&self, id: Uuid, new: &NewGame) -> Result<Option<Game>> {
    let mut tx = self.pool.begin().await?;

    let updated = sqlx::query(
      "UPDATE games SET name = $2, description = $3, release_date = $4, price_pence = $5, \
       image_url = $6, genre = $7, rating_id = $8, developer_id = $9, publisher_id = $10, \
       updated_at = $11 WHERE id = $1",
    )
    .bind(id)
    .bind(&new.name)
    .bind(&new.description)
    .bind(new.release_date)
    .bind(new.price_pence)
    .bind(&new.image_url)
    .bind(new.genre)
    .bind(new.rating_id)
    .bind(new.developer_id)
    .bind(new.publisher_id)
    .bind(Utc::now())
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
      return Ok(None);
    }

    // The association sets are replaced wholesale.
    sqlx::query("DELETE FROM game_platforms WHERE game_id = $1")
      .bind(id)
      .execute(&mut *tx)
      .await?;
    sqlx::query("DELETE FROM game_voice_actors WHERE game_id = $1")
      .bind(id)
      .execute(&mut *tx)
      .await?;
    for platform_id in &new.platform_ids {
      sqlx::query("INSERT INTO game_platforms (game_id, platform_id) VALUES ($1, $2)")
        .bind(id)
        .bind(platform_id)
        .execute(&mut *tx)
        .await?;
    }
    for voice_actor_id in &new.voice_actor_ids {
      sqlx::query("INSERT INTO game_voice_actors (game_id, voice_actor_id) VALUES ($1, $2)")
        .bind(id)
        .bind(voice_actor_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    self.game_by_id(id).await
  }

  async fn delete_game(&self, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM games WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn dropdown_values(&self) -> Result<DropdownValues> {
    Ok(DropdownValues {
      developers: self.developers().await?,
      publishers: self.publishers().await?,
      ratings: self.ratings().await?,
      platforms: self.platforms().await?,
      voice_actors: self.voice_actors().await?,
    })
  }
}

#[async_trait]
impl LookupStore for PgStoreDb {
  async fn developers(&self) -> Result<Vec<GameDeveloper>> {
    Ok(
      sqlx::query_as("SELECT * FROM game_developers ORDER BY name ASC")
        .fetch_all(&self.pool)
        .await?,
    )
  }

  async fn developer_by_id(&self, id: Uuid) -> Result<Option<GameDeveloper>> {
    Ok(
      sqlx::query_as("SELECT * FROM game_developers WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await?,
    )
  }

  async fn insert_developer(&self, new: &NewGameDeveloper) -> Result<GameDeveloper> {
    let developer = GameDeveloper {
      id: Uuid::new_v4(),
      name: new.name.clone(),
      description: new.description.clone(),
      logo_url: new.logo_url.clone(),
    };
    sqlx::query("INSERT INTO game_developers (id, name, description, logo_url) VALUES ($1, $2, $3, $4)")
      .bind(developer.id)
      .bind(&developer.name)
      .bind(&developer.description)
      .bind(&developer.logo_url)
      .execute(&self.pool)
      .await?;
    Ok(developer)
  }

  async fn update_developer(&self, id: Uuid, new: &NewGameDeveloper) -> Result<Option<GameDeveloper>> {
    let result = sqlx::query("UPDATE game_developers SET name = $2, description = $3, logo_url = $4 WHERE id = $1")
      .bind(id)
      .bind(&new.name)
      .bind(&new.description)
      .bind(&new.logo_url)
      .execute(&self.pool)
      .await?;
    if result.rows_affected() == 0 {
      return Ok(None);
    }
    self.developer_by_id(id).await
  }

  async fn delete_developer(&self, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM game_developers WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn publishers(&self) -> Result<Vec<GamePublisher>> {
    Ok(
      sqlx::query_as("SELECT * FROM game_publishers ORDER BY name ASC")
        .fetch_all(&self.pool)
        .await?,
    )
  }

  async fn publisher_by_id(&self, id: Uuid) -> Result<Option<GamePublisher>> {
    Ok(
      sqlx::query_as("SELECT * FROM game_publishers WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await?,
    )
  }

  async fn insert_publisher(&self, new: &NewGamePublisher) -> Result<GamePublisher> {
    let publisher = GamePublisher {
      id: Uuid::new_v4(),
      name: new.name.clone(),
      description: new.description.clone(),
      logo_url: new.logo_url.clone(),
    };
    sqlx::query("INSERT INTO game_publishers (id, name, description, logo_url) VALUES ($1, $2, $3, $4)")
      .bind(publisher.id)
      .bind(&publisher.name)
      .bind(&publisher.description)
      .bind(&publisher.logo_url)
      .execute(&self.pool)
      .await?;
    Ok(publisher)
  }

  async fn update_publisher(&self, id: Uuid, new: &NewGamePublisher) -> Result<Option<GamePublisher>> {
    let result = sqlx::query("UPDATE game_publishers SET name = $2, description = $3, logo_url = $4 WHERE id = $1")
      .bind(id)
      .bind(&new.name)
      .bind(&new.description)
      .bind(&new.logo_url)
      .execute(&self.pool)
      .await?;
    if result.rows_affected() == 0 {
      return Ok(None);
    }
    self.publisher_by_id(id).await
  }

  async fn delete_publisher(&self, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM game_publishers WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn ratings(&self) -> Result<Vec<GameRating>> {
    Ok(
      sqlx::query_as("SELECT * FROM game_ratings ORDER BY name ASC")
        .fetch_all(&self.pool)
        .await?,
    )
  }

  async fn rating_by_id(&self, id: Uuid) -> Result<Option<GameRating>> {
    Ok(
      sqlx::query_as("SELECT * FROM game_ratings WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await?,
    )
  }

  async fn insert_rating(&self, new: &NewGameRating) -> Result<GameRating> {
    let rating = GameRating {
      id: Uuid::new_v4(),
      name: new.name.clone(),
      description: new.description.clone(),
      logo_url: new.logo_url.clone(),
    };
    sqlx::query("INSERT INTO game_ratings (id, name, description, logo_url) VALUES ($1, $2, $3, $4)")
      .bind(rating.id)
      .bind(&rating.name)
      .bind(&rating.description)
      .bind(&rating.logo_url)
      .execute(&self.pool)
      .await?;
    Ok(rating)
  }

  async fn update_rating(&self, id: Uuid, new: &NewGameRating) -> Result<Option<GameRating>> {
    let result = sqlx::query("UPDATE game_ratings SET name = $2, description = $3, logo_url = $4 WHERE id = $1")
      .bind(id)
      .bind(&new.name)
      .bind(&new.description)
      .bind(&new.logo_url)
      .execute(&self.pool)
      .await?;
    if result.rows_affected() == 0 {
      return Ok(None);
    }
    self.rating_by_id(id).await
  }

  async fn delete_rating(&self, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM game_ratings WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn platforms(&self) -> Result<Vec<Platform>> {
    Ok(
      sqlx::query_as("SELECT * FROM platforms ORDER BY name ASC")
        .fetch_all(&self.pool)
        .await?,
    )
  }

  async fn platform_by_id(&self, id: Uuid) -> Result<Option<Platform>> {
    Ok(
      sqlx::query_as("SELECT * FROM platforms WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await?,
    )
  }

  async fn insert_platform(&self, new: &NewPlatform) -> Result<Platform> {
    let platform = Platform {
      id: Uuid::new_v4(),
      name: new.name.clone(),
      description: new.description.clone(),
      release_date: new.release_date,
      price_pence: new.price_pence,
      platform_developer: new.platform_developer.clone(),
      image_url: new.image_url.clone(),
    };
    sqlx::query(
      "INSERT INTO platforms (id, name, description, release_date, price_pence, platform_developer, image_url) \
       VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(platform.id)
    .bind(&platform.name)
    .bind(&platform.description)
    .bind(platform.release_date)
    .bind(platform.price_pence)
    .bind(&platform.platform_developer)
    .bind(&platform.image_url)
    .execute(&self.pool)
    .await?;
    Ok(platform)
  }

  async fn update_platform(&self, id: Uuid, new: &NewPlatform) -> Result<Option<Platform>> {
    let result = sqlx::query(
      "UPDATE platforms SET name = $2, description = $3, release_date = $4, price_pence = $5, \
       platform_developer = $6, image_url = $7 WHERE id = $1",
    )
    .bind(id)
    .bind(&new.name)
    .bind(&new.description)
    .bind(new.release_date)
    .bind(new.price_pence)
    .bind(&new.platform_developer)
    .bind(&new.image_url)
    .execute(&self.pool)
    .await?;
    if result.rows_affected() == 0 {
      return Ok(None);
    }
    self.platform_by_id(id).await
  }

  async fn delete_platform(&self, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM platforms WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn voice_actors(&self) -> Result<Vec<VoiceActor>> {
    Ok(
      sqlx::query_as("SELECT * FROM voice_actors ORDER BY full_name ASC")
        .fetch_all(&self.pool)
        .await?,
    )
  }

  async fn voice_actor_by_id(&self, id: Uuid) -> Result<Option<VoiceActor>> {
    Ok(
      sqlx::query_as("SELECT * FROM voice_actors WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await?,
    )
  }

  async fn insert_voice_actor(&self, new: &NewVoiceActor) -> Result<VoiceActor> {
    let voice_actor = VoiceActor {
      id: Uuid::new_v4(),
      full_name: new.full_name.clone(),
      bio: new.bio.clone(),
      picture_url: new.picture_url.clone(),
    };
    sqlx::query("INSERT INTO voice_actors (id, full_name, bio, picture_url) VALUES ($1, $2, $3, $4)")
      .bind(voice_actor.id)
      .bind(&voice_actor.full_name)
      .bind(&voice_actor.bio)
      .bind(&voice_actor.picture_url)
      .execute(&self.pool)
      .await?;
    Ok(voice_actor)
  }

  async fn update_voice_actor(&self, id: Uuid, new: &NewVoiceActor) -> Result<Option<VoiceActor>> {
    let result = sqlx::query("UPDATE voice_actors SET full_name = $2, bio = $3, picture_url = $4 WHERE id = $1")
      .bind(id)
      .bind(&new.full_name)
      .bind(&new.bio)
      .bind(&new.picture_url)
      .execute(&self.pool)
      .await?;
    if result.rows_affected() == 0 {
      return Ok(None);
    }
    self.voice_actor_by_id(id).await
  }

  async fn delete_voice_actor(&self, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM voice_actors WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }
}

#[async_trait]
impl CartStore for PgStoreDb {
  async fn cart_lines(&self, cart_id: &str) -> Result<Vec<CartLine>> {
    Ok(
      sqlx::query_as(
        "SELECT c.id, c.cart_id, c.game_id, g.name AS game_name, g.price_pence, g.image_url, c.quantity \
         FROM cart_items c JOIN games g ON g.id = c.game_id \
         WHERE c.cart_id = $1 ORDER BY c.added_at ASC",
      )
      .bind(cart_id)
      .fetch_all(&self.pool)
      .await?,
    )
  }

  async fn find_cart_item(&self, cart_id: &str, game_id: Uuid) -> Result<Option<CartItem>> {
    Ok(
      sqlx::query_as("SELECT * FROM cart_items WHERE cart_id = $1 AND game_id = $2")
        .bind(cart_id)
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await?,
    )
  }

  async fn insert_cart_item(&self, cart_id: &str, game_id: Uuid) -> Result<CartItem> {
    let item = CartItem {
      id: Uuid::new_v4(),
      cart_id: cart_id.to_string(),
      game_id,
      quantity: 1,
      added_at: Utc::now(),
    };
    sqlx::query("INSERT INTO cart_items (id, cart_id, game_id, quantity, added_at) VALUES ($1, $2, $3, $4, $5)")
      .bind(item.id)
      .bind(&item.cart_id)
      .bind(item.game_id)
      .bind(item.quantity)
      .bind(item.added_at)
      .execute(&self.pool)
      .await?;
    Ok(item)
  }

  async fn set_cart_item_quantity(&self, item_id: Uuid, quantity: i32) -> Result<()> {
    sqlx::query("UPDATE cart_items SET quantity = $2 WHERE id = $1")
      .bind(item_id)
      .bind(quantity)
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  async fn delete_cart_item(&self, item_id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM cart_items WHERE id = $1")
      .bind(item_id)
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  async fn cart_total_pence(&self, cart_id: &str) -> Result<i64> {
    let total: i64 = sqlx::query_scalar(
      "SELECT COALESCE(SUM(g.price_pence * c.quantity), 0)::BIGINT \
       FROM cart_items c JOIN games g ON g.id = c.game_id WHERE c.cart_id = $1",
    )
    .bind(cart_id)
    .fetch_one(&self.pool)
    .await?;
    Ok(total)
  }

  async fn clear_cart(&self, cart_id: &str) -> Result<()> {
    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
      .bind(cart_id)
      .execute(&self.pool)
      .await?;
    Ok(())
  }
}

#[async_trait]
impl OrderStore for PgStoreDb {
  async fn create_order(&self, user_id: Uuid, email: &str, items: &[NewOrderItem]) -> Result<Order> {
    let order = Order {
      id: Uuid::new_v4(),
      user_id,
      email: email.to_string(),
      placed_at: Utc::now(),
    };

    // Header and items land in one transaction; a failure part-way leaves
    // no partial order behind.
    let mut tx = self.pool.begin().await?;
    sqlx::query("INSERT INTO orders (id, user_id, email, placed_at) VALUES ($1, $2, $3, $4)")
      .bind(order.id)
      .bind(order.user_id)
      .bind(&order.email)
      .bind(order.placed_at)
      .execute(&mut *tx)
      .await?;
    for item in items {
      sqlx::query(
        "INSERT INTO order_items (id, order_id, game_id, quantity, unit_price_pence) VALUES ($1, $2, $3, $4, $5)",
      )
      .bind(Uuid::new_v4())
      .bind(order.id)
      .bind(item.game_id)
      .bind(item.quantity)
      .bind(item.unit_price_pence)
      .execute(&mut *tx)
      .await?;
    }
    tx.commit().await?;

    Ok(order)
  }

  async fn all_orders(&self) -> Result<Vec<OrderWithItems>> {
    let orders: Vec<Order> = sqlx::query_as("SELECT * FROM orders ORDER BY placed_at ASC")
      .fetch_all(&self.pool)
      .await?;
    self.orders_with_items(orders).await
  }

  async fn orders_by_user(&self, user_id: Uuid) -> Result<Vec<OrderWithItems>> {
    let orders: Vec<Order> = sqlx::query_as("SELECT * FROM orders WHERE user_id = $1 ORDER BY placed_at ASC")
      .bind(user_id)
      .fetch_all(&self.pool)
      .await?;
    self.orders_with_items(orders).await
  }
}

#[async_trait]
impl UserStore for PgStoreDb {
  async fn user_by_email(&self, email: &str) -> Result<Option<StoreUser>> {
    Ok(
      sqlx::query_as("SELECT * FROM store_users WHERE email = $1")
        .bind(email)
        .fetch_optional(&self.pool)
        .await?,
    )
  }

  async fn user_by_id(&self, id: Uuid) -> Result<Option<StoreUser>> {
    Ok(
      sqlx::query_as("SELECT * FROM store_users WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await?,
    )
  }

  async fn insert_user(&self, new: &NewUser) -> Result<StoreUser> {
    let now = Utc::now();
    let user = StoreUser {
      id: Uuid::new_v4(),
      email: new.email.clone(),
      password_hash: new.password_hash.clone(),
      first_name: new.first_name.clone(),
      last_name: new.last_name.clone(),
      role: new.role,
      created_at: now,
      updated_at: now,
    };
    sqlx::query(
      "INSERT INTO store_users (id, email, password_hash, first_name, last_name, role, created_at, updated_at) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(user.role)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(&self.pool)
    .await?;
    Ok(user)
  }

  async fn all_users(&self) -> Result<Vec<StoreUser>> {
    Ok(
      sqlx::query_as("SELECT * FROM store_users ORDER BY email ASC")
        .fetch_all(&self.pool)
        .await?,
    )
  }
}
