// src/db/mod.rs

//! The persistence seam. The cart, checkout and order-history logic only
//! ever talk to these traits; `postgres` implements them with runtime sqlx
//! queries and `memory` with plain maps for tests and DB-less runs.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::{
  CartItem, CartLine, DropdownValues, Game, GameDetail, GameDeveloper, GamePublisher, GameRating, NewGame,
  NewGameDeveloper, NewGamePublisher, NewGameRating, NewOrderItem, NewPlatform, NewUser, NewVoiceActor, Order,
  OrderWithItems, Page, Platform, StoreUser, VoiceActor,
};

pub mod memory;
pub mod postgres;
pub mod seed;

pub use memory::MemStoreDb;
pub use postgres::PgStoreDb;

/// Catalog reads and admin mutations for games, including the
/// platform/voice-actor association sets.
#[async_trait]
pub trait GameStore: Send + Sync {
  /// One page of the catalog, optionally filtered by a case-insensitive
  /// search over name and description.
  async fn games_page(&self, page: i64, page_size: i64, search: Option<&str>) -> Result<Page<Game>>;

  async fn game_by_id(&self, id: Uuid) -> Result<Option<Game>>;

  /// The full detail view: game plus rating/developer/publisher records and
  /// the associated platforms and voice actors.
  async fn game_detail(&self, id: Uuid) -> Result<Option<GameDetail>>;

  async fn insert_game(&self, new: &NewGame) -> Result<Game>;

  /// Updates the game row and replaces both join-row sets wholesale.
  /// Returns `None` when no game has that id.
  async fn update_game(&self, id: Uuid, new: &NewGame) -> Result<Option<Game>>;

  /// Returns whether a row was deleted.
  async fn delete_game(&self, id: Uuid) -> Result<bool>;

  async fn dropdown_values(&self) -> Result<DropdownValues>;
}

/// CRUD for the reference entities that hang off a game.
#[async_trait]
pub trait LookupStore: Send + Sync {
  async fn developers(&self) -> Result<Vec<GameDeveloper>>;
  async fn developer_by_id(&self, id: Uuid) -> Result<Option<GameDeveloper>>;
  async fn insert_developer(&self, new: &NewGameDeveloper) -> Result<GameDeveloper>;
  async fn update_developer(&self, id: Uuid, new: &NewGameDeveloper) -> Result<Option<GameDeveloper>>;
  async fn delete_developer(&self, id: Uuid) -> Result<bool>;

  async fn publishers(&self) -> Result<Vec<GamePublisher>>;
  async fn publisher_by_id(&self, id: Uuid) -> Result<Option<GamePublisher>>;
  async fn insert_publisher(&self, new: &NewGamePublisher) -> Result<GamePublisher>;
  async fn update_publisher(&self, id: Uuid, new: &NewGamePublisher) -> Result<Option<GamePublisher>>;
  async fn delete_publisher(&self, id: Uuid) -> Result<bool>;

  async fn ratings(&self) -> Result<Vec<GameRating>>;
  async fn rating_by_id(&self, id: Uuid) -> Result<Option<GameRating>>;
  async fn insert_rating(&self, new: &NewGameRating) -> Result<GameRating>;
  async fn update_rating(&self, id: Uuid, new: &NewGameRating) -> Result<Option<GameRating>>;
  async fn delete_rating(&self, id: Uuid) -> Result<bool>;

  async fn platforms(&self) -> Result<Vec<Platform>>;
  async fn platform_by_id(&self, id: Uuid) -> Result<Option<Platform>>;
  async fn insert_platform(&self, new: &NewPlatform) -> Result<Platform>;
  async fn update_platform(&self, id: Uuid, new: &NewPlatform) -> Result<Option<Platform>>;
  async fn delete_platform(&self, id: Uuid) -> Result<bool>;

  async fn voice_actors(&self) -> Result<Vec<VoiceActor>>;
  async fn voice_actor_by_id(&self, id: Uuid) -> Result<Option<VoiceActor>>;
  async fn insert_voice_actor(&self, new: &NewVoiceActor) -> Result<VoiceActor>;
  async fn update_voice_actor(&self, id: Uuid, new: &NewVoiceActor) -> Result<Option<VoiceActor>>;
  async fn delete_voice_actor(&self, id: Uuid) -> Result<bool>;
}

/// Row-level operations on the line-item table. The add/remove/merge policy
/// lives in the `ShoppingCart` aggregate, not here.
#[async_trait]
pub trait CartStore: Send + Sync {
  /// All line items for a cart token, joined with live game data.
  async fn cart_lines(&self, cart_id: &str) -> Result<Vec<CartLine>>;

  async fn find_cart_item(&self, cart_id: &str, game_id: Uuid) -> Result<Option<CartItem>>;

  /// Inserts a fresh line with quantity 1.
  async fn insert_cart_item(&self, cart_id: &str, game_id: Uuid) -> Result<CartItem>;

  async fn set_cart_item_quantity(&self, item_id: Uuid, quantity: i32) -> Result<()>;

  async fn delete_cart_item(&self, item_id: Uuid) -> Result<()>;

  /// Sum of quantity times current catalog price over the cart, straight
  /// from the store. Not derived from any cached line list.
  async fn cart_total_pence(&self, cart_id: &str) -> Result<i64>;

  async fn clear_cart(&self, cart_id: &str) -> Result<()>;
}

/// Durable orders. Creation persists the header and every item atomically.
#[async_trait]
pub trait OrderStore: Send + Sync {
  async fn create_order(&self, user_id: Uuid, email: &str, items: &[NewOrderItem]) -> Result<Order>;

  /// Every order in the store, oldest first, with items.
  async fn all_orders(&self) -> Result<Vec<OrderWithItems>>;

  async fn orders_by_user(&self, user_id: Uuid) -> Result<Vec<OrderWithItems>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
  async fn user_by_email(&self, email: &str) -> Result<Option<StoreUser>>;
  async fn user_by_id(&self, id: Uuid) -> Result<Option<StoreUser>>;
  async fn insert_user(&self, new: &NewUser) -> Result<StoreUser>;
  async fn all_users(&self) -> Result<Vec<StoreUser>>;
}

/// The full store surface the application is wired against.
pub trait StoreDb: GameStore + LookupStore + CartStore + OrderStore + UserStore {}

impl<T: GameStore + LookupStore + CartStore + OrderStore + UserStore> StoreDb for T {}
