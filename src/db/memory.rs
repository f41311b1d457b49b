// src/db/memory.rs

//! In-memory implementation of the store traits. Backs the server when no
//! database URL is configured, and every test that exercises store-facing
//! logic.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::db::{CartStore, GameStore, LookupStore, OrderStore, UserStore};
use crate::errors::Result;
use crate::models::{
  CartItem, CartLine, DropdownValues, Game, GameDetail, GameDeveloper, GamePlatform, GamePublisher, GameRating,
  GameVoiceActor, NewGame, NewGameDeveloper, NewGamePublisher, NewGameRating, NewOrderItem, NewPlatform, NewUser,
  NewVoiceActor, Order, OrderItem, OrderItemDetail, OrderWithItems, Page, Platform, StoreUser, VoiceActor,
};

#[derive(Default)]
struct Inner {
  games: Vec<Game>,
  developers: Vec<GameDeveloper>,
  publishers: Vec<GamePublisher>,
  ratings: Vec<GameRating>,
  platforms: Vec<Platform>,
  voice_actors: Vec<VoiceActor>,
  game_platforms: Vec<GamePlatform>,
  game_voice_actors: Vec<GameVoiceActor>,
  users: Vec<StoreUser>,
  cart_items: Vec<CartItem>,
  orders: Vec<Order>,
  order_items: Vec<OrderItem>,
}

/// All state lives behind a single lock; none of the trait methods await
/// while holding a guard.
#[derive(Default)]
pub struct MemStoreDb {
  inner: RwLock<Inner>,
}

impl MemStoreDb {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Inner {
  fn items_for_order(&self, order_id: Uuid) -> Vec<OrderItemDetail> {
    self
      .order_items
      .iter()
      .filter(|item| item.order_id == order_id)
      .map(|item| OrderItemDetail {
        id: item.id,
        game_id: item.game_id,
        game_name: self.games.iter().find(|g| g.id == item.game_id).map(|g| g.name.clone()),
        quantity: item.quantity,
        unit_price_pence: item.unit_price_pence,
      })
      .collect()
  }

  fn with_items(&self, orders: Vec<Order>) -> Vec<OrderWithItems> {
    orders
      .into_iter()
      .map(|order| {
        let items = self.items_for_order(order.id);
        let user = self.users.iter().find(|u| u.id == order.user_id).cloned();
        OrderWithItems { order, user, items }
      })
      .collect()
  }
}

#[async_trait]
impl GameStore for MemStoreDb {
  async fn games_page(&self, page: i64, page_size: i64, search: Option<&str>) -> Result<Page<Game>> {
    let page = page.max(1);
    let inner = self.inner.read();

    let needle = search.map(|s| s.to_lowercase());
    let mut matching: Vec<Game> = inner
      .games
      .iter()
      .filter(|game| match &needle {
        Some(needle) => {
          game.name.to_lowercase().contains(needle) || game.description.to_lowercase().contains(needle)
        }
        None => true,
      })
      .cloned()
      .collect();
    matching.sort_by(|a, b| a.name.cmp(&b.name));

    let total_items = matching.len() as i64;
    let offset = ((page - 1) * page_size) as usize;
    let items: Vec<Game> = matching.into_iter().skip(offset).take(page_size as usize).collect();

    Ok(Page::new(items, page, page_size, total_items))
  }

  async fn game_by_id(&self, id: Uuid) -> Result<Option<Game>> {
    Ok(self.inner.read().games.iter().find(|g| g.id == id).cloned())
  }

  async fn game_detail(&self, id: Uuid) -> Result<Option<GameDetail>> {
    let inner = self.inner.read();
    let Some(game) = inner.games.iter().find(|g| g.id == id).cloned() else {
      return Ok(None);
    };

    let rating = inner
      .ratings
      .iter()
      .find(|r| r.id == game.rating_id)
      .cloned()
      .ok_or_else(|| crate::errors::AppError::Internal("game references a missing rating".into()))?;
    let developer = inner
      .developers
      .iter()
      .find(|d| d.id == game.developer_id)
      .cloned()
      .ok_or_else(|| crate::errors::AppError::Internal("game references a missing developer".into()))?;
    let publisher = inner
      .publishers
      .iter()
      .find(|p| p.id == game.publisher_id)
      .cloned()
      .ok_or_else(|| crate::errors::AppError::Internal("game references a missing publisher".into()))?;

    let mut platforms: Vec<Platform> = inner
      .game_platforms
      .iter()
      .filter(|gp| gp.game_id == id)
      .filter_map(|gp| inner.platforms.iter().find(|p| p.id == gp.platform_id).cloned())
      .collect();
    platforms.sort_by(|a, b| a.name.cmp(&b.name));

    let mut voice_actors: Vec<VoiceActor> = inner
      .game_voice_actors
      .iter()
      .filter(|gv| gv.game_id == id)
      .filter_map(|gv| inner.voice_actors.iter().find(|v| v.id == gv.voice_actor_id).cloned())
      .collect();
    voice_actors.sort_by(|a, b| a.full_name.cmp(&b.full_name));

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

    let mut inner = self.inner.write();
    for platform_id in &new.platform_ids {
      inner.game_platforms.push(GamePlatform {
        game_id: game.id,
        platform_id: *platform_id,
      });
    }
    for voice_actor_id in &new.voice_actor_ids {
      inner.game_voice_actors.push(GameVoiceActor {
        game_id: game.id,
        voice_actor_id: *voice_actor_id,
      });
    }
    inner.games.push(game.clone());
    Ok(game)
  }

  async fn update_game(&self, id: Uuid, new: &NewGame) -> Result<Option<Game>> {
    let mut inner = self.inner.write();
    let Some(index) = inner.games.iter().position(|g| g.id == id) else {
      return Ok(None);
    };

    {
      let game = &mut inner.games[index];
      game.name = new.name.clone();
      game.description = new.description.clone();
      game.release_date = new.release_date;
      game.price_pence = new.price_pence;
      game.image_url = new.image_url.clone();
      game.genre = new.genre;
      game.rating_id = new.rating_id;
      game.developer_id = new.developer_id;
      game.publisher_id = new.publisher_id;
      game.updated_at = Utc::now();
    }

    inner.game_platforms.retain(|gp| gp.game_id != id);
    inner.game_voice_actors.retain(|gv| gv.game_id != id);
    for platform_id in &new.platform_ids {
      inner.game_platforms.push(GamePlatform {
        game_id: id,
        platform_id: *platform_id,
      });
    }
    for voice_actor_id in &new.voice_actor_ids {
      inner.game_voice_actors.push(GameVoiceActor {
        game_id: id,
        voice_actor_id: *voice_actor_id,
      });
    }

    Ok(Some(inner.games[index].clone()))
  }

  async fn delete_game(&self, id: Uuid) -> Result<bool> {
    let mut inner = self.inner.write();
    let before = inner.games.len();
    inner.games.retain(|g| g.id != id);
    if inner.games.len() == before {
      return Ok(false);
    }
    inner.game_platforms.retain(|gp| gp.game_id != id);
    inner.game_voice_actors.retain(|gv| gv.game_id != id);
    inner.cart_items.retain(|c| c.game_id != id);
    Ok(true)
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
impl LookupStore for MemStoreDb {
  async fn developers(&self) -> Result<Vec<GameDeveloper>> {
    let mut list = self.inner.read().developers.clone();
    list.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(list)
  }

  async fn developer_by_id(&self, id: Uuid) -> Result<Option<GameDeveloper>> {
    Ok(self.inner.read().developers.iter().find(|d| d.id == id).cloned())
  }

  async fn insert_developer(&self, new: &NewGameDeveloper) -> Result<GameDeveloper> {
    let developer = GameDeveloper {
      id: Uuid::new_v4(),
      name: new.name.clone(),
      description: new.description.clone(),
      logo_url: new.logo_url.clone(),
    };
    self.inner.write().developers.push(developer.clone());
    Ok(developer)
  }

  async fn update_developer(&self, id: Uuid, new: &NewGameDeveloper) -> Result<Option<GameDeveloper>> {
    let mut inner = self.inner.write();
    let Some(developer) = inner.developers.iter_mut().find(|d| d.id == id) else {
      return Ok(None);
    };
    developer.name = new.name.clone();
    developer.description = new.description.clone();
    developer.logo_url = new.logo_url.clone();
    Ok(Some(developer.clone()))
  }

  async fn delete_developer(&self, id: Uuid) -> Result<bool> {
    let mut inner = self.inner.write();
    let before = inner.developers.len();
    inner.developers.retain(|d| d.id != id);
    Ok(inner.developers.len() != before)
  }

  async fn publishers(&self) -> Result<Vec<GamePublisher>> {
    let mut list = self.inner.read().publishers.clone();
    list.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(list)
  }

  async fn publisher_by_id(&self, id: Uuid) -> Result<Option<GamePublisher>> {
    Ok(self.inner.read().publishers.iter().find(|p| p.id == id).cloned())
  }

  async fn insert_publisher(&self, new: &NewGamePublisher) -> Result<GamePublisher> {
    let publisher = GamePublisher {
      id: Uuid::new_v4(),
      name: new.name.clone(),
      description: new.description.clone(),
      logo_url: new.logo_url.clone(),
    };
    self.inner.write().publishers.push(publisher.clone());
    Ok(publisher)
  }

  async fn update_publisher(&self, id: Uuid, new: &NewGamePublisher) -> Result<Option<GamePublisher>> {
    let mut inner = self.inner.write();
    let Some(publisher) = inner.publishers.iter_mut().find(|p| p.id == id) else {
      return Ok(None);
    };
    publisher.name = new.name.clone();
    publisher.description = new.description.clone();
    publisher.logo_url = new.logo_url.clone();
    Ok(Some(publisher.clone()))
  }

  async fn delete_publisher(&self, id: Uuid) -> Result<bool> {
    let mut inner = self.inner.write();
    let before = inner.publishers.len();
    inner.publishers.retain(|p| p.id != id);
    Ok(inner.publishers.len() != before)
  }

  async fn ratings(&self) -> Result<Vec<GameRating>> {
    let mut list = self.inner.read().ratings.clone();
    list.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(list)
  }

  async fn rating_by_id(&self, id: Uuid) -> Result<Option<GameRating>> {
    Ok(self.inner.read().ratings.iter().find(|r| r.id == id).cloned())
  }

  async fn insert_rating(&self, new: &NewGameRating) -> Result<GameRating> {
    let rating = GameRating {
      id: Uuid::new_v4(),
      name: new.name.clone(),
      description: new.description.clone(),
      logo_url: new.logo_url.clone(),
    };
    self.inner.write().ratings.push(rating.clone());
    Ok(rating)
  }

  async fn update_rating(&self, id: Uuid, new: &NewGameRating) -> Result<Option<GameRating>> {
    let mut inner = self.inner.write();
    let Some(rating) = inner.ratings.iter_mut().find(|r| r.id == id) else {
      return Ok(None);
    };
    rating.name = new.name.clone();
    rating.description = new.description.clone();
    rating.logo_url = new.logo_url.clone();
    Ok(Some(rating.clone()))
  }

  async fn delete_rating(&self, id: Uuid) -> Result<bool> {
    let mut inner = self.inner.write();
    let before = inner.ratings.len();
    inner.ratings.retain(|r| r.id != id);
    Ok(inner.ratings.len() != before)
  }

  async fn platforms(&self) -> Result<Vec<Platform>> {
    let mut list = self.inner.read().platforms.clone();
    list.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(list)
  }

  async fn platform_by_id(&self, id: Uuid) -> Result<Option<Platform>> {
    Ok(self.inner.read().platforms.iter().find(|p| p.id == id).cloned())
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
    self.inner.write().platforms.push(platform.clone());
    Ok(platform)
  }

  async fn update_platform(&self, id: Uuid, new: &NewPlatform) -> Result<Option<Platform>> {
    let mut inner = self.inner.write();
    let Some(platform) = inner.platforms.iter_mut().find(|p| p.id == id) else {
      return Ok(None);
    };
    platform.name = new.name.clone();
    platform.description = new.description.clone();
    platform.release_date = new.release_date;
    platform.price_pence = new.price_pence;
    platform.platform_developer = new.platform_developer.clone();
    platform.image_url = new.image_url.clone();
    Ok(Some(platform.clone()))
  }

  async fn delete_platform(&self, id: Uuid) -> Result<bool> {
    let mut inner = self.inner.write();
    let before = inner.platforms.len();
    inner.platforms.retain(|p| p.id != id);
    Ok(inner.platforms.len() != before)
  }

  async fn voice_actors(&self) -> Result<Vec<VoiceActor>> {
    let mut list = self.inner.read().voice_actors.clone();
    list.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    Ok(list)
  }

  async fn voice_actor_by_id(&self, id: Uuid) -> Result<Option<VoiceActor>> {
    Ok(self.inner.read().voice_actors.iter().find(|v| v.id == id).cloned())
  }

  async fn insert_voice_actor(&self, new: &NewVoiceActor) -> Result<VoiceActor> {
    let voice_actor = VoiceActor {
      id: Uuid::new_v4(),
      full_name: new.full_name.clone(),
      bio: new.bio.clone(),
      picture_url: new.picture_url.clone(),
    };
    self.inner.write().voice_actors.push(voice_actor.clone());
    Ok(voice_actor)
  }

  async fn update_voice_actor(&self, id: Uuid, new: &NewVoiceActor) -> Result<Option<VoiceActor>> {
    let mut inner = self.inner.write();
    let Some(voice_actor) = inner.voice_actors.iter_mut().find(|v| v.id == id) else {
      return Ok(None);
    };
    voice_actor.full_name = new.full_name.clone();
    voice_actor.bio = new.bio.clone();
    voice_actor.picture_url = new.picture_url.clone();
    Ok(Some(voice_actor.clone()))
  }

  async fn delete_voice_actor(&self, id: Uuid) -> Result<bool> {
    let mut inner = self.inner.write();
    let before = inner.voice_actors.len();
    inner.voice_actors.retain(|v| v.id != id);
    Ok(inner.voice_actors.len() != before)
  }
}

#[async_trait]
impl CartStore for MemStoreDb {
  async fn cart_lines(&self, cart_id: &str) -> Result<Vec<CartLine>> {
    let inner = self.inner.read();
    let mut items: Vec<&CartItem> = inner.cart_items.iter().filter(|c| c.cart_id == cart_id).collect();
    items.sort_by_key(|c| c.added_at);

    // A cart item whose game has vanished is unrepresentable here: game
    // deletion also drops its cart items, mirroring the cascade.
    Ok(
      items
        .into_iter()
        .filter_map(|item| {
          let game = inner.games.iter().find(|g| g.id == item.game_id)?;
          Some(CartLine {
            id: item.id,
            cart_id: item.cart_id.clone(),
            game_id: item.game_id,
            game_name: game.name.clone(),
            price_pence: game.price_pence,
            image_url: game.image_url.clone(),
            quantity: item.quantity,
          })
        })
        .collect(),
    )
  }

  async fn find_cart_item(&self, cart_id: &str, game_id: Uuid) -> Result<Option<CartItem>> {
    Ok(
      self
        .inner
        .read()
        .cart_items
        .iter()
        .find(|c| c.cart_id == cart_id && c.game_id == game_id)
        .cloned(),
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
    self.inner.write().cart_items.push(item.clone());
    Ok(item)
  }

  async fn set_cart_item_quantity(&self, item_id: Uuid, quantity: i32) -> Result<()> {
    let mut inner = self.inner.write();
    if let Some(item) = inner.cart_items.iter_mut().find(|c| c.id == item_id) {
      item.quantity = quantity;
    }
    Ok(())
  }

  async fn delete_cart_item(&self, item_id: Uuid) -> Result<()> {
    self.inner.write().cart_items.retain(|c| c.id != item_id);
    Ok(())
  }

  async fn cart_total_pence(&self, cart_id: &str) -> Result<i64> {
    // Built from the live join, same as the Postgres SUM over games.
    let lines = self.cart_lines(cart_id).await?;
    Ok(lines.iter().map(CartLine::subtotal_pence).sum())
  }

  async fn clear_cart(&self, cart_id: &str) -> Result<()> {
    self.inner.write().cart_items.retain(|c| c.cart_id != cart_id);
    Ok(())
  }
}

#[async_trait]
impl OrderStore for MemStoreDb {
  async fn create_order(&self, user_id: Uuid, email: &str, items: &[NewOrderItem]) -> Result<Order> {
    let order = Order {
      id: Uuid::new_v4(),
      user_id,
      email: email.to_string(),
      placed_at: Utc::now(),
    };

    let mut inner = self.inner.write();
    inner.orders.push(order.clone());
    for item in items {
      inner.order_items.push(OrderItem {
        id: Uuid::new_v4(),
        order_id: order.id,
        game_id: item.game_id,
        quantity: item.quantity,
        unit_price_pence: item.unit_price_pence,
      });
    }
    Ok(order)
  }

  async fn all_orders(&self) -> Result<Vec<OrderWithItems>> {
    let inner = self.inner.read();
    let mut orders = inner.orders.clone();
    orders.sort_by_key(|o| o.placed_at);
    Ok(inner.with_items(orders))
  }

  async fn orders_by_user(&self, user_id: Uuid) -> Result<Vec<OrderWithItems>> {
    let inner = self.inner.read();
    let mut orders: Vec<Order> = inner.orders.iter().filter(|o| o.user_id == user_id).cloned().collect();
    orders.sort_by_key(|o| o.placed_at);
    Ok(inner.with_items(orders))
  }
}

#[async_trait]
impl UserStore for MemStoreDb {
  async fn user_by_email(&self, email: &str) -> Result<Option<StoreUser>> {
    Ok(self.inner.read().users.iter().find(|u| u.email == email).cloned())
  }

  async fn user_by_id(&self, id: Uuid) -> Result<Option<StoreUser>> {
    Ok(self.inner.read().users.iter().find(|u| u.id == id).cloned())
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
    self.inner.write().users.push(user.clone());
    Ok(user)
  }

  async fn all_users(&self) -> Result<Vec<StoreUser>> {
    let mut users = self.inner.read().users.clone();
    users.sort_by(|a, b| a.email.cmp(&b.email));
    Ok(users)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::GameGenre;
  use chrono::NaiveDate;

  fn sample_lookups(db: &MemStoreDb) -> (Uuid, Uuid, Uuid) {
    let mut inner = db.inner.write();
    let rating = GameRating {
      id: Uuid::new_v4(),
      name: "PEGI 12".into(),
      description: "Suitable for ages 12 and over.".into(),
      logo_url: "/images/ratings/pegi12.png".into(),
    };
    let developer = GameDeveloper {
      id: Uuid::new_v4(),
      name: "Test Studio".into(),
      description: "A studio.".into(),
      logo_url: "/images/devs/test.png".into(),
    };
    let publisher = GamePublisher {
      id: Uuid::new_v4(),
      name: "Test Publishing".into(),
      description: "A publisher.".into(),
      logo_url: "/images/pubs/test.png".into(),
    };
    let ids = (rating.id, developer.id, publisher.id);
    inner.ratings.push(rating);
    inner.developers.push(developer);
    inner.publishers.push(publisher);
    ids
  }

  fn new_game(name: &str, price_pence: i64, ids: (Uuid, Uuid, Uuid)) -> NewGame {
    NewGame {
      name: name.into(),
      description: format!("{name} description"),
      release_date: NaiveDate::from_ymd_opt(2022, 11, 9).unwrap(),
      price_pence,
      image_url: "/images/games/test.png".into(),
      genre: GameGenre::ActionAdventure,
      rating_id: ids.0,
      developer_id: ids.1,
      publisher_id: ids.2,
      platform_ids: Vec::new(),
      voice_actor_ids: Vec::new(),
    }
  }

  #[tokio::test]
  async fn pagination_reports_totals() {
    let db = MemStoreDb::new();
    let ids = sample_lookups(&db);
    for i in 0..12 {
      db.insert_game(&new_game(&format!("Game {i:02}"), 1000, ids)).await.unwrap();
    }

    let page = db.games_page(2, 9, None).await.unwrap();
    assert_eq!(page.total_items, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].name, "Game 09");
  }

  #[tokio::test]
  async fn search_is_case_insensitive() {
    let db = MemStoreDb::new();
    let ids = sample_lookups(&db);
    db.insert_game(&new_game("Elden Ring", 5999, ids)).await.unwrap();
    db.insert_game(&new_game("Stardew Valley", 1099, ids)).await.unwrap();

    let page = db.games_page(1, 9, Some("ELDEN")).await.unwrap();
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].name, "Elden Ring");
  }

  #[tokio::test]
  async fn updating_a_game_replaces_its_association_sets() {
    let db = MemStoreDb::new();
    let ids = sample_lookups(&db);

    let ps5 = db
      .insert_platform(&NewPlatform {
        name: "PlayStation 5".into(),
        description: "Console.".into(),
        release_date: NaiveDate::from_ymd_opt(2020, 11, 12).unwrap(),
        price_pence: 47999,
        platform_developer: "Sony Interactive Entertainment".into(),
        image_url: "/images/platforms/ps5.png".into(),
      })
      .await
      .unwrap();
    let xbox = db
      .insert_platform(&NewPlatform {
        name: "Xbox Series X".into(),
        description: "Console.".into(),
        release_date: NaiveDate::from_ymd_opt(2020, 11, 10).unwrap(),
        price_pence: 44999,
        platform_developer: "Microsoft".into(),
        image_url: "/images/platforms/xbox.png".into(),
      })
      .await
      .unwrap();
    let actor = db
      .insert_voice_actor(&NewVoiceActor {
        full_name: "Troy Baker".into(),
        bio: "Voice actor.".into(),
        picture_url: "/images/voice_actors/troy_baker.png".into(),
      })
      .await
      .unwrap();

    let mut new = new_game("Cross Platform", 2999, ids);
    new.platform_ids = vec![ps5.id];
    new.voice_actor_ids = vec![actor.id];
    let game = db.insert_game(&new).await.unwrap();

    // Swap the platform set and drop the voice actor entirely.
    new.platform_ids = vec![xbox.id];
    new.voice_actor_ids = Vec::new();
    db.update_game(game.id, &new).await.unwrap().unwrap();

    let detail = db.game_detail(game.id).await.unwrap().unwrap();
    assert_eq!(detail.platforms.len(), 1);
    assert_eq!(detail.platforms[0].id, xbox.id);
    assert!(detail.voice_actors.is_empty());
  }

  #[tokio::test]
  async fn deleting_a_game_drops_its_cart_items() {
    let db = MemStoreDb::new();
    let ids = sample_lookups(&db);
    let game = db.insert_game(&new_game("Doomed", 1500, ids)).await.unwrap();
    db.insert_cart_item("cart-a", game.id).await.unwrap();

    assert!(db.delete_game(game.id).await.unwrap());
    assert!(db.cart_lines("cart-a").await.unwrap().is_empty());
    assert_eq!(db.cart_total_pence("cart-a").await.unwrap(), 0);
  }
}
