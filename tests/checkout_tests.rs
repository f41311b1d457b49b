// tests/checkout_tests.rs

mod common;

use common::{insert_game, insert_lookups, insert_user, mem_db, set_game_price};
use game_store_app::models::UserRole;
use game_store_app::services::{OrdersService, ShoppingCart};

#[tokio::test]
async fn checkout_materializes_the_cart_and_empties_it() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let hades = insert_game(db.as_ref(), &lookups, "Hades", 1000).await;
  let celeste = insert_game(db.as_ref(), &lookups, "Celeste", 500).await;
  let user = insert_user(db.as_ref(), "buyer@example.com", UserRole::User).await;

  let mut cart = ShoppingCart::new(db.clone(), "cart-a".into());
  cart.add_item(&hades).await.unwrap();
  cart.add_item(&hades).await.unwrap();
  cart.add_item(&celeste).await.unwrap();
  assert_eq!(cart.total_pence().await.unwrap(), 2500);

  let lines = cart.items().await.unwrap().to_vec();
  let orders = OrdersService::new(db.clone());
  let order = orders.place_order(&lines, user.id, &user.email).await.unwrap();
  cart.clear().await.unwrap();

  assert!(cart.items().await.unwrap().is_empty());
  assert_eq!(cart.total_pence().await.unwrap(), 0);

  let history = orders.orders_for(user.id, UserRole::User).await.unwrap();
  assert_eq!(history.len(), 1);
  assert_eq!(history[0].order.id, order.id);
  assert_eq!(history[0].order.email, "buyer@example.com");
  assert_eq!(history[0].items.len(), 2);

  let hades_item = history[0].items.iter().find(|i| i.game_id == hades.id).unwrap();
  assert_eq!(hades_item.quantity, 2);
  assert_eq!(hades_item.unit_price_pence, 1000);
}

#[tokio::test]
async fn order_prices_are_frozen_against_catalog_edits() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;
  let user = insert_user(db.as_ref(), "buyer@example.com", UserRole::User).await;

  let mut cart = ShoppingCart::new(db.clone(), "cart-a".into());
  cart.add_item(&game).await.unwrap();

  let orders = OrdersService::new(db.clone());
  let lines = cart.items().await.unwrap().to_vec();
  orders.place_order(&lines, user.id, &user.email).await.unwrap();
  cart.clear().await.unwrap();

  set_game_price(db.as_ref(), &game, 99).await;

  let history = orders.orders_for(user.id, UserRole::User).await.unwrap();
  assert_eq!(history[0].items[0].unit_price_pence, 1999);
}

#[tokio::test]
async fn order_history_survives_game_deletion() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Delisted", 1500).await;
  let user = insert_user(db.as_ref(), "buyer@example.com", UserRole::User).await;

  let mut cart = ShoppingCart::new(db.clone(), "cart-a".into());
  cart.add_item(&game).await.unwrap();

  let orders = OrdersService::new(db.clone());
  let lines = cart.items().await.unwrap().to_vec();
  orders.place_order(&lines, user.id, &user.email).await.unwrap();
  cart.clear().await.unwrap();

  use game_store_app::db::GameStore;
  assert!(db.delete_game(game.id).await.unwrap());

  let history = orders.orders_for(user.id, UserRole::User).await.unwrap();
  assert_eq!(history.len(), 1);
  let item = &history[0].items[0];
  assert_eq!(item.game_id, game.id);
  assert_eq!(item.unit_price_pence, 1500);
  // The joined name is gone once the game is, but the line itself stays.
  assert!(item.game_name.is_none());
}

#[tokio::test]
async fn an_empty_cart_produces_an_empty_order() {
  let db = mem_db();
  let user = insert_user(db.as_ref(), "buyer@example.com", UserRole::User).await;

  let orders = OrdersService::new(db.clone());
  let order = orders.place_order(&[], user.id, &user.email).await.unwrap();

  let history = orders.orders_for(user.id, UserRole::User).await.unwrap();
  assert_eq!(history.len(), 1);
  assert_eq!(history[0].order.id, order.id);
  assert!(history[0].items.is_empty());
}
