// tests/cart_tests.rs

mod common;

use common::{insert_game, insert_lookups, mem_db, set_game_price};
use game_store_app::services::ShoppingCart;

#[tokio::test]
async fn adding_the_same_game_increments_one_line() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;

  let mut cart = ShoppingCart::new(db.clone(), "cart-a".into());
  for _ in 0..3 {
    cart.add_item(&game).await.unwrap();
  }

  let items = cart.items().await.unwrap();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].quantity, 3);
  assert_eq!(items[0].game_id, game.id);
  assert_eq!(cart.total_pence().await.unwrap(), 3 * 1999);
}

#[tokio::test]
async fn distinct_games_get_distinct_lines() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let hades = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;
  let celeste = insert_game(db.as_ref(), &lookups, "Celeste", 1599).await;

  let mut cart = ShoppingCart::new(db.clone(), "cart-a".into());
  cart.add_item(&hades).await.unwrap();
  cart.add_item(&celeste).await.unwrap();

  assert_eq!(cart.items().await.unwrap().len(), 2);
  assert_eq!(cart.total_pence().await.unwrap(), 1999 + 1599);
}

#[tokio::test]
async fn removing_decrements_then_deletes() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;

  let mut cart = ShoppingCart::new(db.clone(), "cart-a".into());
  cart.add_item(&game).await.unwrap();
  cart.add_item(&game).await.unwrap();

  cart.remove_item(&game).await.unwrap();
  assert_eq!(cart.items().await.unwrap()[0].quantity, 1);

  cart.remove_item(&game).await.unwrap();
  assert!(cart.items().await.unwrap().is_empty());
}

#[tokio::test]
async fn removing_an_absent_game_is_a_noop() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let in_cart = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;
  let never_added = insert_game(db.as_ref(), &lookups, "Celeste", 1599).await;

  let mut cart = ShoppingCart::new(db.clone(), "cart-a".into());
  cart.add_item(&in_cart).await.unwrap();
  cart.remove_item(&never_added).await.unwrap();

  let items = cart.items().await.unwrap();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].game_id, in_cart.id);
}

#[tokio::test]
async fn total_reflects_price_changes_immediately() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;

  let mut cart = ShoppingCart::new(db.clone(), "cart-a".into());
  cart.add_item(&game).await.unwrap();
  cart.add_item(&game).await.unwrap();
  assert_eq!(cart.total_pence().await.unwrap(), 2 * 1999);

  set_game_price(db.as_ref(), &game, 999).await;
  assert_eq!(cart.total_pence().await.unwrap(), 2 * 999);
}

#[tokio::test]
async fn carts_are_isolated_by_token() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;

  let mut cart_a = ShoppingCart::new(db.clone(), "cart-a".into());
  let mut cart_b = ShoppingCart::new(db.clone(), "cart-b".into());
  cart_a.add_item(&game).await.unwrap();

  assert_eq!(cart_a.items().await.unwrap().len(), 1);
  assert!(cart_b.items().await.unwrap().is_empty());
  assert_eq!(cart_b.total_pence().await.unwrap(), 0);
}
