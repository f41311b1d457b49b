// tests/order_query_tests.rs

mod common;

use common::{insert_game, insert_lookups, insert_user, mem_db};
use game_store_app::db::OrderStore;
use game_store_app::models::{NewOrderItem, UserRole};
use game_store_app::services::OrdersService;

#[tokio::test]
async fn users_only_see_their_own_orders() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;
  let alice = insert_user(db.as_ref(), "alice@example.com", UserRole::User).await;
  let bob = insert_user(db.as_ref(), "bob@example.com", UserRole::User).await;

  let item = NewOrderItem {
    game_id: game.id,
    quantity: 1,
    unit_price_pence: game.price_pence,
  };
  db.create_order(alice.id, &alice.email, &[item.clone()]).await.unwrap();
  db.create_order(bob.id, &bob.email, &[item]).await.unwrap();

  let orders = OrdersService::new(db.clone());
  let alice_orders = orders.orders_for(alice.id, UserRole::User).await.unwrap();
  assert_eq!(alice_orders.len(), 1);
  assert_eq!(alice_orders[0].order.user_id, alice.id);
}

#[tokio::test]
async fn admins_see_every_order() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;
  let alice = insert_user(db.as_ref(), "alice@example.com", UserRole::User).await;
  let bob = insert_user(db.as_ref(), "bob@example.com", UserRole::User).await;
  let admin = insert_user(db.as_ref(), "admin@example.com", UserRole::Admin).await;

  let item = NewOrderItem {
    game_id: game.id,
    quantity: 1,
    unit_price_pence: game.price_pence,
  };
  db.create_order(alice.id, &alice.email, &[item.clone()]).await.unwrap();
  db.create_order(bob.id, &bob.email, &[item]).await.unwrap();

  let orders = OrdersService::new(db.clone());
  let all = orders.orders_for(admin.id, UserRole::Admin).await.unwrap();
  assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn orders_carry_the_owning_user_record() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;
  let alice = insert_user(db.as_ref(), "alice@example.com", UserRole::User).await;

  let item = NewOrderItem {
    game_id: game.id,
    quantity: 1,
    unit_price_pence: game.price_pence,
  };
  db.create_order(alice.id, &alice.email, &[item]).await.unwrap();

  let orders = OrdersService::new(db.clone());
  let history = orders.orders_for(alice.id, UserRole::User).await.unwrap();
  let user = history[0].user.as_ref().expect("order should carry its owner");
  assert_eq!(user.id, alice.id);
  assert_eq!(user.first_name, "Test");
  assert_eq!(user.last_name, "User");

  // The joined account serializes without its password hash.
  let json = serde_json::to_value(&history[0]).unwrap();
  assert!(json["user"].get("password_hash").is_none());
  assert_eq!(json["user"]["email"], "alice@example.com");
}

#[tokio::test]
async fn orders_come_back_oldest_first() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;
  let alice = insert_user(db.as_ref(), "alice@example.com", UserRole::User).await;

  let item = NewOrderItem {
    game_id: game.id,
    quantity: 1,
    unit_price_pence: game.price_pence,
  };
  let first = db.create_order(alice.id, &alice.email, &[item.clone()]).await.unwrap();
  let second = db.create_order(alice.id, &alice.email, &[item]).await.unwrap();

  let orders = OrdersService::new(db.clone());
  let history = orders.orders_for(alice.id, UserRole::User).await.unwrap();
  assert_eq!(history[0].order.id, first.id);
  assert_eq!(history[1].order.id, second.id);
}
