// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::user::StoreUser;

/// An order header. Created atomically at checkout together with its items
/// and immutable from then on; no update or delete surface exists.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: Uuid,
  pub user_id: Uuid,
  /// Purchaser email snapshotted at checkout time.
  pub email: String,
  pub placed_at: DateTime<Utc>,
}

/// The rows handed to the store when materialising an order. The unit price
/// is the catalog price at the instant of checkout.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
  pub game_id: Uuid,
  pub quantity: i32,
  pub unit_price_pence: i64,
}

/// An order item joined with the current game name for display. The name is
/// a live join and may be gone if the game was later deleted; the price is
/// the frozen snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemDetail {
  pub id: Uuid,
  pub game_id: Uuid,
  pub game_name: Option<String>,
  pub quantity: i32,
  pub unit_price_pence: i64,
}

/// An order with its items and the owning account joined in, so an admin
/// listing every order can see purchaser names, not just ids. The account
/// can be gone if it was deleted after the purchase; the email snapshot on
/// the header remains either way.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
  #[serde(flatten)]
  pub order: Order,
  pub user: Option<StoreUser>,
  pub items: Vec<OrderItemDetail>,
}
