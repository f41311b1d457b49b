// src/models/order_item.rs

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A purchased line. `unit_price_pence` is frozen at order-creation time so
/// later catalog price changes never alter historical orders.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
  pub id: Uuid,
  pub order_id: Uuid,
  pub game_id: Uuid,
  pub quantity: i32,
  pub unit_price_pence: i64,
}
