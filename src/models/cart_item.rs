// src/models/cart_item.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted cart line item. At most one row exists per
/// (cart_id, game_id) pair; quantity moves up and down in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
  pub id: Uuid,
  /// The opaque session cart token; carts are owned by a browser session,
  /// not by a user, so they exist before login.
  pub cart_id: String,
  pub game_id: Uuid,
  pub quantity: i32,
  pub added_at: DateTime<Utc>,
}

/// A line item joined with the *current* game record for display and for
/// totals. The price here is live catalog data, unlike the frozen price on
/// an order item.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartLine {
  pub id: Uuid,
  pub cart_id: String,
  pub game_id: Uuid,
  pub game_name: String,
  pub price_pence: i64,
  pub image_url: String,
  pub quantity: i32,
}

impl CartLine {
  /// Live line subtotal at current catalog price.
  pub fn subtotal_pence(&self) -> i64 {
    self.price_pence * i64::from(self.quantity)
  }
}
