// src/services/orders.rs

//! Order placement and history. Placing an order freezes the cart lines'
//! current prices into immutable order items; later catalog edits never
//! touch past orders.

use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::{OrderStore, StoreDb};
use crate::errors::Result;
use crate::models::{CartLine, NewOrderItem, Order, OrderWithItems, UserRole};

pub struct OrdersService {
  db: Arc<dyn StoreDb>,
}

impl OrdersService {
  pub fn new(db: Arc<dyn StoreDb>) -> Self {
    Self { db }
  }

  /// Materializes the given cart lines into an order for the user. The
  /// unit price of each item is the catalog price at this moment.
  #[instrument(name = "orders::place_order", skip(self, lines), fields(user_id = %user_id, line_count = lines.len()))]
  pub async fn place_order(&self, lines: &[CartLine], user_id: Uuid, email: &str) -> Result<Order> {
    let items: Vec<NewOrderItem> = lines
      .iter()
      .map(|line| NewOrderItem {
        game_id: line.game_id,
        quantity: line.quantity,
        unit_price_pence: line.price_pence,
      })
      .collect();

    let order = self.db.create_order(user_id, email, &items).await?;
    info!(order_id = %order.id, item_count = items.len(), "Order placed.");
    Ok(order)
  }

  /// Order history scoped by role: admins see every order, everyone else
  /// sees only their own.
  pub async fn orders_for(&self, user_id: Uuid, role: UserRole) -> Result<Vec<OrderWithItems>> {
    if role.is_admin() {
      self.db.all_orders().await
    } else {
      self.db.orders_by_user(user_id).await
    }
  }
}
