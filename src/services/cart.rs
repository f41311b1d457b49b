// src/services/cart.rs

//! The shopping cart aggregate. A cart is identified by an opaque token
//! held in the visitor's session; all item state lives in the store so the
//! cart survives server restarts for as long as the session cookie does.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::db::{CartStore, StoreDb};
use crate::errors::Result;
use crate::models::{CartLine, Game};

pub struct ShoppingCart {
  db: Arc<dyn StoreDb>,
  cart_id: String,
  // Lines are memoized for the lifetime of this value (one request).
  // Mutations drop the memo; totals never read it.
  lines: Option<Vec<CartLine>>,
}

impl ShoppingCart {
  pub fn new(db: Arc<dyn StoreDb>, cart_id: String) -> Self {
    Self {
      db,
      cart_id,
      lines: None,
    }
  }

  pub fn cart_id(&self) -> &str {
    &self.cart_id
  }

  /// Adds one copy of the game. A game already in the cart has its
  /// quantity incremented rather than gaining a second line.
  #[instrument(name = "cart::add_item", skip(self, game), fields(cart_id = %self.cart_id, game_id = %game.id))]
  pub async fn add_item(&mut self, game: &Game) -> Result<()> {
    match self.db.find_cart_item(&self.cart_id, game.id).await? {
      Some(item) => {
        self.db.set_cart_item_quantity(item.id, item.quantity + 1).await?;
        debug!(quantity = item.quantity + 1, "Incremented cart line.");
      }
      None => {
        self.db.insert_cart_item(&self.cart_id, game.id).await?;
        debug!("Added new cart line.");
      }
    }
    self.lines = None;
    Ok(())
  }

  /// Removes one copy of the game. The line disappears when its quantity
  /// reaches zero; removing a game that is not in the cart is a no-op.
  #[instrument(name = "cart::remove_item", skip(self, game), fields(cart_id = %self.cart_id, game_id = %game.id))]
  pub async fn remove_item(&mut self, game: &Game) -> Result<()> {
    match self.db.find_cart_item(&self.cart_id, game.id).await? {
      Some(item) if item.quantity > 1 => {
        self.db.set_cart_item_quantity(item.id, item.quantity - 1).await?;
        debug!(quantity = item.quantity - 1, "Decremented cart line.");
      }
      Some(item) => {
        self.db.delete_cart_item(item.id).await?;
        debug!("Removed cart line.");
      }
      None => {
        warn!("Attempted to remove a game that is not in the cart.");
      }
    }
    self.lines = None;
    Ok(())
  }

  /// Returns the cart's lines, loading them from the store at most once
  /// per aggregate lifetime.
  pub async fn items(&mut self) -> Result<&[CartLine]> {
    if self.lines.is_none() {
      self.lines = Some(self.db.cart_lines(&self.cart_id).await?);
    }
    Ok(self.lines.as_deref().unwrap_or_default())
  }

  /// Computes the cart total from current catalog prices. Always hits the
  /// store, so a price change between reads is reflected immediately.
  pub async fn total_pence(&self) -> Result<i64> {
    self.db.cart_total_pence(&self.cart_id).await
  }

  /// Empties the cart. Used after checkout.
  #[instrument(name = "cart::clear", skip(self), fields(cart_id = %self.cart_id))]
  pub async fn clear(&mut self) -> Result<()> {
    self.db.clear_cart(&self.cart_id).await?;
    self.lines = None;
    info!("Cart cleared.");
    Ok(())
  }
}
