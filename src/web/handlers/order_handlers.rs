// src/web/handlers/order_handlers.rs

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::{OrdersService, ShoppingCart};
use crate::state::AppState;
use crate::web::session::{cart_token, CurrentUser};

#[instrument(name = "handler::checkout", skip(app_state, session, current), fields(user_id = %current.id))]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  session: Session,
  current: CurrentUser,
) -> Result<HttpResponse, AppError> {
  let token = cart_token(&session)?;
  let mut cart = ShoppingCart::new(app_state.db.clone(), token);

  let lines = cart.items().await?.to_vec();
  let orders = OrdersService::new(app_state.db.clone());
  let order = orders.place_order(&lines, current.id, &current.email).await?;
  cart.clear().await?;

  info!(order_id = %order.id, "Checkout complete.");
  Ok(HttpResponse::Created().json(json!({
    "order_id": order.id,
    "item_count": lines.len(),
    "placed_at": order.placed_at,
  })))
}

#[instrument(name = "handler::list_orders", skip(app_state, current), fields(user_id = %current.id, role = ?current.role))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  current: CurrentUser,
) -> Result<HttpResponse, AppError> {
  let orders = OrdersService::new(app_state.db.clone())
    .orders_for(current.id, current.role)
    .await?;
  Ok(HttpResponse::Ok().json(&orders))
}
