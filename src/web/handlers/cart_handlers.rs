// src/web/handlers/cart_handlers.rs

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::GameStore;
use crate::errors::AppError;
use crate::services::ShoppingCart;
use crate::state::AppState;
use crate::web::session::cart_token;

async fn cart_for_session(app_state: &AppState, session: &Session) -> Result<ShoppingCart, AppError> {
  let token = cart_token(session)?;
  Ok(ShoppingCart::new(app_state.db.clone(), token))
}

#[instrument(name = "handler::view_cart", skip(app_state, session))]
pub async fn view_cart_handler(
  app_state: web::Data<AppState>,
  session: Session,
) -> Result<HttpResponse, AppError> {
  let mut cart = cart_for_session(&app_state, &session).await?;
  let total_pence = cart.total_pence().await?;
  let items = cart.items().await?;
  Ok(HttpResponse::Ok().json(json!({
    "items": items,
    "total_pence": total_pence,
  })))
}

#[instrument(name = "handler::add_to_cart", skip(app_state, session, path), fields(game_id = %path.as_ref()))]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  session: Session,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let game_id = path.into_inner();
  let game = app_state
    .db
    .game_by_id(game_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Game {} not found.", game_id)))?;

  let mut cart = cart_for_session(&app_state, &session).await?;
  cart.add_item(&game).await?;
  info!(cart_id = %cart.cart_id(), "Added game to cart.");

  let total_pence = cart.total_pence().await?;
  let items = cart.items().await?;
  Ok(HttpResponse::Ok().json(json!({
    "items": items,
    "total_pence": total_pence,
  })))
}

#[instrument(name = "handler::remove_from_cart", skip(app_state, session, path), fields(game_id = %path.as_ref()))]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  session: Session,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let game_id = path.into_inner();
  let game = app_state
    .db
    .game_by_id(game_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Game {} not found.", game_id)))?;

  let mut cart = cart_for_session(&app_state, &session).await?;
  cart.remove_item(&game).await?;
  info!(cart_id = %cart.cart_id(), "Removed game from cart.");

  let total_pence = cart.total_pence().await?;
  let items = cart.items().await?;
  Ok(HttpResponse::Ok().json(json!({
    "items": items,
    "total_pence": total_pence,
  })))
}
