// src/web/handlers/game_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::GameStore;
use crate::errors::AppError;
use crate::models::NewGame;
use crate::state::AppState;
use crate::web::session::AdminUser;

/// The storefront shows a 3x3 grid, so nine games per page.
const DEFAULT_PAGE_SIZE: i64 = 9;
const MAX_PAGE_SIZE: i64 = 100;

#[derive(Deserialize, Debug)]
pub struct ListGamesQuery {
  pub page: Option<i64>,
  pub page_size: Option<i64>,
  pub search: Option<String>,
}

#[instrument(name = "handler::list_games", skip(app_state, query))]
pub async fn list_games_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ListGamesQuery>,
) -> Result<HttpResponse, AppError> {
  let page = query.page.unwrap_or(1).max(1);
  let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
  let search = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty());

  let games = app_state.db.games_page(page, page_size, search).await?;
  info!(total = games.total_items, page, "Listed games.");
  Ok(HttpResponse::Ok().json(&games))
}

#[instrument(name = "handler::get_game", skip(app_state, path), fields(game_id = %path.as_ref()))]
pub async fn get_game_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let game_id = path.into_inner();
  let detail = app_state
    .db
    .game_detail(game_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Game {} not found.", game_id)))?;
  Ok(HttpResponse::Ok().json(&detail))
}

#[instrument(name = "handler::dropdown_values", skip(app_state, _admin))]
pub async fn dropdown_values_handler(
  app_state: web::Data<AppState>,
  _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
  let values = app_state.db.dropdown_values().await?;
  Ok(HttpResponse::Ok().json(&values))
}

fn validate_game(new: &NewGame) -> Result<(), AppError> {
  if new.name.trim().is_empty() {
    return Err(AppError::Validation("Game name is required.".to_string()));
  }
  if new.price_pence < 0 {
    return Err(AppError::Validation("Price cannot be negative.".to_string()));
  }
  Ok(())
}

#[instrument(name = "handler::create_game", skip(app_state, admin, payload), fields(admin_id = %admin.0.id, game_name = %payload.name))]
pub async fn create_game_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  payload: web::Json<NewGame>,
) -> Result<HttpResponse, AppError> {
  validate_game(&payload)?;
  let game = app_state.db.insert_game(&payload).await?;
  info!(game_id = %game.id, "Game created.");
  Ok(HttpResponse::Created().json(&game))
}

#[instrument(name = "handler::update_game", skip(app_state, admin, path, payload), fields(admin_id = %admin.0.id, game_id = %path.as_ref()))]
pub async fn update_game_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
  payload: web::Json<NewGame>,
) -> Result<HttpResponse, AppError> {
  validate_game(&payload)?;
  let game_id = path.into_inner();
  let game = app_state
    .db
    .update_game(game_id, &payload)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Game {} not found.", game_id)))?;
  info!("Game updated.");
  Ok(HttpResponse::Ok().json(&game))
}

#[instrument(name = "handler::delete_game", skip(app_state, admin, path), fields(admin_id = %admin.0.id, game_id = %path.as_ref()))]
pub async fn delete_game_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let game_id = path.into_inner();
  if !app_state.db.delete_game(game_id).await? {
    return Err(AppError::NotFound(format!("Game {} not found.", game_id)));
  }
  info!("Game deleted.");
  Ok(HttpResponse::Ok().json(json!({ "message": "Game deleted." })))
}
