// src/web/handlers/catalog_handlers.rs

//! CRUD for the catalog's lookup entities: developers, publishers,
//! ratings, platforms and voice actors. Reads are public, mutations are
//! admin-only.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::LookupStore;
use crate::errors::AppError;
use crate::models::{NewGameDeveloper, NewGamePublisher, NewGameRating, NewPlatform, NewVoiceActor};
use crate::state::AppState;
use crate::web::session::AdminUser;

fn require_name(name: &str, what: &str) -> Result<(), AppError> {
  if name.trim().is_empty() {
    return Err(AppError::Validation(format!("{} name is required.", what)));
  }
  Ok(())
}

// --- Developers ---

#[instrument(name = "handler::list_developers", skip(app_state))]
pub async fn list_developers_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(&app_state.db.developers().await?))
}

#[instrument(name = "handler::get_developer", skip(app_state, path), fields(developer_id = %path.as_ref()))]
pub async fn get_developer_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let developer = app_state
    .db
    .developer_by_id(id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Developer {} not found.", id)))?;
  Ok(HttpResponse::Ok().json(&developer))
}

#[instrument(name = "handler::create_developer", skip(app_state, admin, payload), fields(admin_id = %admin.0.id))]
pub async fn create_developer_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  payload: web::Json<NewGameDeveloper>,
) -> Result<HttpResponse, AppError> {
  require_name(&payload.name, "Developer")?;
  let developer = app_state.db.insert_developer(&payload).await?;
  info!(developer_id = %developer.id, "Developer created.");
  Ok(HttpResponse::Created().json(&developer))
}

#[instrument(name = "handler::update_developer", skip(app_state, admin, path, payload), fields(admin_id = %admin.0.id, developer_id = %path.as_ref()))]
pub async fn update_developer_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
  payload: web::Json<NewGameDeveloper>,
) -> Result<HttpResponse, AppError> {
  require_name(&payload.name, "Developer")?;
  let id = path.into_inner();
  let developer = app_state
    .db
    .update_developer(id, &payload)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Developer {} not found.", id)))?;
  Ok(HttpResponse::Ok().json(&developer))
}

#[instrument(name = "handler::delete_developer", skip(app_state, admin, path), fields(admin_id = %admin.0.id, developer_id = %path.as_ref()))]
pub async fn delete_developer_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  if !app_state.db.delete_developer(id).await? {
    return Err(AppError::NotFound(format!("Developer {} not found.", id)));
  }
  Ok(HttpResponse::Ok().json(json!({ "message": "Developer deleted." })))
}

// --- Publishers ---

#[instrument(name = "handler::list_publishers", skip(app_state))]
pub async fn list_publishers_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(&app_state.db.publishers().await?))
}

#[instrument(name = "handler::get_publisher", skip(app_state, path), fields(publisher_id = %path.as_ref()))]
pub async fn get_publisher_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let publisher = app_state
    .db
    .publisher_by_id(id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Publisher {} not found.", id)))?;
  Ok(HttpResponse::Ok().json(&publisher))
}

#[instrument(name = "handler::create_publisher", skip(app_state, admin, payload), fields(admin_id = %admin.0.id))]
pub async fn create_publisher_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  payload: web::Json<NewGamePublisher>,
) -> Result<HttpResponse, AppError> {
  require_name(&payload.name, "Publisher")?;
  let publisher = app_state.db.insert_publisher(&payload).await?;
  info!(publisher_id = %publisher.id, "Publisher created.");
  Ok(HttpResponse::Created().json(&publisher))
}

#[instrument(name = "handler::update_publisher", skip(app_state, admin, path, payload), fields(admin_id = %admin.0.id, publisher_id = %path.as_ref()))]
pub async fn update_publisher_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
  payload: web::Json<NewGamePublisher>,
) -> Result<HttpResponse, AppError> {
  require_name(&payload.name, "Publisher")?;
  let id = path.into_inner();
  let publisher = app_state
    .db
    .update_publisher(id, &payload)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Publisher {} not found.", id)))?;
  Ok(HttpResponse::Ok().json(&publisher))
}

#[instrument(name = "handler::delete_publisher", skip(app_state, admin, path), fields(admin_id = %admin.0.id, publisher_id = %path.as_ref()))]
pub async fn delete_publisher_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  if !app_state.db.delete_publisher(id).await? {
    return Err(AppError::NotFound(format!("Publisher {} not found.", id)));
  }
  Ok(HttpResponse::Ok().json(json!({ "message": "Publisher deleted." })))
}

// --- Ratings ---

#[instrument(name = "handler::list_ratings", skip(app_state))]
pub async fn list_ratings_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(&app_state.db.ratings().await?))
}

#[instrument(name = "handler::get_rating", skip(app_state, path), fields(rating_id = %path.as_ref()))]
pub async fn get_rating_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let rating = app_state
    .db
    .rating_by_id(id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Rating {} not found.", id)))?;
  Ok(HttpResponse::Ok().json(&rating))
}

#[instrument(name = "handler::create_rating", skip(app_state, admin, payload), fields(admin_id = %admin.0.id))]
pub async fn create_rating_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  payload: web::Json<NewGameRating>,
) -> Result<HttpResponse, AppError> {
  require_name(&payload.name, "Rating")?;
  let rating = app_state.db.insert_rating(&payload).await?;
  info!(rating_id = %rating.id, "Rating created.");
  Ok(HttpResponse::Created().json(&rating))
}

#[instrument(name = "handler::update_rating", skip(app_state, admin, path, payload), fields(admin_id = %admin.0.id, rating_id = %path.as_ref()))]
pub async fn update_rating_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
  payload: web::Json<NewGameRating>,
) -> Result<HttpResponse, AppError> {
  require_name(&payload.name, "Rating")?;
  let id = path.into_inner();
  let rating = app_state
    .db
    .update_rating(id, &payload)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Rating {} not found.", id)))?;
  Ok(HttpResponse::Ok().json(&rating))
}

#[instrument(name = "handler::delete_rating", skip(app_state, admin, path), fields(admin_id = %admin.0.id, rating_id = %path.as_ref()))]
pub async fn delete_rating_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  if !app_state.db.delete_rating(id).await? {
    return Err(AppError::NotFound(format!("Rating {} not found.", id)));
  }
  Ok(HttpResponse::Ok().json(json!({ "message": "Rating deleted." })))
}

// --- Platforms ---

#[instrument(name = "handler::list_platforms", skip(app_state))]
pub async fn list_platforms_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(&app_state.db.platforms().await?))
}

#[instrument(name = "handler::get_platform", skip(app_state, path), fields(platform_id = %path.as_ref()))]
pub async fn get_platform_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let platform = app_state
    .db
    .platform_by_id(id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Platform {} not found.", id)))?;
  Ok(HttpResponse::Ok().json(&platform))
}

fn validate_platform(new: &NewPlatform) -> Result<(), AppError> {
  require_name(&new.name, "Platform")?;
  if new.price_pence < 0 {
    return Err(AppError::Validation("Price cannot be negative.".to_string()));
  }
  Ok(())
}

#[instrument(name = "handler::create_platform", skip(app_state, admin, payload), fields(admin_id = %admin.0.id))]
pub async fn create_platform_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  payload: web::Json<NewPlatform>,
) -> Result<HttpResponse, AppError> {
  validate_platform(&payload)?;
  let platform = app_state.db.insert_platform(&payload).await?;
  info!(platform_id = %platform.id, "Platform created.");
  Ok(HttpResponse::Created().json(&platform))
}

#[instrument(name = "handler::update_platform", skip(app_state, admin, path, payload), fields(admin_id = %admin.0.id, platform_id = %path.as_ref()))]
pub async fn update_platform_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
  payload: web::Json<NewPlatform>,
) -> Result<HttpResponse, AppError> {
  validate_platform(&payload)?;
  let id = path.into_inner();
  let platform = app_state
    .db
    .update_platform(id, &payload)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Platform {} not found.", id)))?;
  Ok(HttpResponse::Ok().json(&platform))
}

#[instrument(name = "handler::delete_platform", skip(app_state, admin, path), fields(admin_id = %admin.0.id, platform_id = %path.as_ref()))]
pub async fn delete_platform_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  if !app_state.db.delete_platform(id).await? {
    return Err(AppError::NotFound(format!("Platform {} not found.", id)));
  }
  Ok(HttpResponse::Ok().json(json!({ "message": "Platform deleted." })))
}

// --- Voice actors ---

#[instrument(name = "handler::list_voice_actors", skip(app_state))]
pub async fn list_voice_actors_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(&app_state.db.voice_actors().await?))
}

#[instrument(name = "handler::get_voice_actor", skip(app_state, path), fields(voice_actor_id = %path.as_ref()))]
pub async fn get_voice_actor_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let voice_actor = app_state
    .db
    .voice_actor_by_id(id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Voice actor {} not found.", id)))?;
  Ok(HttpResponse::Ok().json(&voice_actor))
}

#[instrument(name = "handler::create_voice_actor", skip(app_state, admin, payload), fields(admin_id = %admin.0.id))]
pub async fn create_voice_actor_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  payload: web::Json<NewVoiceActor>,
) -> Result<HttpResponse, AppError> {
  require_name(&payload.full_name, "Voice actor")?;
  let voice_actor = app_state.db.insert_voice_actor(&payload).await?;
  info!(voice_actor_id = %voice_actor.id, "Voice actor created.");
  Ok(HttpResponse::Created().json(&voice_actor))
}

#[instrument(name = "handler::update_voice_actor", skip(app_state, admin, path, payload), fields(admin_id = %admin.0.id, voice_actor_id = %path.as_ref()))]
pub async fn update_voice_actor_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
  payload: web::Json<NewVoiceActor>,
) -> Result<HttpResponse, AppError> {
  require_name(&payload.full_name, "Voice actor")?;
  let id = path.into_inner();
  let voice_actor = app_state
    .db
    .update_voice_actor(id, &payload)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Voice actor {} not found.", id)))?;
  Ok(HttpResponse::Ok().json(&voice_actor))
}

#[instrument(name = "handler::delete_voice_actor", skip(app_state, admin, path), fields(admin_id = %admin.0.id, voice_actor_id = %path.as_ref()))]
pub async fn delete_voice_actor_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  if !app_state.db.delete_voice_actor(id).await? {
    return Err(AppError::NotFound(format!("Voice actor {} not found.", id)));
  }
  Ok(HttpResponse::Ok().json(json!({ "message": "Voice actor deleted." })))
}
