// src/web/handlers/auth_handlers.rs

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::db::UserStore;
use crate::errors::AppError;
use crate::models::{NewUser, UserRole};
use crate::services::auth;
use crate::state::AppState;
use crate::web::session::{AdminUser, CurrentUser};

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct RegisterPayload {
  pub email: String,
  pub password: String,
  pub first_name: String,
  pub last_name: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginPayload {
  pub email: String,
  pub password: String,
}

fn validate_email(email: &str) -> Result<(), AppError> {
  let trimmed = email.trim();
  if trimmed.is_empty() || !trimmed.contains('@') {
    return Err(AppError::Validation("A valid email address is required.".to_string()));
  }
  Ok(())
}

// --- Handler Implementations ---

#[instrument(name = "handler::register", skip(app_state, payload), fields(req_email = %payload.email))]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<RegisterPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Registration attempt.");
  validate_email(&payload.email)?;
  if payload.password.len() < 8 {
    return Err(AppError::Validation(
      "Password must be at least 8 characters long.".to_string(),
    ));
  }

  let email = payload.email.trim().to_lowercase();
  if app_state.db.user_by_email(&email).await?.is_some() {
    warn!("Registration rejected: email already in use.");
    return Err(AppError::Validation("That email address is already in use.".to_string()));
  }

  let user = app_state
    .db
    .insert_user(&NewUser {
      email,
      password_hash: auth::hash_password(&payload.password)?,
      first_name: payload.first_name.trim().to_string(),
      last_name: payload.last_name.trim().to_string(),
      // Self-service registration never grants admin.
      role: UserRole::User,
    })
    .await?;

  info!(user_id = %user.id, "Registration successful.");
  Ok(HttpResponse::Created().json(&user))
}

#[instrument(name = "handler::login", skip(app_state, payload, session), fields(req_email = %payload.email))]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<LoginPayload>,
  session: Session,
) -> Result<HttpResponse, AppError> {
  info!("Login attempt.");

  // The response is identical for an unknown email and a wrong password.
  let rejection = || AppError::Auth("Email or password is incorrect.".to_string());

  let user = app_state
    .db
    .user_by_email(payload.email.trim().to_lowercase().as_str())
    .await?
    .ok_or_else(|| {
      warn!("Login failed: unknown email.");
      rejection()
    })?;

  if !auth::verify_password(&user.password_hash, &payload.password)? {
    warn!(user_id = %user.id, "Login failed: wrong password.");
    return Err(rejection());
  }

  let current = CurrentUser {
    id: user.id,
    email: user.email.clone(),
    role: user.role,
  };
  current.store(&session)?;

  info!(user_id = %user.id, role = ?user.role, "Login successful.");
  Ok(HttpResponse::Ok().json(&user))
}

#[instrument(name = "handler::logout", skip(session))]
pub async fn logout_handler(session: Session) -> Result<HttpResponse, AppError> {
  CurrentUser::forget(&session);
  info!("User signed out.");
  Ok(HttpResponse::Ok().json(json!({ "message": "Signed out." })))
}

#[instrument(name = "handler::me", skip(app_state, current), fields(user_id = %current.id))]
pub async fn me_handler(
  app_state: web::Data<AppState>,
  current: CurrentUser,
) -> Result<HttpResponse, AppError> {
  let user = app_state
    .db
    .user_by_id(current.id)
    .await?
    .ok_or_else(|| AppError::Auth("Your account no longer exists.".to_string()))?;
  Ok(HttpResponse::Ok().json(&user))
}

#[instrument(name = "handler::list_users", skip(app_state, admin), fields(admin_id = %admin.0.id))]
pub async fn list_users_handler(
  app_state: web::Data<AppState>,
  admin: AdminUser,
) -> Result<HttpResponse, AppError> {
  let users = app_state.db.all_users().await?;
  Ok(HttpResponse::Ok().json(&users))
}
