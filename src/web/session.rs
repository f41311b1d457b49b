// src/web/session.rs

//! Session-backed identity and cart token plumbing.

use actix_session::{Session, SessionExt};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::UserRole;

const CART_SESSION_KEY: &str = "cart_id";
const USER_SESSION_KEY: &str = "user";

/// Returns the session's cart token, minting one on first use. The token
/// is opaque; nothing about the visitor can be derived from it.
pub fn cart_token(session: &Session) -> Result<String> {
  if let Some(token) = session.get::<String>(CART_SESSION_KEY)? {
    return Ok(token);
  }
  let token = Uuid::new_v4().to_string();
  session.insert(CART_SESSION_KEY, &token)?;
  tracing::debug!(cart_id = %token, "Minted new cart token.");
  Ok(token)
}

/// The signed-in user, as stored in the session at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
  pub id: Uuid,
  pub email: String,
  pub role: UserRole,
}

impl CurrentUser {
  pub fn store(&self, session: &Session) -> Result<()> {
    session.insert(USER_SESSION_KEY, self)?;
    Ok(())
  }

  pub fn forget(session: &Session) {
    session.remove(USER_SESSION_KEY);
  }
}

impl FromRequest for CurrentUser {
  type Error = AppError;
  type Future = Ready<Result<Self>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let session = req.get_session();
    let result = match session.get::<CurrentUser>(USER_SESSION_KEY) {
      Ok(Some(user)) => Ok(user),
      Ok(None) => Err(AppError::Auth("You must be signed in.".to_string())),
      Err(err) => Err(AppError::Internal(format!("Session read failed: {}", err))),
    };
    ready(result)
  }
}

/// Extractor that additionally requires the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl FromRequest for AdminUser {
  type Error = AppError;
  type Future = Ready<Result<Self>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let session = req.get_session();
    let result = match session.get::<CurrentUser>(USER_SESSION_KEY) {
      Ok(Some(user)) if user.role.is_admin() => Ok(AdminUser(user)),
      Ok(Some(_)) => Err(AppError::Forbidden("This action requires the admin role.".to_string())),
      Ok(None) => Err(AppError::Auth("You must be signed in.".to_string())),
      Err(err) => Err(AppError::Internal(format!("Session read failed: {}", err))),
    };
    ready(result)
  }
}
