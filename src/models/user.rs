// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType};
use uuid::Uuid;

/// Account roles. Kept as a typed enum so authorisation is a capability
/// check rather than a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "user_role_enum", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
  Admin,
  User,
}

impl UserRole {
  pub fn is_admin(self) -> bool {
    matches!(self, UserRole::Admin)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoreUser {
  pub id: Uuid,
  pub email: String,
  #[serde(skip_serializing)] // Never send password hashes to clients
  pub password_hash: String,
  pub first_name: String,
  pub last_name: String,
  pub role: UserRole,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
  pub email: String,
  pub password_hash: String,
  pub first_name: String,
  pub last_name: String,
  pub role: UserRole,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_admin_has_the_admin_capability() {
    assert!(UserRole::Admin.is_admin());
    assert!(!UserRole::User.is_admin());
  }
}
