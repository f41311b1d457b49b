// src/services/auth.rs

//! Password hashing and verification built on Argon2.

use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use tracing::{debug, error, instrument};

use crate::errors::AppError;

/// Hashes a plain-text password using Argon2 with a fresh random salt.
#[instrument(name = "auth::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  match Argon2::default().hash_password(password.as_bytes(), &salt) {
    Ok(hash) => Ok(hash.to_string()),
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      Err(AppError::Internal(format!("Password hashing failed: {}", argon_err)))
    }
  }
}

/// Verifies a plain-text password against a stored Argon2 hash.
///
/// Returns `Ok(false)` for a well-formed hash that simply does not match;
/// a malformed stored hash is an internal error, not an auth failure.
#[instrument(name = "auth::verify_password", skip_all, err(Display))]
pub fn verify_password(stored_hash: &str, provided_password: &str) -> Result<bool, AppError> {
  if stored_hash.is_empty() || provided_password.is_empty() {
    debug!("Password verification skipped: empty hash or password.");
    return Ok(false);
  }

  let parsed_hash = PasswordHash::new(stored_hash).map_err(|parse_err| {
    error!(error = %parse_err, "Failed to parse stored password hash.");
    AppError::Internal(format!("Invalid stored password hash: {}", parse_err))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => Ok(false),
    Err(other_err) => {
      error!(error = %other_err, "Argon2 password verification errored.");
      Err(AppError::Internal(format!("Password verification failed: {}", other_err)))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hash_then_verify_round_trip() {
    let hash = hash_password("correct horse battery staple").unwrap();
    assert!(verify_password(&hash, "correct horse battery staple").unwrap());
    assert!(!verify_password(&hash, "wrong password").unwrap());
  }

  #[test]
  fn empty_password_is_rejected() {
    assert!(matches!(hash_password(""), Err(AppError::Validation(_))));
  }
}
