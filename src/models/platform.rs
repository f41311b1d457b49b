// src/models/platform.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Platform {
  pub id: Uuid,
  pub name: String,
  pub description: String,
  pub release_date: NaiveDate,
  pub price_pence: i64,
  pub platform_developer: String,
  pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlatform {
  pub name: String,
  pub description: String,
  pub release_date: NaiveDate,
  pub price_pence: i64,
  pub platform_developer: String,
  pub image_url: String,
}
