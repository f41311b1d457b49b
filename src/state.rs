// src/state.rs

use crate::config::AppConfig;
use crate::db::StoreDb;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub db: Arc<dyn StoreDb>,
  pub config: Arc<AppConfig>,
}
