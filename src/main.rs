// src/main.rs

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, web, App, HttpServer};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use game_store_app::config::AppConfig;
use game_store_app::db::{seed, MemStoreDb, PgStoreDb, StoreDb};
use game_store_app::state::AppState;
use game_store_app::web::routes::configure_app_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting game store server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let db: Arc<dyn StoreDb> = match &app_config.database_url {
    Some(database_url) => {
      let store = match PgStoreDb::connect(database_url).await {
        Ok(store) => store,
        Err(e) => {
          tracing::error!(error = %e, "Failed to connect to the database.");
          panic!("Database connection error: {}", e);
        }
      };
      if let Err(e) = store.init_schema().await {
        tracing::error!(error = %e, "Failed to initialize the database schema.");
        panic!("Schema initialization error: {}", e);
      }
      tracing::info!("Connected to Postgres.");
      Arc::new(store)
    }
    None => {
      tracing::warn!("DATABASE_URL is not set; using the in-memory store. Data will not survive a restart.");
      Arc::new(MemStoreDb::new())
    }
  };

  if app_config.seed_db {
    if let Err(e) = seed::seed(db.as_ref()).await {
      tracing::error!(error = %e, "Failed to seed the store.");
    }
  }

  // A fixed SESSION_KEY keeps sessions valid across restarts; without one
  // every restart signs cookies with a fresh key.
  let session_key = match &app_config.session_key {
    Some(secret) => Key::derive_from(secret.as_bytes()),
    None => {
      tracing::warn!("SESSION_KEY is not set; sessions will not survive a server restart.");
      Key::generate()
    }
  };
  let cookie_secure = app_config.cookie_secure;

  let app_state = AppState {
    db,
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Binding server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone()))
      .wrap(
        SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
          .cookie_name("game_store_session".to_string())
          .cookie_http_only(true)
          .cookie_secure(cookie_secure)
          .build(),
      )
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
