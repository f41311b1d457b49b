// tests/api_tests.rs

mod common;

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Cookie, Key};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use common::{insert_game, insert_lookups, insert_user, mem_db};
use game_store_app::config::AppConfig;
use game_store_app::models::UserRole;
use game_store_app::state::AppState;
use game_store_app::web::routes::configure_app_routes;

fn test_config() -> Arc<AppConfig> {
  Arc::new(AppConfig {
    server_host: "127.0.0.1".into(),
    server_port: 0,
    database_url: None,
    session_key: None,
    cookie_secure: false,
    seed_db: false,
  })
}

macro_rules! test_app {
  ($db:expr) => {{
    let state = AppState {
      db: $db,
      config: test_config(),
    };
    test::init_service(
      App::new()
        .app_data(web::Data::new(state))
        .wrap(
          SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
            .cookie_name("game_store_session".to_string())
            .cookie_secure(false)
            .build(),
        )
        .configure(configure_app_routes),
    )
    .await
  }};
}

/// Pulls the session cookie out of a response so it can be attached to
/// follow-up requests.
fn session_cookie<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<Cookie<'static>> {
  resp
    .response()
    .cookies()
    .find(|c| c.name() == "game_store_session")
    .map(|c| c.into_owned())
}

#[actix_web::test]
async fn health_check_responds_ok() {
  let app = test_app!(mem_db());
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn games_list_is_paginated() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  for i in 0..12 {
    insert_game(db.as_ref(), &lookups, &format!("Game {i:02}"), 1000).await;
  }

  let app = test_app!(db);
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/games").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["total_items"], 12);
  assert_eq!(body["total_pages"], 2);
  assert_eq!(body["items"].as_array().unwrap().len(), 9);
}

#[actix_web::test]
async fn admin_routes_reject_anonymous_and_non_admin_callers() {
  let db = mem_db();
  insert_user(db.as_ref(), "player@example.com", UserRole::User).await;
  let app = test_app!(db);

  // Anonymous callers get 401.
  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/api/v1/auth/users").to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

  // A signed-in non-admin gets 403.
  let login = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/auth/login")
      .set_json(json!({ "email": "player@example.com", "password": "test_password" }))
      .to_request(),
  )
  .await;
  assert_eq!(login.status(), StatusCode::OK);
  let cookie = session_cookie(&login).expect("login should set a session cookie");

  let resp = test::call_service(
    &app,
    test::TestRequest::get()
      .uri("/api/v1/auth/users")
      .cookie(cookie)
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn register_login_me_round_trip() {
  let app = test_app!(mem_db());

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/auth/register")
      .set_json(json!({
        "email": "new@example.com",
        "password": "a secure password",
        "first_name": "New",
        "last_name": "Player"
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  // Password hashes never leave the server.
  assert!(body.get("password_hash").is_none());
  assert_eq!(body["role"], "user");

  let login = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/auth/login")
      .set_json(json!({ "email": "new@example.com", "password": "a secure password" }))
      .to_request(),
  )
  .await;
  assert_eq!(login.status(), StatusCode::OK);
  let cookie = session_cookie(&login).expect("login should set a session cookie");

  let me = test::call_service(
    &app,
    test::TestRequest::get().uri("/api/v1/auth/me").cookie(cookie).to_request(),
  )
  .await;
  assert_eq!(me.status(), StatusCode::OK);
  let body: Value = test::read_body_json(me).await;
  assert_eq!(body["email"], "new@example.com");
}

#[actix_web::test]
async fn registering_an_existing_email_is_rejected() {
  let db = mem_db();
  insert_user(db.as_ref(), "taken@example.com", UserRole::User).await;
  let app = test_app!(db);

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/auth/register")
      .set_json(json!({
        "email": "taken@example.com",
        "password": "a secure password",
        "first_name": "Second",
        "last_name": "Comer"
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn login_failure_is_uniform_for_unknown_email_and_bad_password() {
  let db = mem_db();
  insert_user(db.as_ref(), "player@example.com", UserRole::User).await;
  let app = test_app!(db);

  let wrong_password = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/auth/login")
      .set_json(json!({ "email": "player@example.com", "password": "nope" }))
      .to_request(),
  )
  .await;
  assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
  let wrong_password_body: Value = test::read_body_json(wrong_password).await;

  let unknown_email = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/auth/login")
      .set_json(json!({ "email": "ghost@example.com", "password": "nope" }))
      .to_request(),
  )
  .await;
  assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
  let unknown_email_body: Value = test::read_body_json(unknown_email).await;

  assert_eq!(wrong_password_body, unknown_email_body);
}

#[actix_web::test]
async fn adding_an_unknown_game_to_the_cart_is_404() {
  let app = test_app!(mem_db());
  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri(&format!("/api/v1/cart/add/{}", uuid::Uuid::new_v4()))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn cart_contents_follow_the_session_cookie() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;
  let app = test_app!(db);

  let add = test::call_service(
    &app,
    test::TestRequest::post()
      .uri(&format!("/api/v1/cart/add/{}", game.id))
      .to_request(),
  )
  .await;
  assert_eq!(add.status(), StatusCode::OK);
  let cookie = session_cookie(&add).expect("cart add should set a session cookie");
  let body: Value = test::read_body_json(add).await;
  assert_eq!(body["total_pence"], 1999);

  // Same session sees the cart...
  let view = test::call_service(
    &app,
    test::TestRequest::get()
      .uri("/api/v1/cart")
      .cookie(cookie)
      .to_request(),
  )
  .await;
  let body: Value = test::read_body_json(view).await;
  assert_eq!(body["items"].as_array().unwrap().len(), 1);
  assert_eq!(body["total_pence"], 1999);

  // ...a fresh session sees an empty one.
  let view = test::call_service(&app, test::TestRequest::get().uri("/api/v1/cart").to_request()).await;
  let body: Value = test::read_body_json(view).await;
  assert!(body["items"].as_array().unwrap().is_empty());
  assert_eq!(body["total_pence"], 0);
}

#[actix_web::test]
async fn checkout_requires_a_signed_in_user() {
  let app = test_app!(mem_db());
  let resp = test::call_service(
    &app,
    test::TestRequest::post().uri("/api/v1/orders/checkout").to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn checkout_round_trip_over_http() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  let game = insert_game(db.as_ref(), &lookups, "Hades", 1999).await;
  insert_user(db.as_ref(), "buyer@example.com", UserRole::User).await;
  let app = test_app!(db);

  let login = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/auth/login")
      .set_json(json!({ "email": "buyer@example.com", "password": "test_password" }))
      .to_request(),
  )
  .await;
  let cookie = session_cookie(&login).expect("login should set a session cookie");

  let add = test::call_service(
    &app,
    test::TestRequest::post()
      .uri(&format!("/api/v1/cart/add/{}", game.id))
      .cookie(cookie.clone())
      .to_request(),
  )
  .await;
  assert_eq!(add.status(), StatusCode::OK);
  // The session may be re-signed when the cart token is minted.
  let cookie = session_cookie(&add).unwrap_or(cookie);

  let checkout = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/orders/checkout")
      .cookie(cookie.clone())
      .to_request(),
  )
  .await;
  assert_eq!(checkout.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(checkout).await;
  assert_eq!(body["item_count"], 1);

  let orders = test::call_service(
    &app,
    test::TestRequest::get()
      .uri("/api/v1/orders")
      .cookie(cookie.clone())
      .to_request(),
  )
  .await;
  let body: Value = test::read_body_json(orders).await;
  assert_eq!(body.as_array().unwrap().len(), 1);

  let cart = test::call_service(
    &app,
    test::TestRequest::get().uri("/api/v1/cart").cookie(cookie).to_request(),
  )
  .await;
  let body: Value = test::read_body_json(cart).await;
  assert!(body["items"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn game_search_filters_by_name() {
  let db = mem_db();
  let lookups = insert_lookups(db.as_ref()).await;
  insert_game(db.as_ref(), &lookups, "Elden Ring", 5999).await;
  insert_game(db.as_ref(), &lookups, "Stardew Valley", 1099).await;
  let app = test_app!(db);

  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/api/v1/games?search=elden").to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["total_items"], 1);
  assert_eq!(body["items"][0]["name"], "Elden Ring");
}
