// src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{auth_handlers, cart_handlers, catalog_handlers, game_handlers, order_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` to register every route on the Actix app.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      // Authentication and accounts
      .service(
        web::scope("/auth")
          .route("/register", web::post().to(auth_handlers::register_handler))
          .route("/login", web::post().to(auth_handlers::login_handler))
          .route("/logout", web::post().to(auth_handlers::logout_handler))
          .route("/me", web::get().to(auth_handlers::me_handler))
          .route("/users", web::get().to(auth_handlers::list_users_handler)),
      )
      // Storefront catalog
      .service(
        web::scope("/games")
          .route("", web::get().to(game_handlers::list_games_handler))
          .route("", web::post().to(game_handlers::create_game_handler))
          .route("/dropdowns", web::get().to(game_handlers::dropdown_values_handler))
          .route("/{game_id}", web::get().to(game_handlers::get_game_handler))
          .route("/{game_id}", web::put().to(game_handlers::update_game_handler))
          .route("/{game_id}", web::delete().to(game_handlers::delete_game_handler)),
      )
      // Lookup entities
      .service(
        web::scope("/developers")
          .route("", web::get().to(catalog_handlers::list_developers_handler))
          .route("", web::post().to(catalog_handlers::create_developer_handler))
          .route("/{id}", web::get().to(catalog_handlers::get_developer_handler))
          .route("/{id}", web::put().to(catalog_handlers::update_developer_handler))
          .route("/{id}", web::delete().to(catalog_handlers::delete_developer_handler)),
      )
      .service(
        web::scope("/publishers")
          .route("", web::get().to(catalog_handlers::list_publishers_handler))
          .route("", web::post().to(catalog_handlers::create_publisher_handler))
          .route("/{id}", web::get().to(catalog_handlers::get_publisher_handler))
          .route("/{id}", web::put().to(catalog_handlers::update_publisher_handler))
          .route("/{id}", web::delete().to(catalog_handlers::delete_publisher_handler)),
      )
      .service(
        web::scope("/ratings")
          .route("", web::get().to(catalog_handlers::list_ratings_handler))
          .route("", web::post().to(catalog_handlers::create_rating_handler))
          .route("/{id}", web::get().to(catalog_handlers::get_rating_handler))
          .route("/{id}", web::put().to(catalog_handlers::update_rating_handler))
          .route("/{id}", web::delete().to(catalog_handlers::delete_rating_handler)),
      )
      .service(
        web::scope("/platforms")
          .route("", web::get().to(catalog_handlers::list_platforms_handler))
          .route("", web::post().to(catalog_handlers::create_platform_handler))
          .route("/{id}", web::get().to(catalog_handlers::get_platform_handler))
          .route("/{id}", web::put().to(catalog_handlers::update_platform_handler))
          .route("/{id}", web::delete().to(catalog_handlers::delete_platform_handler)),
      )
      .service(
        web::scope("/voice-actors")
          .route("", web::get().to(catalog_handlers::list_voice_actors_handler))
          .route("", web::post().to(catalog_handlers::create_voice_actor_handler))
          .route("/{id}", web::get().to(catalog_handlers::get_voice_actor_handler))
          .route("/{id}", web::put().to(catalog_handlers::update_voice_actor_handler))
          .route("/{id}", web::delete().to(catalog_handlers::delete_voice_actor_handler)),
      )
      // Shopping cart
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::view_cart_handler))
          .route("/add/{game_id}", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/remove/{game_id}", web::post().to(cart_handlers::remove_from_cart_handler)),
      )
      // Orders
      .service(
        web::scope("/orders")
          .route("", web::get().to(order_handlers::list_orders_handler))
          .route("/checkout", web::post().to(order_handlers::checkout_handler)),
      ),
  );
}
