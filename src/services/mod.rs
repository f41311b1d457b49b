// src/services/mod.rs

pub mod auth;
pub mod cart;
pub mod orders;

pub use cart::ShoppingCart;
pub use orders::OrdersService;
