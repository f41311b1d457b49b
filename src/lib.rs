// src/lib.rs

//! Backend for an online video-game store: a public catalog with search
//! and pagination, admin CRUD over the catalog, session-backed shopping
//! carts and order placement with per-user history.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
