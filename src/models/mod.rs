// src/models/mod.rs

//! Contains data structures representing database entities and their
//! request/response companions.

pub mod cart_item;
pub mod developer;
pub mod game;
pub mod order;
pub mod order_item;
pub mod page;
pub mod platform;
pub mod publisher;
pub mod rating;
pub mod relations;
pub mod user;
pub mod voice_actor;

// Re-export the model structs for convenient access.
pub use cart_item::{CartItem, CartLine};
pub use developer::{GameDeveloper, NewGameDeveloper};
pub use game::{DropdownValues, Game, GameDetail, GameGenre, NewGame};
pub use order::{NewOrderItem, Order, OrderItemDetail, OrderWithItems};
pub use order_item::OrderItem;
pub use page::Page;
pub use platform::{NewPlatform, Platform};
pub use publisher::{GamePublisher, NewGamePublisher};
pub use rating::{GameRating, NewGameRating};
pub use relations::{GamePlatform, GameVoiceActor};
pub use user::{NewUser, StoreUser, UserRole};
pub use voice_actor::{NewVoiceActor, VoiceActor};
