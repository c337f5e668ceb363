// src/handlers/mod.rs

pub mod health;
pub mod items;

pub use health::health_check;
pub use items::{create_item, list_items, Item};
