// src/handlers/items.rs

use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Caller-supplied item: any JSON object, kept in its original key order.
pub type Item = Map<String, Value>;

const PLACEHOLDER_ITEMS: [&str; 3] = ["item1", "item2", "item3"];

#[derive(Debug, Serialize, PartialEq)]
pub struct ItemList {
    pub items: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ItemCreated {
    pub message: String,
    pub item: Item,
}

/// `GET /items`
pub async fn list_items() -> Json<ItemList> {
    Json(ItemList {
        items: PLACEHOLDER_ITEMS.iter().map(|s| s.to_string()).collect(),
    })
}

/// `POST /items`
///
/// Echoes the object back. Bodies that are not a JSON object are rejected by
/// the `Json` extractor before this runs.
pub async fn create_item(Json(item): Json<Item>) -> Json<ItemCreated> {
    debug!(item.fields = item.len(), "Item received");
    Json(ItemCreated {
        message: "Item created".to_string(),
        item,
    })
}
