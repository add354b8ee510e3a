use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repository::Entity;

use super::wire_timestamp;

/// Stored shape: price is exact fixed-point (hundredths), timestamps
/// are microseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub description: Option<String>,
    pub inventory_code: String,
    pub price_cents: i64,
    pub location: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Entity for InventoryItem {
    const COLLECTION: &'static str = "inventory";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn set_timestamps(&mut self, at: i64) {
        self.created_at = at;
        self.updated_at = at;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicInventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub description: Option<String>,
    pub inventory_code: String,
    pub price: f64,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InventoryItem> for PublicInventoryItem {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            description: item.description,
            inventory_code: item.inventory_code,
            price: from_cents(item.price_cents),
            location: item.location,
            created_at: wire_timestamp(item.created_at),
            updated_at: wire_timestamp(item.updated_at),
        }
    }
}

/// Rounds half away from zero, so anything past two decimals is
/// settled before it reaches storage.
pub fn to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}
