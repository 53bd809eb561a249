//! Inventory item types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{Error, Result};

/// A stored inventory line item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Surrogate id, assigned by the store on creation
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    /// Monetary value with 2-digit fractional precision
    pub price: f64,
    pub category: Option<String>,
    /// Stock-keeping unit, unique across all items when present
    pub sku: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw request body for create/update calls.
///
/// All fields are optional at the deserialization layer so that missing
/// required fields surface as a 400 validation error with the uniform
/// envelope instead of a serde rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
}

/// A validated item payload ready for a store write (no id, no timestamps)
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub category: Option<String>,
    pub sku: Option<String>,
}

impl ItemInput {
    /// Check the required fields: `name` must be present and non-empty,
    /// `quantity` and `price` must be present. Sign is intentionally not
    /// checked here; the store schema carries the non-negative defaults.
    pub fn validate(self) -> Result<NewItem> {
        let name = self.name.filter(|n| !n.trim().is_empty());
        match (name, self.quantity, self.price) {
            (Some(name), Some(quantity), Some(price)) => Ok(NewItem {
                name,
                description: self.description,
                quantity,
                price,
                category: self.category,
                sku: self.sku,
            }),
            _ => Err(Error::Validation(
                "Name, quantity, and price are required".to_string(),
            )),
        }
    }
}
