//! Aggregate statistics types

use serde::Serialize;
use sqlx::FromRow;

/// Per-category slice of the inventory, sorted descending by value
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    /// Items without a category group under a null key
    pub category: Option<String>,
    pub count: i64,
    /// Sum of `quantity * price` within the category
    pub value: f64,
}

/// Derived statistics over the current record store state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_items: i64,
    /// Sum of `quantity * price` over all items, 0 when empty
    pub total_value: f64,
    /// Number of distinct non-null categories
    pub categories: i64,
    /// Items with quantity below the low-stock threshold
    pub low_stock_items: i64,
    pub by_category: Vec<CategoryBreakdown>,
}
