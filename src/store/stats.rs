//! Aggregation over current record store state
//!
//! Every call recomputes fresh from the table; no caching or incremental
//! maintenance. The dataset is small and results must always reflect the
//! latest committed state.

use crate::error::Result;
use crate::types::{CategoryBreakdown, InventoryStats};

use super::Store;

/// An item counts as low-stock when its quantity is below this threshold
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

impl Store {
    /// Sum of `quantity * price` over all items, 0 when the store is empty
    pub async fn total_value(&self) -> Result<f64> {
        let value = sqlx::query_scalar(
            "SELECT COALESCE(SUM(quantity * price), 0.0) FROM inventory_items",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(value)
    }

    /// Number of distinct non-null categories
    pub async fn distinct_category_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(DISTINCT category) FROM inventory_items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Number of items with quantity below `threshold`
    pub async fn low_stock_count(&self, threshold: i64) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_items WHERE quantity < ?")
            .bind(threshold)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Per-category count and value, sorted descending by value. Items
    /// without a category group under a null key.
    pub async fn by_category(&self) -> Result<Vec<CategoryBreakdown>> {
        let rows = sqlx::query_as::<_, CategoryBreakdown>(
            "SELECT category, COUNT(*) AS count, SUM(quantity * price) AS value \
             FROM inventory_items GROUP BY category ORDER BY value DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Composite statistics payload for the stats endpoint
    pub async fn inventory_stats(&self) -> Result<InventoryStats> {
        Ok(InventoryStats {
            total_items: self.count_items().await?,
            total_value: self.total_value().await?,
            categories: self.distinct_category_count().await?,
            low_stock_items: self.low_stock_count(DEFAULT_LOW_STOCK_THRESHOLD).await?,
            by_category: self.by_category().await?,
        })
    }
}
