//! Record store operations on the `inventory_items` table

use chrono::Utc;

use crate::error::{Error, Result};
use crate::types::{InventoryItem, NewItem};

use super::Store;

impl Store {
    /// Insert a new item, assigning its id and timestamps. A sku collision
    /// surfaces as [`Error::DuplicateSku`] and leaves the table unchanged.
    pub async fn insert_item(&self, item: &NewItem) -> Result<InventoryItem> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO inventory_items \
             (name, description, quantity, price, category, sku, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.quantity)
        .bind(item.price)
        .bind(&item.category)
        .bind(&item.sku)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(Error::from_item_write)?;

        self.get_item(result.last_insert_rowid()).await
    }

    /// Fetch a single item by id
    pub async fn get_item(&self, id: i64) -> Result<InventoryItem> {
        sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory_items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(Error::NotFound)
    }

    /// All items, ordered by category then name
    pub async fn list_items(&self) -> Result<Vec<InventoryItem>> {
        let items =
            sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory_items ORDER BY category, name")
                .fetch_all(&self.pool)
                .await?;
        Ok(items)
    }

    /// Full-field replace of an existing item, refreshing `updated_at`.
    /// Absence is detected by the write itself (affected row count zero),
    /// not by a separate read.
    pub async fn update_item(&self, id: i64, item: &NewItem) -> Result<InventoryItem> {
        let result = sqlx::query(
            "UPDATE inventory_items \
             SET name = ?, description = ?, quantity = ?, price = ?, category = ?, sku = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.quantity)
        .bind(item.price)
        .bind(&item.category)
        .bind(&item.sku)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(Error::from_item_write)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }
        self.get_item(id).await
    }

    /// Delete an item, returning the pre-delete snapshot so the caller can
    /// audit-log it.
    pub async fn delete_item(&self, id: i64) -> Result<InventoryItem> {
        let existing = self.get_item(id).await?;
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        // A concurrent delete between the read and the write surfaces here
        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }
        Ok(existing)
    }

    /// Current number of items
    pub async fn count_items(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
