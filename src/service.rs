//! Inventory service: orchestrates validation, store mutations, and the
//! audit trail
//!
//! Every write follows the same two-step sequence: mutate the record store,
//! then append one audit entry. The sequence is deliberately not
//! transactional: if the audit append fails after the mutation committed,
//! the mutation stands and the gap is logged as an anomaly. Failed
//! mutations append nothing.

use serde_json::json;

use crate::error::Result;
use crate::store::Store;
use crate::types::{AuditAction, AuditEntry, InventoryItem, InventoryStats, ItemInput};

/// Record collection name written into every audit entry
pub const AUDIT_TABLE: &str = "inventory_items";

/// Audit entries returned when the caller does not supply a limit
pub const DEFAULT_AUDIT_LIMIT: i64 = 20;

/// Orchestration layer over the record store and audit trail
#[derive(Clone)]
pub struct InventoryService {
    store: Store,
}

impl InventoryService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Direct store access for health probes and the metrics snapshot
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Validate and insert a new item, then audit the creation. A sku
    /// collision fails before any audit entry is written.
    pub async fn create(&self, input: ItemInput) -> Result<InventoryItem> {
        let item = input.validate()?;
        let created = self.store.insert_item(&item).await?;
        self.append_audit(
            AuditAction::Create,
            created.id,
            json!({
                "name": created.name,
                "quantity": created.quantity,
                "price": created.price,
            }),
        )
        .await;
        Ok(created)
    }

    /// Full-field replace of an existing item, then audit the update
    pub async fn update(&self, id: i64, input: ItemInput) -> Result<InventoryItem> {
        let item = input.validate()?;
        let updated = self.store.update_item(id, &item).await?;
        self.append_audit(
            AuditAction::Update,
            updated.id,
            json!({
                "name": updated.name,
                "quantity": updated.quantity,
                "price": updated.price,
            }),
        )
        .await;
        Ok(updated)
    }

    /// Remove an item, then audit the deletion with the deleted name
    pub async fn delete(&self, id: i64) -> Result<InventoryItem> {
        let deleted = self.store.delete_item(id).await?;
        self.append_audit(AuditAction::Delete, id, json!({ "deleted": deleted.name }))
            .await;
        Ok(deleted)
    }

    /// All items, ordered by category then name. Pure read, no audit.
    pub async fn list(&self) -> Result<Vec<InventoryItem>> {
        self.store.list_items().await
    }

    /// Single item by id. Pure read, no audit.
    pub async fn get(&self, id: i64) -> Result<InventoryItem> {
        self.store.get_item(id).await
    }

    /// Aggregate statistics over current state. Pure read, no audit.
    pub async fn stats(&self) -> Result<InventoryStats> {
        self.store.inventory_stats().await
    }

    /// Recent audit entries, newest first, defaulting to
    /// [`DEFAULT_AUDIT_LIMIT`]
    pub async fn recent_audit(&self, limit: Option<i64>) -> Result<Vec<AuditEntry>> {
        self.store
            .recent_audit_entries(limit.unwrap_or(DEFAULT_AUDIT_LIMIT))
            .await
    }

    /// Best-effort audit append, called only after the primary mutation has
    /// committed. A failure here must not fail the operation; it is logged
    /// and the primary result stands.
    async fn append_audit(&self, action: AuditAction, record_id: i64, details: serde_json::Value) {
        if let Err(err) = self
            .store
            .append_audit(action, AUDIT_TABLE, Some(record_id), &details)
            .await
        {
            tracing::error!(
                %action,
                record_id,
                error = %err,
                "audit append failed after committed mutation"
            );
        }
    }
}
