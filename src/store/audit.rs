//! Append-only audit trail on the `audit_log` table
//!
//! Entries are written after a business mutation has already committed and
//! are never updated or deleted; an entry outlives the record it references.

use chrono::Utc;
use serde_json::Value;

use crate::error::Result;
use crate::types::{AuditAction, AuditEntry};

use super::Store;

impl Store {
    /// Append one audit entry. Fails only on infrastructure error.
    pub async fn append_audit(
        &self,
        action: AuditAction,
        table_name: &str,
        record_id: Option<i64>,
        details: &Value,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO audit_log (action, table_name, record_id, details, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(action.as_str())
        .bind(table_name)
        .bind(record_id)
        .bind(details.to_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Most recent entries, newest first. Caller-supplied limits are
    /// trusted; no upper bound is enforced.
    pub async fn recent_audit_entries(&self, limit: i64) -> Result<Vec<AuditEntry>> {
        let entries = sqlx::query_as::<_, AuditEntry>(
            "SELECT * FROM audit_log ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    /// Total number of audit rows, reported by the metrics snapshot
    pub async fn audit_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM audit_log")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
