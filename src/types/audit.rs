//! Audit trail types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Kind of mutation recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    /// Uppercase form stored in the `action` column and returned on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable row of the append-only audit log
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: i64,
    /// `CREATE`, `UPDATE`, or `DELETE`
    pub action: String,
    /// Affected record collection, `inventory_items` for this core
    pub table_name: String,
    pub record_id: Option<i64>,
    /// JSON snapshot of the relevant fields at the time of the action
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}
