//! Data types for the inventory platform
//!
//! Wire names are camelCase (the JSON surface consumed by the dashboard
//! front end); database columns stay snake_case.

mod audit;
mod item;
mod stats;

pub use audit::{AuditAction, AuditEntry};
pub use item::{InventoryItem, ItemInput, NewItem};
pub use stats::{CategoryBreakdown, InventoryStats};
