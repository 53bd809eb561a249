//! CloudOps Inventory Platform
//!
//! A relational-database-backed CRUD API for cloud-resource line items with
//! an append-only audit trail, on-demand aggregation, and an operational
//! health/metrics surface.
//!
//! # Modules
//!
//! - `types`: core data structures (InventoryItem, AuditEntry, stats)
//! - `store`: SQLite-backed record store, audit trail, and aggregation
//! - `service`: orchestration of the mutate-then-audit sequence
//! - `metrics`: process-local request counters and the metrics snapshot
//! - `api`: Axum router and REST handlers
//! - `config`: environment-driven configuration
//! - `error`: error taxonomy mapped to HTTP statuses
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cloudops_inventory::api::http::{create_router, AppState};
//! use cloudops_inventory::config::Config;
//! use cloudops_inventory::service::InventoryService;
//! use cloudops_inventory::store::Store;
//!
//! # async fn run() -> cloudops_inventory::error::Result<()> {
//! let config = Config::from_env();
//! let store = Store::connect(&config.database_url, config.max_connections).await?;
//! let service = InventoryService::new(store);
//! let app = create_router(Arc::new(AppState::new(service, config)));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{Error, Result};
pub use service::InventoryService;
pub use store::Store;
pub use types::{AuditAction, AuditEntry, CategoryBreakdown, InventoryItem, InventoryStats, ItemInput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
