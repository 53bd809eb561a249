//! Error taxonomy for the inventory platform
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are
//! converted to the uniform `{success: false, error}` envelope at the HTTP
//! boundary (see `api::rest`).

use thiserror::Error;

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the store, service, and API layers
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed input field (maps to 400)
    #[error("{0}")]
    Validation(String),

    /// Requested record does not exist (maps to 404)
    #[error("Item not found")]
    NotFound,

    /// Unique constraint violation on the sku column (maps to 400)
    #[error("SKU already exists")]
    DuplicateSku,

    /// Underlying storage failure (maps to 500)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl Error {
    /// Classify a raw sqlx error from an item write, mapping a unique
    /// constraint violation (the sku column is the only one) to
    /// [`Error::DuplicateSku`].
    pub fn from_item_write(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Error::DuplicateSku,
            _ => Error::Database(err),
        }
    }
}
