//! Runtime configuration loaded from environment variables
//!
//! Mirrors the deployment surface of the platform: database connection,
//! listen port, connection pool sizing, and the deployment labels reported
//! by the operational metrics endpoint.

use std::env;

use chrono::Utc;

/// Server configuration, populated once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port (`PORT`, default 5000)
    pub port: u16,
    /// SQLite connection URL (`DATABASE_URL`, default `sqlite:inventory.db`)
    pub database_url: String,
    /// Connection pool size (`DB_POOL_SIZE`, default 10)
    pub max_connections: u32,
    /// Application version label (`APP_VERSION`)
    pub app_version: String,
    /// Deployment environment label (`DEPLOYMENT_ENV`)
    pub deployment_env: String,
    /// Deployment date label (`DEPLOYMENT_DATE`)
    pub deployment_date: String,
    /// Git commit label (`GIT_COMMIT`)
    pub git_commit: String,
    /// Deployer label (`DEPLOYED_BY`)
    pub deployed_by: String,
}

impl Config {
    /// Load configuration from the environment, falling back to local
    /// development defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup. `from_env`
    /// delegates here; tests supply their own lookup instead of mutating
    /// process-global state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(5000),
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:inventory.db".to_string()),
            max_connections: lookup("DB_POOL_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            app_version: lookup("APP_VERSION").unwrap_or_else(|| "1.0.0".to_string()),
            deployment_env: lookup("DEPLOYMENT_ENV").unwrap_or_else(|| "local".to_string()),
            deployment_date: lookup("DEPLOYMENT_DATE")
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
            git_commit: lookup("GIT_COMMIT").unwrap_or_else(|| "local-dev".to_string()),
            deployed_by: lookup("DEPLOYED_BY").unwrap_or_else(|| "developer".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
