//! Durable storage backed by SQLite
//!
//! The [`Store`] wraps a bounded connection pool and owns the two shared
//! mutable resources of the system: the `inventory_items` table (record
//! store) and the `audit_log` table (append-only audit trail). The service
//! layer holds no authoritative state of its own.
//!
//! Operations are split by concern:
//! - `items`: record store CRUD
//! - `audit`: append-only audit trail
//! - `stats`: on-demand aggregation over current state

mod audit;
mod items;
mod stats;

pub use stats::DEFAULT_LOW_STOCK_THRESHOLD;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::Result;

/// Seed catalog applied once to an empty store: the cloud resource line
/// items the dashboard starts from. (name, description, quantity, price,
/// category, sku)
const SEED_CATALOG: &[(&str, &str, i64, f64, &str, &str)] = &[
    ("EC2 t3.micro", "General purpose VM - 2 vCPU, 1GB RAM", 15, 8.50, "Compute", "AWS-EC2-T3MICRO"),
    ("EC2 t3.medium", "General purpose VM - 2 vCPU, 4GB RAM", 8, 33.41, "Compute", "AWS-EC2-T3MED"),
    ("EC2 m5.large", "Compute optimized VM - 2 vCPU, 8GB RAM", 5, 70.08, "Compute", "AWS-EC2-M5LRG"),
    ("RDS MySQL db.t3.micro", "Managed MySQL database", 4, 12.41, "Database", "AWS-RDS-MYSQL-MICRO"),
    ("RDS MySQL db.t3.small", "Managed MySQL Multi-AZ", 2, 48.00, "Database", "AWS-RDS-MYSQL-SMALL"),
    ("DynamoDB On-Demand", "NoSQL serverless database", 6, 25.00, "Database", "AWS-DYNAMO-OD"),
    ("S3 Standard 100GB", "Object storage", 20, 2.30, "Storage", "AWS-S3-STD-100"),
    ("S3 Standard 500GB", "Object storage", 10, 11.50, "Storage", "AWS-S3-STD-500"),
    ("EBS gp3 100GB", "Block storage SSD", 25, 8.00, "Storage", "AWS-EBS-GP3-100"),
    ("Application Load Balancer", "Layer 7 load balancer", 3, 22.27, "Networking", "AWS-ALB-STD"),
    ("NAT Gateway", "Network address translation", 2, 32.85, "Networking", "AWS-NAT-GW"),
    ("CloudFront Distribution", "CDN distribution", 4, 8.50, "Networking", "AWS-CF-100"),
    ("ECS Fargate Task", "Serverless container", 10, 14.26, "Containers", "AWS-FARGATE-SM"),
    ("Lambda Function", "Serverless compute", 12, 0.20, "Serverless", "AWS-LAMBDA-1M"),
    ("ECR Repository", "Container registry", 5, 1.00, "Containers", "AWS-ECR-10"),
    ("AWS WAF WebACL", "Web application firewall", 2, 5.00, "Security", "AWS-WAF-ACL"),
    ("CloudWatch Dashboard", "Monitoring dashboard", 8, 3.00, "Monitoring", "AWS-CW-DASH"),
    ("CloudWatch Logs 10GB", "Log storage", 15, 5.03, "Monitoring", "AWS-CW-LOGS-10"),
    ("AWS Secrets Manager", "Secret storage", 10, 0.40, "Security", "AWS-SM-SECRET"),
];

/// Handle to the SQLite-backed record store and audit trail
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect to the database at `url` (created if missing), run pending
    /// migrations, and return the store handle.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = url.parse::<SqliteConnectOptions>()?;
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options.create_if_missing(true))
            .await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// In-memory store for tests. A single pinned connection keeps the
    /// database alive for the lifetime of the pool.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    /// Insert the seed catalog if the items table is empty. Returns whether
    /// seeding happened.
    pub async fn seed_catalog(&self) -> Result<bool> {
        if self.count_items().await? > 0 {
            return Ok(false);
        }
        tracing::info!(items = SEED_CATALOG.len(), "seeding initial catalog");
        let now = Utc::now();
        for &(name, description, quantity, price, category, sku) in SEED_CATALOG {
            sqlx::query(
                "INSERT INTO inventory_items \
                 (name, description, quantity, price, category, sku, created_at, updated_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(name)
            .bind(description)
            .bind(quantity)
            .bind(price)
            .bind(category)
            .bind(sku)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;
        }
        Ok(true)
    }

    /// Connectivity probe for the health endpoint
    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }

    /// Number of tables in the schema, reported by the metrics snapshot
    pub async fn table_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
