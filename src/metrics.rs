//! Process-local request counters and the operational metrics snapshot
//!
//! Counters are explicitly process-scoped: they reset on restart and are
//! not part of the durable data model. The snapshot producer reads from
//! them plus the store's aggregate counts; it writes nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use chrono::Utc;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;

/// In-process request counters, injected into the snapshot producer
pub struct RequestMetrics {
    requests: AtomicU64,
    total_response_ms: AtomicU64,
    started: Instant,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self {
            requests: AtomicU64::new(0),
            total_response_ms: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    /// Record one served request and its handling time
    pub fn record(&self, elapsed: Duration) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.total_response_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Average handling time in whole milliseconds, 0 before any request
    pub fn avg_response_ms(&self) -> u64 {
        let count = self.request_count();
        if count == 0 {
            return 0;
        }
        self.total_response_ms.load(Ordering::Relaxed) / count
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    /// Uptime as `XhYmZs`
    pub fn uptime_formatted(&self) -> String {
        format_uptime(self.uptime_secs())
    }
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn format_uptime(secs: u64) -> String {
    format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Assemble the point-in-time operational snapshot served by
/// `GET /health/metrics`. Reads aggregate counts from the store; the cost
/// section is static placeholders (no real cost accounting).
pub async fn operational_snapshot(
    config: &Config,
    metrics: &RequestMetrics,
    store: &Store,
) -> Result<Value> {
    let table_count = store.table_count().await?;
    let audit_count = store.audit_count().await?;
    let total_items = store.count_items().await?;
    let total_value = store.total_value().await?;

    let cpu_cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let hostname = std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("COMPUTERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    Ok(json!({
        "deployment": {
            "version": config.app_version,
            "environment": config.deployment_env,
            "deployedAt": config.deployment_date,
            "gitCommit": config.git_commit,
            "deployedBy": config.deployed_by,
            "runtime": format!("{} {}", crate::NAME, crate::VERSION),
            "platform": "Local Development",
        },
        "infrastructure": {
            "region": "Local Machine",
            "platform": std::env::consts::OS,
            "hostname": hostname,
            "cpuCores": cpu_cores,
            "containerized": false,
            "activeTasks": 1,
            "maxTasks": 1,
        },
        "health": {
            "status": "GREEN",
            "statusIcon": "✅",
            "uptime": metrics.uptime_formatted(),
            "uptimeSeconds": metrics.uptime_secs(),
            "requestsServed": metrics.request_count(),
            "avgResponseTime": format!("{}ms", metrics.avg_response_ms()),
            "errorRate": "0.00%",
            "lastChecked": Utc::now().to_rfc3339(),
        },
        "database": {
            "status": "connected",
            "statusIcon": "✅",
            "type": "SQLite 3",
            "name": config.database_url,
            "maxConnections": config.max_connections,
            "tablesCount": table_count,
            "totalAuditLogs": audit_count,
        },
        "inventory": {
            "totalItems": total_items,
            "totalValue": format!("${total_value:.2}"),
            "lastUpdated": Utc::now().to_rfc3339(),
        },
        "cost": {
            "estimatedHourlyCost": "$0.00",
            "estimatedDailyCost": "$0.00",
            "estimatedMonthlyCost": "$0.00",
            "monthToDate": "$0.00",
            "budget": "$100.00",
            "budgetUsed": "0%",
            "environment": "Local (No Cloud Charges)",
        },
    }))
}
