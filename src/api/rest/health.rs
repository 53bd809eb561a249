//! Health, operational metrics, and audit log endpoints

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{DataResponse, ListResponse};
use crate::api::http::AppState;
use crate::error::Error;
use crate::metrics;
use crate::types::AuditEntry;

/// GET /health - liveness plus database connectivity probe
pub async fn get_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let connected = state.service.store().ping().await;
    let status = if connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let body = json!({
        "status": if connected { "healthy" } else { "degraded" },
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": state.metrics.uptime_secs(),
        "database": if connected { "connected" } else { "disconnected" },
    });
    (status, Json(body))
}

/// GET /health/metrics - point-in-time operational snapshot
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataResponse<Value>>, Error> {
    let snapshot =
        metrics::operational_snapshot(&state.config, &state.metrics, state.service.store()).await?;
    Ok(Json(DataResponse::new(snapshot)))
}

/// Query parameters for the audit listing
#[derive(Debug, Deserialize)]
pub struct AuditParams {
    /// Maximum entries to return (default 20, caller is trusted)
    pub limit: Option<i64>,
}

/// GET /health/audit?limit=N - recent audit entries, newest first
pub async fn get_audit(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AuditParams>,
) -> Result<Json<ListResponse<AuditEntry>>, Error> {
    let entries = state.service.recent_audit(params.limit).await?;
    Ok(Json(ListResponse::new(entries)))
}
