//! HTTP server setup with Axum

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use super::rest::{health, inventory};
use crate::config::Config;
use crate::metrics::RequestMetrics;
use crate::service::InventoryService;

/// Shared application state injected into every handler
pub struct AppState {
    /// Orchestration layer over the store and audit trail
    pub service: InventoryService,
    /// Process-local request counters, reset on restart
    pub metrics: RequestMetrics,
    /// Deployment configuration for the metrics snapshot
    pub config: Config,
}

impl AppState {
    pub fn new(service: InventoryService, config: Config) -> Self {
        Self {
            service,
            metrics: RequestMetrics::new(),
            config,
        }
    }
}

/// Create the Axum router with all endpoints.
///
/// Routes are served both at the root and under `/api` (the path the
/// dashboard front end uses).
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route(
            "/inventory",
            get(inventory::list_items).post(inventory::create_item),
        )
        .route("/inventory/stats", get(inventory::get_stats))
        .route(
            "/inventory/:id",
            get(inventory::get_item)
                .put(inventory::update_item)
                .delete(inventory::delete_item),
        )
        .route("/health", get(health::get_health))
        .route("/health/metrics", get(health::get_metrics))
        .route("/health/audit", get(health::get_audit));

    Router::new()
        .route("/", get(service_banner))
        .merge(routes.clone())
        .nest("/api", routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            track_requests,
        ))
        .layer(cors)
        .with_state(state)
}

/// Record every served request into the process-local counters
async fn track_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    state.metrics.record(start.elapsed());
    tracing::info!(%method, path, status = %response.status(), "request");
    response
}

/// GET / - service banner with the endpoint map
async fn service_banner(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "name": "CloudOps Inventory Platform API",
        "version": state.config.app_version,
        "environment": state.config.deployment_env,
        "description": "Cloud Resources Inventory Management System",
        "endpoints": {
            "inventory": "/api/inventory",
            "inventoryStats": "/api/inventory/stats",
            "health": "/api/health",
            "metrics": "/api/health/metrics",
            "auditLogs": "/api/health/audit",
        },
    }))
}
