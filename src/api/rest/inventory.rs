//! Inventory CRUD and stats endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::{DataResponse, ListResponse, MessageResponse};
use crate::api::http::AppState;
use crate::error::Error;
use crate::types::{InventoryItem, InventoryStats, ItemInput};

/// GET /inventory - all items ordered by category, name
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<InventoryItem>>, Error> {
    let items = state.service.list().await?;
    Ok(Json(ListResponse::new(items)))
}

/// GET /inventory/stats - aggregate statistics
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataResponse<InventoryStats>>, Error> {
    let stats = state.service.stats().await?;
    Ok(Json(DataResponse::new(stats)))
}

/// GET /inventory/:id - fetch one item
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DataResponse<InventoryItem>>, Error> {
    let item = state.service.get(id).await?;
    Ok(Json(DataResponse::new(item)))
}

/// POST /inventory - create an item (201 on success)
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ItemInput>,
) -> Result<(StatusCode, Json<DataResponse<InventoryItem>>), Error> {
    let item = state.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(item))))
}

/// PUT /inventory/:id - full-field replace
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<ItemInput>,
) -> Result<Json<DataResponse<InventoryItem>>, Error> {
    let item = state.service.update(id, input).await?;
    Ok(Json(DataResponse::new(item)))
}

/// DELETE /inventory/:id - remove an item
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, Error> {
    state.service.delete(id).await?;
    Ok(Json(MessageResponse::new("Item deleted successfully")))
}
