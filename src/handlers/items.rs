use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::{json, Value};

use crate::extract::Json;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::types::{CreateItem, UpdateItem};
use crate::AppState;

/// POST /api/lists/:id/items - create an item in an owned list
pub async fn create_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(list_id): Path<i64>,
    Json(req): Json<CreateItem>,
) -> ApiResult<Value> {
    let id = state.items.create(user.id, list_id, req).await?;
    Ok(ApiResponse::created(json!({ "id": id })))
}

/// GET /api/lists/:id/items - items of an owned list
pub async fn get_list_items(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(list_id): Path<i64>,
) -> ApiResult<Value> {
    let items = state.items.get_all(user.id, list_id).await?;
    Ok(ApiResponse::success(json!({ "items": items })))
}

/// GET /api/items/:id
pub async fn get_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(item_id): Path<i64>,
) -> ApiResult<Value> {
    let item = state.items.get_by_id(user.id, item_id).await?;
    Ok(ApiResponse::success(json!({ "item": item })))
}

/// PUT /api/items/:id - partial update, including the done flag
pub async fn update_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(item_id): Path<i64>,
    Json(req): Json<UpdateItem>,
) -> ApiResult<()> {
    state.items.update(user.id, item_id, req).await?;
    Ok(ApiResponse::<()>::no_content())
}

/// DELETE /api/items/:id
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(item_id): Path<i64>,
) -> ApiResult<()> {
    state.items.delete(user.id, item_id).await?;
    Ok(ApiResponse::<()>::no_content())
}
