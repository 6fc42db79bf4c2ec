use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::{json, Value};

use crate::extract::Json;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::types::{CreateList, UpdateList};
use crate::AppState;

/// POST /api/lists - create a list owned by the caller
pub async fn create_list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateList>,
) -> ApiResult<Value> {
    let id = state.lists.create(user.id, req).await?;
    Ok(ApiResponse::created(json!({ "id": id })))
}

/// GET /api/lists - all lists owned by the caller
pub async fn get_all_lists(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Value> {
    let lists = state.lists.get_all(user.id).await?;
    Ok(ApiResponse::success(json!({ "lists": lists })))
}

/// GET /api/lists/:id
pub async fn get_list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(list_id): Path<i64>,
) -> ApiResult<Value> {
    let list = state.lists.get_by_id(user.id, list_id).await?;
    Ok(ApiResponse::success(json!({ "list": list })))
}

/// PUT /api/lists/:id - partial update
pub async fn update_list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(list_id): Path<i64>,
    Json(req): Json<UpdateList>,
) -> ApiResult<()> {
    state.lists.update(user.id, list_id, req).await?;
    Ok(ApiResponse::<()>::no_content())
}

/// DELETE /api/lists/:id - delete a list and its items
pub async fn delete_list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(list_id): Path<i64>,
) -> ApiResult<()> {
    state.lists.delete(user.id, list_id).await?;
    Ok(ApiResponse::<()>::no_content())
}
