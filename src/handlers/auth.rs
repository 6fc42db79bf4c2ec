use axum::extract::State;
use serde_json::{json, Value};

use crate::extract::Json;
use crate::middleware::{ApiResponse, ApiResult};
use crate::types::{SignInRequest, SignUpRequest};
use crate::AppState;

/// POST /auth/sign-up - create an account, returns the new user id
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> ApiResult<Value> {
    let id = state.auth.sign_up(req).await?;
    Ok(ApiResponse::created(json!({ "id": id })))
}

/// POST /auth/sign-in - verify credentials, returns a bearer token
pub async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> ApiResult<Value> {
    let token = state.auth.sign_in(req).await?;
    Ok(ApiResponse::success(json!({ "token": token })))
}
