//! User endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use holocron_common::AppResult;
use holocron_core::CreateUserInput;
use holocron_db::entities::user;

use crate::{
    response::{ApiListResponse, ApiResponse},
    state::AppState,
};

/// List all users.
async fn list(State(state): State<AppState>) -> AppResult<ApiListResponse<user::Model>> {
    let users = state.store.users.list_all().await?;
    Ok(ApiListResponse::ok("Users", users))
}

/// Show a user.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<user::Model>> {
    let user = state.store.users.get_by_id(id).await?;
    Ok(ApiResponse::ok("User", user))
}

/// Create a user.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> AppResult<ApiResponse<user::Model>> {
    let user = state.store.users.create(input).await?;
    Ok(ApiResponse::created("User created", user))
}

/// Delete a user and their favorites.
async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<ApiResponse<()>> {
    state.store.users.delete(id).await?;
    Ok(ApiResponse::message("User deleted"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list))
        .route("/user", post(create))
        .route("/user/{id}", get(show).delete(delete))
}
