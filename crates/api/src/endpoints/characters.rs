//! Character endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use holocron_common::AppResult;
use holocron_core::CreateCharacterInput;
use holocron_db::entities::character;

use crate::{
    response::{ApiListResponse, ApiResponse},
    state::AppState,
};

/// List all characters.
async fn list(State(state): State<AppState>) -> AppResult<ApiListResponse<character::Model>> {
    let characters = state.store.characters.list_all().await?;
    Ok(ApiListResponse::ok("Characters", characters))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<character::Model>> {
    let character = state.store.characters.get_by_id(id).await?;
    Ok(ApiResponse::ok("Character", character))
}

/// Create a character.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacterInput>,
) -> AppResult<ApiResponse<character::Model>> {
    let character = state.store.characters.create(input).await?;
    Ok(ApiResponse::created("Character created", character))
}

async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<ApiResponse<()>> {
    state.store.characters.delete(id).await?;
    Ok(ApiResponse::message("Character deleted"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters", get(list))
        .route("/character", post(create))
        .route("/character/{id}", get(show).delete(delete))
}
