//! Planet endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use holocron_common::AppResult;
use holocron_core::CreatePlanetInput;
use holocron_db::entities::planet;

use crate::{
    response::{ApiListResponse, ApiResponse},
    state::AppState,
};

/// List all planets.
async fn list(State(state): State<AppState>) -> AppResult<ApiListResponse<planet::Model>> {
    let planets = state.store.planets.list_all().await?;
    Ok(ApiListResponse::ok("Planets", planets))
}

/// Show a planet.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<planet::Model>> {
    let planet = state.store.planets.get_by_id(id).await?;
    Ok(ApiResponse::ok("Planet", planet))
}

/// Create a planet.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlanetInput>,
) -> AppResult<ApiResponse<planet::Model>> {
    let planet = state.store.planets.create(input).await?;
    Ok(ApiResponse::created("Planet created", planet))
}

/// Delete a planet; favorites pointing at it go with it.
async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<ApiResponse<()>> {
    state.store.planets.delete(id).await?;
    Ok(ApiResponse::message("Planet deleted"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list))
        .route("/planet", post(create))
        .route("/planet/{id}", get(show).delete(delete))
}
