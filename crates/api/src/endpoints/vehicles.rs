//! Vehicle endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use holocron_common::AppResult;
use holocron_core::CreateVehicleInput;
use holocron_db::entities::vehicle;

use crate::{
    response::{ApiListResponse, ApiResponse},
    state::AppState,
};

/// List all vehicles.
async fn list(State(state): State<AppState>) -> AppResult<ApiListResponse<vehicle::Model>> {
    let vehicles = state.store.vehicles.list_all().await?;
    Ok(ApiListResponse::ok("Vehicles", vehicles))
}

/// Show a vehicle.
async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<vehicle::Model>> {
    let vehicle = state.store.vehicles.get_by_id(id).await?;
    Ok(ApiResponse::ok("Vehicle", vehicle))
}

/// Create a vehicle. Only `name` is required.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVehicleInput>,
) -> AppResult<ApiResponse<vehicle::Model>> {
    let vehicle = state.store.vehicles.create(input).await?;
    Ok(ApiResponse::created("Vehicle created", vehicle))
}

/// Delete a vehicle; favorites pointing at it go with it.
async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<ApiResponse<()>> {
    state.store.vehicles.delete(id).await?;
    Ok(ApiResponse::message("Vehicle deleted"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list))
        .route("/vehicle", post(create))
        .route("/vehicle/{id}", get(show).delete(delete))
}
