//! Favorites endpoints, nested under the owning user.

use axum::{
    Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use holocron_common::AppResult;
use holocron_db::entities::favorite;

use crate::{
    response::{ApiListResponse, ApiResponse},
    state::AppState,
};

/// List a user's favorites.
async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<ApiListResponse<favorite::Model>> {
    let favorites = state.store.favorites.list(user_id).await?;
    Ok(ApiListResponse::ok("Favorites", favorites))
}

/// Add a planet, character or vehicle to a user's favorites.
async fn add(
    State(state): State<AppState>,
    Path((user_id, kind, target_id)): Path<(i32, String, i32)>,
) -> AppResult<ApiResponse<favorite::Model>> {
    let favorite = state
        .store
        .favorites
        .add(user_id, &kind, target_id)
        .await?;
    Ok(ApiResponse::created("Favorite added", favorite))
}

async fn remove(
    State(state): State<AppState>,
    Path((user_id, favorite_id)): Path<(i32, i32)>,
) -> AppResult<ApiResponse<()>> {
    state.store.favorites.remove(user_id, favorite_id).await?;
    Ok(ApiResponse::message("Favorite removed"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/{id}/favorites", get(list))
        // `{key}` is the kind for POST and the favorite id for DELETE; the
        // router requires one name per parameter position.
        .route("/user/{id}/favorite/{key}/{target_id}", post(add))
        .route("/user/{id}/favorite/{key}", delete(remove))
}
