//! Favorite service.

use holocron_common::{AppError, AppResult};
use holocron_db::{
    entities::favorite::{self, FavoriteKind},
    repositories::{FavoriteRepository, UserRepository},
};
use tracing::debug;

/// Favorite service for managing a user's bookmarked catalog entries.
#[derive(Clone)]
pub struct FavoriteService {
    favorite_repo: FavoriteRepository,
    user_repo: UserRepository,
}

impl FavoriteService {
    /// Create a new favorite service.
    #[must_use]
    pub const fn new(favorite_repo: FavoriteRepository, user_repo: UserRepository) -> Self {
        Self {
            favorite_repo,
            user_repo,
        }
    }

    /// Add a planet, character or vehicle to a user's favorites.
    ///
    /// `kind` is matched case-insensitively; anything else is a validation
    /// error.
    pub async fn add(
        &self,
        user_id: i32,
        kind: &str,
        target_id: i32,
    ) -> AppResult<favorite::Model> {
        let kind: FavoriteKind = kind
            .parse()
            .map_err(|e: favorite::UnknownFavoriteKind| AppError::Validation(e.to_string()))?;

        let favorite = self
            .favorite_repo
            .create_for_target(user_id, kind, target_id)
            .await?;
        debug!(user_id, %kind, target_id, favorite_id = favorite.id, "Added favorite");
        Ok(favorite)
    }

    /// List a user's favorites.
    pub async fn list(&self, user_id: i32) -> AppResult<Vec<favorite::Model>> {
        self.user_repo.get_by_id(user_id).await?;
        self.favorite_repo.find_by_user(user_id).await
    }

    /// Remove one of the user's favorites.
    pub async fn remove(&self, user_id: i32, favorite_id: i32) -> AppResult<()> {
        if !self.favorite_repo.delete_owned(user_id, favorite_id).await? {
            return Err(AppError::NotFound("Favorite".to_string()));
        }
        debug!(user_id, favorite_id, "Removed favorite");
        Ok(())
    }
}
