//! Planet repository.

use std::sync::Arc;

use crate::entities::{Planet, favorite::FavoriteKind, planet};
use crate::repositories::favorite::delete_favorites_of_target;
use holocron_common::{AppError, AppResult};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};

/// Planet repository for database operations.
#[derive(Clone)]
pub struct PlanetRepository {
    db: Arc<DatabaseConnection>,
}

impl PlanetRepository {
    /// Create a new planet repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a planet by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<planet::Model>> {
        Planet::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }

    /// Find a planet by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<planet::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet".to_string()))
    }

    /// Get all planets, oldest first.
    pub async fn find_all(&self) -> AppResult<Vec<planet::Model>> {
        Planet::find()
            .order_by_asc(planet::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }

    /// Create a new planet.
    pub async fn create(&self, model: planet::ActiveModel) -> AppResult<planet::Model> {
        model.insert(self.db.as_ref()).await.map_err(AppError::from)
    }

    /// Delete a planet and every favorite pointing at it.
    ///
    /// Returns `false` when no planet has this ID.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        // Row first: a concurrent favorite insert holds a share lock on it.
        let result = Planet::delete_by_id(id).exec(&txn).await?;
        delete_favorites_of_target(&txn, FavoriteKind::Planet, id).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
