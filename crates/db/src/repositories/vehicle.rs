//! Vehicle repository.

use std::sync::Arc;

use crate::entities::{Vehicle, favorite::FavoriteKind, vehicle};
use crate::repositories::favorite::delete_favorites_of_target;
use holocron_common::{AppError, AppResult};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};

/// Vehicle repository for database operations.
#[derive(Clone)]
pub struct VehicleRepository {
    db: Arc<DatabaseConnection>,
}

impl VehicleRepository {
    /// Create a new vehicle repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a vehicle by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<vehicle::Model>> {
        Vehicle::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }

    /// Find a vehicle by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<vehicle::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle".to_string()))
    }

    /// Get all vehicles, oldest first.
    pub async fn find_all(&self) -> AppResult<Vec<vehicle::Model>> {
        Vehicle::find()
            .order_by_asc(vehicle::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }

    /// Create a new vehicle.
    pub async fn create(&self, model: vehicle::ActiveModel) -> AppResult<vehicle::Model> {
        model.insert(self.db.as_ref()).await.map_err(AppError::from)
    }

    /// Delete a vehicle and every favorite pointing at it.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        // Row first: a concurrent favorite insert holds a share lock on it.
        let result = Vehicle::delete_by_id(id).exec(&txn).await?;
        delete_favorites_of_target(&txn, FavoriteKind::Vehicle, id).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
