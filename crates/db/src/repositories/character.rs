//! Character repository.

use std::sync::Arc;

use crate::entities::{Character, character, favorite::FavoriteKind};
use crate::repositories::favorite::delete_favorites_of_target;
use holocron_common::{AppError, AppResult};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};

/// Character repository for database operations.
#[derive(Clone)]
pub struct CharacterRepository {
    db: Arc<DatabaseConnection>,
}

impl CharacterRepository {
    /// Create a new character repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a character by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<character::Model>> {
        Character::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }

    /// Find a character by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<character::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character".to_string()))
    }

    /// Get all characters, oldest first.
    pub async fn find_all(&self) -> AppResult<Vec<character::Model>> {
        Character::find()
            .order_by_asc(character::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }

    /// Create a new character.
    pub async fn create(&self, model: character::ActiveModel) -> AppResult<character::Model> {
        model.insert(self.db.as_ref()).await.map_err(AppError::from)
    }

    /// Delete a character and every favorite pointing at it.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        // Row first: a concurrent favorite insert holds a share lock on it.
        let result = Character::delete_by_id(id).exec(&txn).await?;
        delete_favorites_of_target(&txn, FavoriteKind::Character, id).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
