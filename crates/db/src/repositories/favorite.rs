//! Favorite repository.

use std::sync::Arc;

use crate::entities::{
    Character, Favorite, Planet, User, Vehicle,
    favorite::{self, FavoriteKind},
};
use holocron_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

/// Favorite repository for database operations.
#[derive(Clone)]
pub struct FavoriteRepository {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepository {
    /// Create a new favorite repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a favorite by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<favorite::Model>> {
        Favorite::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }

    /// Get a user's favorites, oldest first.
    pub async fn find_by_user(&self, user_id: i32) -> AppResult<Vec<favorite::Model>> {
        Favorite::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(favorite::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }

    /// Count favorites for a user.
    pub async fn count_by_user(&self, user_id: i32) -> AppResult<u64> {
        Favorite::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }

    /// Insert a favorite after checking, in the same transaction, that the
    /// user and the target exist and that the pair is not already stored.
    ///
    /// The user and target rows are read `FOR SHARE`, so a concurrent delete
    /// of either waits for this transaction and then sweeps the new row.
    pub async fn create_for_target(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> AppResult<favorite::Model> {
        let txn = self.db.begin().await?;

        if User::find_by_id(user_id)
            .lock_shared()
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User".to_string()));
        }

        if !target_exists(&txn, kind, target_id).await? {
            return Err(AppError::NotFound(kind.label().to_string()));
        }

        let existing = Favorite::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::TargetKind.eq(kind))
            .filter(favorite::Column::TargetId.eq(target_id))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "{} {target_id} is already a favorite",
                kind.label()
            )));
        }

        let model = favorite::ActiveModel {
            user_id: Set(user_id),
            target_kind: Set(kind),
            target_id: Set(target_id),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        let created = model.insert(&txn).await?;

        txn.commit().await?;
        Ok(created)
    }

    /// Delete a favorite only if it belongs to `user_id`.
    ///
    /// Returns `false` when no such favorite is owned by the user.
    pub async fn delete_owned(&self, user_id: i32, id: i32) -> AppResult<bool> {
        let result = Favorite::delete_many()
            .filter(favorite::Column::Id.eq(id))
            .filter(favorite::Column::UserId.eq(user_id))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Check whether the catalog entry a favorite would point at exists.
async fn target_exists<C: ConnectionTrait>(
    conn: &C,
    kind: FavoriteKind,
    target_id: i32,
) -> Result<bool, DbErr> {
    let found = match kind {
        FavoriteKind::Planet => Planet::find_by_id(target_id)
            .lock_shared()
            .one(conn)
            .await?
            .is_some(),
        FavoriteKind::Character => Character::find_by_id(target_id)
            .lock_shared()
            .one(conn)
            .await?
            .is_some(),
        FavoriteKind::Vehicle => Vehicle::find_by_id(target_id)
            .lock_shared()
            .one(conn)
            .await?
            .is_some(),
    };
    Ok(found)
}

/// Remove every favorite pointing at a catalog entry.
pub(crate) async fn delete_favorites_of_target<C: ConnectionTrait>(
    conn: &C,
    kind: FavoriteKind,
    target_id: i32,
) -> Result<u64, DbErr> {
    let result = Favorite::delete_many()
        .filter(favorite::Column::TargetKind.eq(kind))
        .filter(favorite::Column::TargetId.eq(target_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
