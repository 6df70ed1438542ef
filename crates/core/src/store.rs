//! The catalog store handed to the HTTP layer.

use std::sync::Arc;

use holocron_db::repositories::{
    CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository, VehicleRepository,
};
use sea_orm::DatabaseConnection;

use crate::services::{
    CharacterService, FavoriteService, PlanetService, UserService, VehicleService,
};

/// One service per catalog entity plus favorites, sharing a connection pool.
#[derive(Clone)]
pub struct CatalogStore {
    /// User accounts.
    pub users: UserService,
    /// Planets.
    pub planets: PlanetService,
    /// Characters.
    pub characters: CharacterService,
    /// Vehicles.
    pub vehicles: VehicleService,
    /// Favorites, scoped to their owning user.
    pub favorites: FavoriteService,
}

impl CatalogStore {
    /// Build every service over the same connection.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let user_repo = UserRepository::new(Arc::clone(&db));

        Self {
            users: UserService::new(user_repo.clone()),
            planets: PlanetService::new(PlanetRepository::new(Arc::clone(&db))),
            characters: CharacterService::new(CharacterRepository::new(Arc::clone(&db))),
            vehicles: VehicleService::new(VehicleRepository::new(Arc::clone(&db))),
            favorites: FavoriteService::new(FavoriteRepository::new(db), user_repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CreateCharacterInput, CreateUserInput};
    use holocron_common::AppError;
    use holocron_db::test_utils::TestDatabase;

    #[tokio::test]
    async fn test_get_by_id_missing_for_every_entity() {
        let db = TestDatabase::in_memory().await.unwrap();
        let store = CatalogStore::new(db.connection());

        assert!(matches!(store.users.get_by_id(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.planets.get_by_id(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.characters.get_by_id(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.vehicles.get_by_id(1).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_deleting_user_drops_favorites_keeps_targets() {
        let db = TestDatabase::in_memory().await.unwrap();
        let store = CatalogStore::new(db.connection());

        let user = store
            .users
            .create(CreateUserInput {
                email: Some("luke@rebellion.org".to_string()),
                user_name: Some("luke".to_string()),
                password: Some("x".to_string()),
                is_active: Some(true),
            })
            .await
            .unwrap();
        let obi_wan = store
            .characters
            .create(CreateCharacterInput {
                name: Some("Obi-Wan Kenobi".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        store
            .favorites
            .add(user.id, "character", obi_wan.id)
            .await
            .unwrap();

        store.users.delete(user.id).await.unwrap();

        assert!(matches!(store.favorites.list(user.id).await, Err(AppError::NotFound(_))));
        assert_eq!(store.characters.get_by_id(obi_wan.id).await.unwrap(), obi_wan);
    }
}
