//! Database integration tests.
//!
//! The `PostgreSQL` tests are ignored by default.
//! Run with: `cargo test --test db_integration -- --ignored`
//!
//! Environment variables:
//!   `TEST_DB_HOST` (default: localhost)
//!   `TEST_DB_PORT` (default: 5433)
//!   `TEST_DB_USER` (default: `holocron_test`)
//!   `TEST_DB_PASSWORD` (default: `holocron_test`)
//!   `TEST_DB_NAME` (default: `holocron_test`)

#![allow(clippy::unwrap_used)]

use holocron_db::entities::{favorite::FavoriteKind, planet, user, vehicle};
use holocron_db::repositories::{
    FavoriteRepository, PlanetRepository, UserRepository, VehicleRepository,
};
use holocron_db::test_utils::{TestDatabase, TestDbConfig};
use sea_orm::{ConnectionTrait, Set};

fn new_user(email: &str) -> user::ActiveModel {
    user::ActiveModel {
        email: Set(email.to_string()),
        user_name: Set("tester".to_string()),
        password: Set("$argon2id$placeholder".to_string()),
        is_active: Set(true),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_database_connection() {
    let config = TestDbConfig::default();
    let result = TestDatabase::with_config(config).await;
    assert!(result.is_ok(), "Failed to connect: {:?}", result.err());
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_database_cleanup() {
    let db = TestDatabase::new().await.expect("Failed to connect");
    let result = db.cleanup().await;
    assert!(result.is_ok(), "Cleanup failed: {:?}", result.err());
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_postgres_ids_restart_after_cleanup() {
    let db = TestDatabase::new().await.expect("Failed to connect");
    db.cleanup().await.unwrap();

    let repo = UserRepository::new(db.connection());
    let created = repo.create(new_user("first@holocron.dev")).await.unwrap();
    assert_eq!(created.id, 1);

    db.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_execute_query() {
    let db = TestDatabase::in_memory().await.unwrap();

    let result = db
        .connection()
        .execute(sea_orm::Statement::from_string(
            sea_orm::DatabaseBackend::Sqlite,
            "SELECT 1".to_string(),
        ))
        .await;

    assert!(result.is_ok(), "Query failed: {:?}", result.err());
}

#[tokio::test]
async fn test_favorite_lifecycle_across_repositories() {
    let db = TestDatabase::in_memory().await.unwrap();
    let users = UserRepository::new(db.connection());
    let planets = PlanetRepository::new(db.connection());
    let vehicles = VehicleRepository::new(db.connection());
    let favorites = FavoriteRepository::new(db.connection());

    let luke = users.create(new_user("luke@tatooine.net")).await.unwrap();
    let tatooine = planets
        .create(planet::ActiveModel {
            name: Set("Tatooine".to_string()),
            climate: Set(Some("arid".to_string())),
            ..Default::default()
        })
        .await
        .unwrap();
    let speeder = vehicles
        .create(vehicle::ActiveModel {
            name: Set("X-34 landspeeder".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // Same id, different kinds: both favorites are distinct.
    favorites
        .create_for_target(luke.id, FavoriteKind::Planet, tatooine.id)
        .await
        .unwrap();
    favorites
        .create_for_target(luke.id, FavoriteKind::Vehicle, speeder.id)
        .await
        .unwrap();
    assert_eq!(favorites.count_by_user(luke.id).await.unwrap(), 2);

    assert!(vehicles.delete(speeder.id).await.unwrap());
    let left = favorites.find_by_user(luke.id).await.unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].target_kind, FavoriteKind::Planet);

    assert!(users.delete(luke.id).await.unwrap());
    assert_eq!(favorites.count_by_user(luke.id).await.unwrap(), 0);
    assert!(planets.find_by_id(tatooine.id).await.unwrap().is_some());
}
