//! User service.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use holocron_common::{AppError, AppResult};
use holocron_db::{entities::user, repositories::UserRepository};
use sea_orm::Set;
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use super::required;

/// User service for business logic.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

/// Input for creating a new user.
///
/// Every field is required; they are optional here so a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(required, email, length(max = 120))]
    pub email: Option<String>,

    #[validate(required, length(min = 1, max = 80))]
    pub user_name: Option<String>,

    #[validate(required, length(min = 1, max = 128))]
    pub password: Option<String>,

    #[validate(required)]
    pub is_active: Option<bool>,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// List all users.
    pub async fn list_all(&self) -> AppResult<Vec<user::Model>> {
        self.user_repo.find_all().await
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i32) -> AppResult<user::Model> {
        self.user_repo.get_by_id(id).await
    }

    /// Create a new user.
    pub async fn create(&self, input: CreateUserInput) -> AppResult<user::Model> {
        input.validate()?;

        let email = required(input.email, "email")?;
        let user_name = required(input.user_name, "user_name")?;
        let password = required(input.password, "password")?;
        let is_active = required(input.is_active, "is_active")?;

        // Check if email is taken
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Email {email} is already registered"
            )));
        }

        let password_hash = hash_password(&password)?;

        let model = user::ActiveModel {
            email: Set(email),
            user_name: Set(user_name),
            password: Set(password_hash),
            is_active: Set(is_active),
            ..Default::default()
        };

        let user = self.user_repo.create(model).await?;
        debug!(user_id = user.id, "Created user");
        Ok(user)
    }

    /// Delete a user along with their favorites.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.user_repo.delete(id).await? {
            return Err(AppError::NotFound("User".to_string()));
        }
        debug!(user_id = id, "Deleted user");
        Ok(())
    }
}

/// Hash a password using Argon2.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};
    use holocron_db::test_utils::TestDatabase;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn valid_input(email: &str) -> CreateUserInput {
        CreateUserInput {
            email: Some(email.to_string()),
            user_name: Some("a".to_string()),
            password: Some("x".to_string()),
            is_active: Some(true),
        }
    }

    #[test]
    fn test_hash_password() {
        let hash = hash_password("use the force").unwrap();

        assert!(hash.starts_with("$argon2"));
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"use the force", &parsed)
                .is_ok()
        );
    }

    #[test]
    fn test_hash_password_different_each_time() {
        let hash1 = hash_password("secret").unwrap();
        let hash2 = hash_password("secret").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_create_user_input_validation() {
        // Missing field
        let input = CreateUserInput {
            is_active: None,
            ..valid_input("a@b.com")
        };
        assert!(input.validate().is_err());

        // Malformed email
        assert!(valid_input("not-an-email").validate().is_err());

        // Name too long
        let input = CreateUserInput {
            user_name: Some("a".repeat(81)),
            ..valid_input("a@b.com")
        };
        assert!(input.validate().is_err());

        assert!(valid_input("a@b.com").validate().is_ok());
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user::Model>::new()])
                .into_connection(),
        );

        let service = UserService::new(UserRepository::new(db));
        let result = service.get_by_id(7).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_user_then_duplicate_email() {
        let db = TestDatabase::in_memory().await.unwrap();
        let service = UserService::new(UserRepository::new(db.connection()));

        let user = service.create(valid_input("a@b.com")).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@b.com");
        assert_ne!(user.password, "x");

        let fetched = service.get_by_id(user.id).await.unwrap();
        assert_eq!(fetched, user);

        let again = service.create(valid_input("a@b.com")).await;
        assert!(matches!(again, Err(AppError::Conflict(_))));
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let db = TestDatabase::in_memory().await.unwrap();
        let service = UserService::new(UserRepository::new(db.connection()));

        let result = service.create(CreateUserInput::default()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let db = TestDatabase::in_memory().await.unwrap();
        let service = UserService::new(UserRepository::new(db.connection()));

        let user = service.create(valid_input("han@falcon.org")).await.unwrap();
        service.delete(user.id).await.unwrap();

        assert!(matches!(
            service.get_by_id(user.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(user.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
