//! Character service.

use holocron_common::{AppError, AppResult};
use holocron_db::{entities::character, repositories::CharacterRepository};
use sea_orm::Set;
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use super::required;

/// Character service for business logic.
#[derive(Clone)]
pub struct CharacterService {
    character_repo: CharacterRepository,
}

/// Input for creating a new character.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateCharacterInput {
    #[validate(required, length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub height: Option<i32>,

    #[validate(range(min = 0))]
    pub mass: Option<i32>,

    #[validate(length(max = 120))]
    pub hair_color: Option<String>,

    #[validate(length(max = 120))]
    pub skin_color: Option<String>,

    #[validate(length(max = 120))]
    pub eye_color: Option<String>,

    #[validate(length(max = 120))]
    pub birth_year: Option<String>,

    #[validate(length(max = 120))]
    pub gender: Option<String>,
}

impl CharacterService {
    /// Create a new character service.
    #[must_use]
    pub const fn new(character_repo: CharacterRepository) -> Self {
        Self { character_repo }
    }

    /// List all characters.
    pub async fn list_all(&self) -> AppResult<Vec<character::Model>> {
        self.character_repo.find_all().await
    }

    /// Get a character by ID.
    pub async fn get_by_id(&self, id: i32) -> AppResult<character::Model> {
        self.character_repo.get_by_id(id).await
    }

    /// Create a new character.
    pub async fn create(&self, input: CreateCharacterInput) -> AppResult<character::Model> {
        input.validate()?;

        let model = character::ActiveModel {
            name: Set(required(input.name, "name")?),
            height: Set(input.height),
            mass: Set(input.mass),
            hair_color: Set(input.hair_color),
            skin_color: Set(input.skin_color),
            eye_color: Set(input.eye_color),
            birth_year: Set(input.birth_year),
            gender: Set(input.gender),
            ..Default::default()
        };

        let character = self.character_repo.create(model).await?;
        debug!(character_id = character.id, "Created character");
        Ok(character)
    }

    /// Delete a character and the favorites pointing at it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.character_repo.delete(id).await? {
            return Err(AppError::NotFound("Character".to_string()));
        }
        Ok(())
    }
}
