//! Planet service.

use holocron_common::{AppError, AppResult};
use holocron_db::{entities::planet, repositories::PlanetRepository};
use sea_orm::Set;
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use super::required;

/// Planet service for business logic.
#[derive(Clone)]
pub struct PlanetService {
    planet_repo: PlanetRepository,
}

/// Input for creating a new planet.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreatePlanetInput {
    #[validate(required, length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub rotation_period: Option<i32>,

    #[validate(range(min = 0))]
    pub orbital_period: Option<i32>,

    #[validate(range(min = 0))]
    pub diameter: Option<i32>,

    #[validate(length(max = 120))]
    pub climate: Option<String>,

    #[validate(length(max = 120))]
    pub gravity: Option<String>,

    #[validate(length(max = 120))]
    pub terrain: Option<String>,

    #[validate(range(min = 0))]
    pub surface_water: Option<i32>,

    #[validate(range(min = 0))]
    pub population: Option<i64>,
}

impl PlanetService {
    /// Create a new planet service.
    #[must_use]
    pub const fn new(planet_repo: PlanetRepository) -> Self {
        Self { planet_repo }
    }

    /// List all planets.
    pub async fn list_all(&self) -> AppResult<Vec<planet::Model>> {
        self.planet_repo.find_all().await
    }

    /// Get a planet by ID.
    pub async fn get_by_id(&self, id: i32) -> AppResult<planet::Model> {
        self.planet_repo.get_by_id(id).await
    }

    /// Create a new planet.
    pub async fn create(&self, input: CreatePlanetInput) -> AppResult<planet::Model> {
        input.validate()?;

        let model = planet::ActiveModel {
            name: Set(required(input.name, "name")?),
            rotation_period: Set(input.rotation_period),
            orbital_period: Set(input.orbital_period),
            diameter: Set(input.diameter),
            climate: Set(input.climate),
            gravity: Set(input.gravity),
            terrain: Set(input.terrain),
            surface_water: Set(input.surface_water),
            population: Set(input.population),
            ..Default::default()
        };

        let planet = self.planet_repo.create(model).await?;
        debug!(planet_id = planet.id, "Created planet");
        Ok(planet)
    }

    /// Delete a planet and the favorites pointing at it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.planet_repo.delete(id).await? {
            return Err(AppError::NotFound("Planet".to_string()));
        }
        Ok(())
    }
}
