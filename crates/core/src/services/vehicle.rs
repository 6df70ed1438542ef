//! Vehicle service.

use holocron_common::{AppError, AppResult};
use holocron_db::{entities::vehicle, repositories::VehicleRepository};
use sea_orm::Set;
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use super::required;

/// Vehicle service for business logic.
#[derive(Clone)]
pub struct VehicleService {
    vehicle_repo: VehicleRepository,
}

/// Input for creating a new vehicle.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateVehicleInput {
    #[validate(required, length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(length(max = 120))]
    pub model: Option<String>,

    #[validate(length(max = 120))]
    pub manufacturer: Option<String>,

    #[validate(range(min = 0))]
    pub cost_in_credits: Option<i64>,

    #[validate(length(max = 120))]
    pub length: Option<String>,

    #[validate(range(min = 0))]
    pub max_atmosphering_speed: Option<i32>,

    #[validate(range(min = 0))]
    pub crew: Option<i32>,

    #[validate(range(min = 0))]
    pub passengers: Option<i32>,

    #[validate(range(min = 0))]
    pub cargo_capacity: Option<i64>,

    #[validate(length(max = 120))]
    pub consumables: Option<String>,

    #[validate(length(max = 120))]
    pub vehicle_class: Option<String>,
}

impl VehicleService {
    /// Create a new vehicle service.
    #[must_use]
    pub const fn new(vehicle_repo: VehicleRepository) -> Self {
        Self { vehicle_repo }
    }

    /// List all vehicles.
    pub async fn list_all(&self) -> AppResult<Vec<vehicle::Model>> {
        self.vehicle_repo.find_all().await
    }

    /// Get a vehicle by ID.
    pub async fn get_by_id(&self, id: i32) -> AppResult<vehicle::Model> {
        self.vehicle_repo.get_by_id(id).await
    }

    /// Create a new vehicle.
    pub async fn create(&self, input: CreateVehicleInput) -> AppResult<vehicle::Model> {
        input.validate()?;

        let model = vehicle::ActiveModel {
            name: Set(required(input.name, "name")?),
            model: Set(input.model),
            manufacturer: Set(input.manufacturer),
            cost_in_credits: Set(input.cost_in_credits),
            length: Set(input.length),
            max_atmosphering_speed: Set(input.max_atmosphering_speed),
            crew: Set(input.crew),
            passengers: Set(input.passengers),
            cargo_capacity: Set(input.cargo_capacity),
            consumables: Set(input.consumables),
            vehicle_class: Set(input.vehicle_class),
            ..Default::default()
        };

        let vehicle = self.vehicle_repo.create(model).await?;
        debug!(vehicle_id = vehicle.id, "Created vehicle");
        Ok(vehicle)
    }

    /// Delete a vehicle and the favorites pointing at it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.vehicle_repo.delete(id).await? {
            return Err(AppError::NotFound("Vehicle".to_string()));
        }
        Ok(())
    }
}
