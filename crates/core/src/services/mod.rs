//! Business logic services.

#![allow(missing_docs)]

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::{CharacterService, CreateCharacterInput};
pub use favorite::FavoriteService;
pub use planet::{CreatePlanetInput, PlanetService};
pub use user::{CreateUserInput, UserService};
pub use vehicle::{CreateVehicleInput, VehicleService};

use holocron_common::{AppError, AppResult};

/// Take a field that validation has already checked for presence.
fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(format!("{field}: field is required")))
}
