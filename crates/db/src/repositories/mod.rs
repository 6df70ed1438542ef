//! Repositories: one per table, each holding a shared connection.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::CharacterRepository;
pub use favorite::FavoriteRepository;
pub use planet::PlanetRepository;
pub use user::UserRepository;
pub use vehicle::VehicleRepository;
