//! Database entities.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::Entity as Character;
pub use favorite::Entity as Favorite;
pub use planet::Entity as Planet;
pub use user::Entity as User;
pub use vehicle::Entity as Vehicle;
