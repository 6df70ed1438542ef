//! Core business logic for holocron.
//!
//! Services validate input and enforce the catalog's rules on top of the
//! repositories in `holocron-db`. [`CatalogStore`] bundles them for the
//! HTTP layer.

pub mod services;
pub mod store;

pub use services::*;
pub use store::CatalogStore;
