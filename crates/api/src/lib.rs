//! HTTP API layer for holocron.
//!
//! JSON endpoints for users, planets, characters, vehicles and a user's
//! favorites, built on Axum 0.8. Handlers are thin: they extract path and
//! body, call into the [`CatalogStore`](holocron_core::CatalogStore) and wrap
//! the outcome in a [`response`] envelope. Errors render through
//! [`AppError`](holocron_common::AppError).

pub mod endpoints;
pub mod response;
pub mod state;

pub use endpoints::router;
pub use state::AppState;
