//! API endpoints.

#![allow(missing_docs)]

mod characters;
mod favorites;
mod planets;
mod users;
mod vehicles;

use axum::{Router, routing::get};
use serde::Serialize;

use crate::{response::ApiListResponse, state::AppState};

/// One line of the sitemap.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

/// Every route served by [`router`].
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint { method: "GET", path: "/" },
    Endpoint { method: "GET", path: "/users" },
    Endpoint { method: "POST", path: "/user" },
    Endpoint { method: "GET", path: "/user/{id}" },
    Endpoint { method: "DELETE", path: "/user/{id}" },
    Endpoint { method: "GET", path: "/user/{id}/favorites" },
    Endpoint { method: "POST", path: "/user/{id}/favorite/{kind}/{target_id}" },
    Endpoint { method: "DELETE", path: "/user/{id}/favorite/{favorite_id}" },
    Endpoint { method: "GET", path: "/planets" },
    Endpoint { method: "POST", path: "/planet" },
    Endpoint { method: "GET", path: "/planet/{id}" },
    Endpoint { method: "DELETE", path: "/planet/{id}" },
    Endpoint { method: "GET", path: "/characters" },
    Endpoint { method: "POST", path: "/character" },
    Endpoint { method: "GET", path: "/character/{id}" },
    Endpoint { method: "DELETE", path: "/character/{id}" },
    Endpoint { method: "GET", path: "/vehicles" },
    Endpoint { method: "POST", path: "/vehicle" },
    Endpoint { method: "GET", path: "/vehicle/{id}" },
    Endpoint { method: "DELETE", path: "/vehicle/{id}" },
];

/// Sitemap listing every endpoint.
async fn sitemap() -> ApiListResponse<Endpoint> {
    ApiListResponse::ok("Holocron API", ENDPOINTS.to_vec())
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap))
        .merge(users::router())
        .merge(favorites::router())
        .merge(planets::router())
        .merge(characters::router())
        .merge(vehicles::router())
}
