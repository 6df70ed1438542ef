//! API response types.
//!
//! Successful responses carry a human-readable `msg` next to the payload:
//! `{"msg": ..., "result": {...}}` for one item and
//! `{"msg": ..., "results": [...]}` for a list.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Single-item response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Message for the client.
    pub msg: String,
    /// The item, absent for message-only responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a `200 OK` response.
    pub fn ok(msg: impl Into<String>, result: T) -> Self {
        Self {
            msg: msg.into(),
            result: Some(result),
            status: StatusCode::OK,
        }
    }

    /// Create a `201 Created` response.
    pub fn created(msg: impl Into<String>, result: T) -> Self {
        Self {
            msg: msg.into(),
            result: Some(result),
            status: StatusCode::CREATED,
        }
    }
}

impl ApiResponse<()> {
    /// Create a `200 OK` response with only a message.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            result: None,
            status: StatusCode::OK,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// List response wrapper. An empty list is still a success.
#[derive(Debug, Serialize)]
pub struct ApiListResponse<T: Serialize> {
    /// Message for the client.
    pub msg: String,
    /// The items, oldest first.
    pub results: Vec<T>,
}

impl<T: Serialize> ApiListResponse<T> {
    /// Create a `200 OK` list response.
    pub fn ok(msg: impl Into<String>, results: Vec<T>) -> Self {
        Self {
            msg: msg.into(),
            results,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiListResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
