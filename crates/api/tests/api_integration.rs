//! API integration tests.
//!
//! These tests drive the router end to end against a migrated in-memory
//! database.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use holocron_api::{AppState, router as api_router};
use holocron_core::CatalogStore;
use holocron_db::test_utils::TestDatabase;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Create a test router over a fresh database.
///
/// The database handle is returned so it outlives the requests.
async fn create_test_router() -> (Router, TestDatabase) {
    let db = TestDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    let state = AppState::new(CatalogStore::new(db.connection()));
    (api_router().with_state(state), db)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn luke() -> Value {
    json!({
        "email": "luke@tatooine.net",
        "user_name": "luke",
        "password": "x",
        "is_active": true
    })
}

#[tokio::test]
async fn test_sitemap_lists_endpoints() {
    let (app, _db) = create_test_router().await;

    let response = send(&app, "GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let paths: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["path"].as_str())
        .collect();
    assert!(paths.contains(&"/users"));
    assert!(paths.contains(&"/user/{id}/favorite/{kind}/{target_id}"));
}

#[tokio::test]
async fn test_empty_lists_are_ok() {
    let (app, _db) = create_test_router().await;

    for uri in ["/users", "/planets", "/characters", "/vehicles"] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_json(response).await["results"], json!([]), "{uri}");
    }
}

#[tokio::test]
async fn test_missing_entities_return_not_found() {
    let (app, _db) = create_test_router().await;

    for (uri, msg) in [
        ("/user/1", "User not found"),
        ("/planet/1", "Planet not found"),
        ("/character/1", "Character not found"),
        ("/vehicle/1", "Vehicle not found"),
    ] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["msg"], msg);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_create_user_then_conflict() {
    let (app, _db) = create_test_router().await;

    let response = send(&app, "POST", "/user", Some(luke())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["result"]["id"], 1);
    assert_eq!(body["result"]["email"], "luke@tatooine.net");
    assert!(body["result"].get("password").is_none());

    let response = send(&app, "POST", "/user", Some(luke())).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(send(&app, "GET", "/users", None).await).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_user_missing_field() {
    let (app, _db) = create_test_router().await;

    let response = send(
        &app,
        "POST",
        "/user",
        Some(json!({"email": "leia@alderaan.org", "user_name": "leia"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_planet_round_trip_and_delete() {
    let (app, _db) = create_test_router().await;

    let planet = json!({
        "name": "Tatooine",
        "rotation_period": 23,
        "orbital_period": 304,
        "diameter": 10465,
        "climate": "arid",
        "gravity": "1 standard",
        "terrain": "desert",
        "surface_water": 1,
        "population": 200_000
    });
    let response = send(&app, "POST", "/planet", Some(planet)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["result"].clone();

    let response = send(&app, "GET", "/planet/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["result"], created);

    let response = send(&app, "DELETE", "/planet/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "DELETE", "/planet/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_character_create_get_delete() {
    let (app, _db) = create_test_router().await;

    let character = json!({
        "name": "Han Solo",
        "height": 180,
        "mass": 80,
        "hair_color": "brown",
        "skin_color": "fair",
        "eye_color": "brown",
        "birth_year": "29BBY",
        "gender": "male"
    });
    let response = send(&app, "POST", "/character", Some(character)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["result"].clone();
    assert_eq!(created["id"], 1);
    assert_eq!(created["birth_year"], "29BBY");

    let response = send(&app, "GET", "/character/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["result"], created);

    let response = send(&app, "DELETE", "/character/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["msg"], "Character deleted");

    let response = send(&app, "GET", "/character/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vehicle_validation() {
    let (app, _db) = create_test_router().await;

    let response = send(
        &app,
        "POST",
        "/vehicle",
        Some(json!({"name": "AT-AT", "crew": -5})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "POST", "/vehicle", Some(json!({"name": "AT-AT", "crew": 5}))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(send(&app, "GET", "/vehicles", None).await).await;
    assert_eq!(body["results"][0]["name"], "AT-AT");
}

#[tokio::test]
async fn test_favorites_flow() {
    let (app, _db) = create_test_router().await;

    send(&app, "POST", "/user", Some(luke())).await;
    send(&app, "POST", "/character", Some(json!({"name": "Yoda"}))).await;

    // Missing target
    let response = send(&app, "POST", "/user/1/favorite/planet/99", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Unknown kind
    let response = send(&app, "POST", "/user/1/favorite/starship/1", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "POST", "/user/1/favorite/character/1", None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let favorite = body_json(response).await["result"].clone();
    assert_eq!(favorite["target_kind"], "character");
    assert_eq!(favorite["target_id"], 1);

    let response = send(&app, "POST", "/user/1/favorite/character/1", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(send(&app, "GET", "/user/1/favorites", None).await).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 1);

    // Another user's id does not own the favorite
    let response = send(&app, "DELETE", "/user/2/favorite/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "DELETE", "/user/1/favorite/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(send(&app, "GET", "/user/1/favorites", None).await).await;
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn test_favorites_of_missing_user() {
    let (app, _db) = create_test_router().await;

    let response = send(&app, "GET", "/user/3/favorites", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (app, _db) = create_test_router().await;

    let request = Request::builder()
        .method("POST")
        .uri("/planet")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}
