//! End-to-end tests for the genre HTTP API.
//!
//! These tests drive the full router over an in-memory SQLite store and
//! verify the status codes and JSON bodies of every route.
//!
//! This test requires the `sqlite` feature flag.

#![cfg(feature = "sqlite")]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use genre_hex::{GenreService, inbound::HttpServer};
use genre_repo::SqliteRepo;

/// Helper to create a test server backed by in-memory SQLite.
async fn create_test_app() -> axum::Router {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    let service = GenreService::new(repo);
    HttpServer::new(service).router()
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_genre_crud_lifecycle() {
    let app = create_test_app().await;

    // POST {"name":"Sci-Fi"} -> 201 with slug "sci-fi"
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/genres", r#"{"name":"Sci-Fi"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Sci-Fi");
    assert_eq!(created["slug"], "sci-fi");

    // GET /genres/sci-fi -> 200 with the same object
    let response = app
        .clone()
        .oneshot(get_request("/genres/sci-fi"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["created_at"], created["created_at"]);

    // PUT /genres/sci-fi {"name":"Science Fiction"} -> 200 with new slug
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/genres/sci-fi",
            r#"{"name":"Science Fiction"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["slug"], "science-fiction");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);

    // DELETE /genres/science-fiction -> 204, no body
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/genres/science-fiction")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    // GET /genres/science-fiction -> 404
    let response = app
        .clone()
        .oneshot(get_request("/genres/science-fiction"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_empty_returns_json_array() {
    let app = create_test_app().await;

    let response = app.oneshot(get_request("/genres")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_is_ordered_by_name() {
    let app = create_test_app().await;

    for name in ["Romance", "Action", "Horror"] {
        let body = serde_json::json!({ "name": name }).to_string();
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/genres", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get_request("/genres")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Action", "Horror", "Romance"]);
}

#[tokio::test]
async fn test_create_blank_name_returns_400() {
    let app = create_test_app().await;

    let response = app
        .oneshot(json_request(Method::POST, "/genres", r#"{"name":"   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_create_malformed_body_returns_400() {
    let app = create_test_app().await;

    let response = app
        .oneshot(json_request(Method::POST, "/genres", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_slug_returns_409() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/genres", r#"{"name":"Isekai"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Normalizes to the same slug
    let response = app
        .oneshot(json_request(Method::POST, "/genres", r#"{"name":"ISEKAI"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], 409);
}

#[tokio::test]
async fn test_update_onto_existing_slug_returns_409() {
    let app = create_test_app().await;

    for name in ["Action", "Horror"] {
        let body = serde_json::json!({ "name": name }).to_string();
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/genres", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Renaming Horror to Action collides with the existing slug
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/genres/horror",
            r#"{"name":"Action"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], 409);

    // The genre keeps its old name and slug
    let response = app.oneshot(get_request("/genres/horror")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Horror");
}

#[tokio::test]
async fn test_update_missing_genre_returns_404() {
    let app = create_test_app().await;

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/genres/missing",
            r#"{"name":"Anything"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_genre_returns_404() {
    let app = create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/genres/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
