//! Shared helpers for API integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`) over
//! a fresh in-memory store, and provides small request/response helpers
//! around `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bicicletario_api::config::ServerConfig;
use bicicletario_api::router::build_app_router;
use bicicletario_api::state::AppState;
use bicicletario_store::Store;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over a fresh, empty store.
///
/// Each call returns an independent system; clone the router to send
/// several requests against the same store.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(Store::new()),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST with no body (status transitions, lock/unlock without a bicycle).
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a bicycle through the API and return its id.
pub async fn create_bicycle(app: &Router, status: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/bicycles",
        serde_json::json!({
            "marca": "Caloi",
            "modelo": "Elite",
            "ano": "2023",
            "numero": 101,
            "status": status,
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a lock through the API and return its id.
pub async fn create_lock(app: &Router, status: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/locks",
        serde_json::json!({
            "numero": 1,
            "localizacao": "Praça Central",
            "anoDeFabricacao": "2022",
            "modelo": "T-100",
            "status": status,
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a totem through the API and return its id.
pub async fn create_totem(app: &Router) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/totems",
        serde_json::json!({
            "localizacao": "Av. Atlântica, 500",
            "descricao": "Totem da orla",
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
