#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chirpy::chirpy_config::{JwtConfig, Platform};
use chirpy::chirpy_db::MemoryStore;
use chirpy::router::init_router;
use chirpy::state::AppState;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";
pub const TEST_PASSWORD: &str = "04234";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 60 * 24 * 3600,
    }
}

pub fn test_state(platform: Platform) -> AppState {
    let fixtures = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/app");
    AppState::new(Arc::new(MemoryStore::new()), test_jwt_config(), platform)
        .with_fileserver_root(fixtures)
}

/// Router backed by a fresh in-memory store on the dev platform.
pub fn setup_test_app() -> Router {
    init_router(test_state(Platform::Dev))
}

pub fn generate_unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

pub fn json_request(method: &str, uri: &str, body: &Value, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Sends `request` and returns the status and raw body.
pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Sends `request` and parses the body as JSON; an empty body becomes `Null`.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send_raw(app, request).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap()
    };
    (status, value)
}

pub async fn create_user(app: &Router, email: &str, password: &str) -> Value {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/users",
            &serde_json::json!({ "email": email, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

pub async fn login(app: &Router, email: &str, password: &str) -> Value {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/login",
            &serde_json::json!({ "email": email, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}

/// Registers a fresh user and logs in. Returns `(access_token, refresh_token, user_id)`.
pub async fn register_and_login(app: &Router) -> (String, String, String) {
    let email = generate_unique_email();
    create_user(app, &email, TEST_PASSWORD).await;
    let body = login(app, &email, TEST_PASSWORD).await;
    (
        body["token"].as_str().unwrap().to_string(),
        body["refresh_token"].as_str().unwrap().to_string(),
        body["id"].as_str().unwrap().to_string(),
    )
}
