mod common;

use axum::http::StatusCode;
use common::{
    TEST_PASSWORD, create_user, generate_unique_email, json_request, login, register_and_login,
    send, setup_test_app,
};
use serde_json::json;

#[tokio::test]
async fn test_create_user_success() {
    let app = setup_test_app();
    let email = generate_unique_email();

    let body = create_user(&app, &email, TEST_PASSWORD).await;

    assert_eq!(body["email"], email);
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = setup_test_app();
    let email = generate_unique_email();
    create_user(&app, &email, TEST_PASSWORD).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/users",
            &json!({ "email": email, "password": "other" }),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let app = setup_test_app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/users",
            &json!({ "email": "not-an-email", "password": TEST_PASSWORD }),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "email must be a valid email address");
}

#[tokio::test]
async fn test_create_user_without_json_content_type() {
    let app = setup_test_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/users")
        .body(axum::body::Body::from(r#"{"email":"a@b.com","password":"x"}"#))
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user_changes_credentials() {
    let app = setup_test_app();
    let (access, _, user_id) = register_and_login(&app).await;
    let new_email = generate_unique_email();

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/api/users",
            &json!({ "email": new_email, "password": "newpass" }),
            Some(&access),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user_id);
    assert_eq!(body["email"], new_email);

    let body = login(&app, &new_email, "newpass").await;
    assert_eq!(body["id"], user_id);

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/login",
            &json!({ "email": new_email, "password": TEST_PASSWORD }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_user_requires_access_token() {
    let app = setup_test_app();

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/api/users",
            &json!({ "email": "a@b.com", "password": "x" }),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_update_user_rejects_foreign_token() {
    let app = setup_test_app();
    let token = chirpy::chirpy_auth::create_access_token(
        uuid::Uuid::new_v4(),
        b"some-other-secret",
        chrono::Duration::hours(1),
    )
    .unwrap();

    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            "/api/users",
            &json!({ "email": "a@b.com", "password": "x" }),
            Some(&token),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_user_to_taken_email() {
    let app = setup_test_app();
    let taken = generate_unique_email();
    create_user(&app, &taken, TEST_PASSWORD).await;
    let (access, _, _) = register_and_login(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/api/users",
            &json!({ "email": taken, "password": "x" }),
            Some(&access),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already exists");
}
