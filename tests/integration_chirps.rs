mod common;

use axum::http::StatusCode;
use common::{empty_request, json_request, register_and_login, send, setup_test_app};
use serde_json::{Value, json};

async fn post_chirp(app: &axum::Router, token: &str, body: &str) -> (StatusCode, Value) {
    send(
        app,
        json_request("POST", "/api/chirps", &json!({ "body": body }), Some(token)),
    )
    .await
}

#[tokio::test]
async fn test_create_chirp_success() {
    let app = setup_test_app();
    let (access, _, user_id) = register_and_login(&app).await;

    let (status, body) = post_chirp(&app, &access, "I'm the one who knocks!").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["body"], "I'm the one who knocks!");
    assert_eq!(body["user_id"], user_id);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_create_chirp_requires_token() {
    let app = setup_test_app();

    let (status, _) = send(
        &app,
        json_request("POST", "/api/chirps", &json!({ "body": "hello" }), None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_chirp_too_long() {
    let app = setup_test_app();
    let (access, _, _) = register_and_login(&app).await;

    let (status, body) = post_chirp(&app, &access, &"a".repeat(141)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Chirp is too long");

    let (status, _) = post_chirp(&app, &access, &"a".repeat(140)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_chirp_censors_profanity() {
    let app = setup_test_app();
    let (access, _, _) = register_and_login(&app).await;

    let (status, body) = post_chirp(
        &app,
        &access,
        "I really need a kerfuffle to go to bed sooner, Fornax !",
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["body"],
        "I really need a **** to go to bed sooner, **** !"
    );
}

#[tokio::test]
async fn test_list_and_get_chirps() {
    let app = setup_test_app();
    let (access, _, _) = register_and_login(&app).await;

    let (_, first) = post_chirp(&app, &access, "first").await;
    let (_, second) = post_chirp(&app, &access, "second").await;

    let (status, body) = send(&app, empty_request("GET", "/api/chirps", None)).await;
    assert_eq!(status, StatusCode::OK);
    let chirps = body.as_array().unwrap();
    assert_eq!(chirps.len(), 2);
    assert_eq!(chirps[0]["id"], first["id"]);
    assert_eq!(chirps[1]["id"], second["id"]);

    let uri = format!("/api/chirps/{}", second["id"].as_str().unwrap());
    let (status, body) = send(&app, empty_request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"], "second");
}

#[tokio::test]
async fn test_get_missing_chirp() {
    let app = setup_test_app();
    let uri = format!("/api/chirps/{}", uuid::Uuid::new_v4());

    let (status, body) = send(&app, empty_request("GET", &uri, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Chirp not found");
}

#[tokio::test]
async fn test_delete_chirp_only_by_author() {
    let app = setup_test_app();
    let (author, _, _) = register_and_login(&app).await;
    let (stranger, _, _) = register_and_login(&app).await;

    let (_, chirp) = post_chirp(&app, &author, "mine").await;
    let uri = format!("/api/chirps/{}", chirp["id"].as_str().unwrap());

    let (status, _) = send(&app, empty_request("DELETE", &uri, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, empty_request("DELETE", &uri, Some(&stranger))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, empty_request("DELETE", &uri, Some(&author))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, empty_request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request("DELETE", &uri, Some(&author))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
