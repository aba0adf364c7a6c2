use crate::docs::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use chirpy_core::AppError;
use tracing::instrument;

use super::model::{LoginRequest, LoginResponse, TokenResponse};
use super::service::AuthService;

/// Log in with email and password
///
/// Returns the user together with a short-lived access token and a long-lived
/// refresh token.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Incorrect, empty or missing email or password", body = ErrorResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(&state.sessions, dto).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new access token
///
/// The refresh token is sent as `Authorization: Bearer <refresh_token>` and is
/// not consumed.
#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "New access token", body = TokenResponse),
        (status = 401, description = "Missing, unknown, expired or revoked refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn refresh_access_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::refresh_access_token(&state.sessions, &headers).await?;
    Ok(Json(response))
}

/// Revoke a refresh token
#[utoipa::path(
    post,
    path = "/api/revoke",
    responses(
        (status = 204, description = "Refresh token revoked"),
        (status = 401, description = "Missing, unknown, expired or already revoked refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn revoke_refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    AuthService::revoke_refresh_token(&state.sessions, &headers).await?;
    Ok(StatusCode::NO_CONTENT)
}
