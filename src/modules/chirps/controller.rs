use crate::middleware::auth::AuthUser;
use crate::docs::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chirpy_core::AppError;
use tracing::instrument;
use uuid::Uuid;

use super::model::{Chirp, CreateChirpRequest};
use super::service::ChirpService;

/// Post a chirp as the authenticated user
#[utoipa::path(
    post,
    path = "/api/chirps",
    request_body = CreateChirpRequest,
    responses(
        (status = 201, description = "Chirp created", body = Chirp),
        (status = 400, description = "Chirp is too long or body is malformed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Chirps"
)]
#[instrument(skip(state, dto))]
pub async fn create_chirp(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Chirp>), AppError> {
    let chirp = ChirpService::create_chirp(state.store.as_ref(), auth_user.user_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(chirp)))
}

/// List all chirps, oldest first
#[utoipa::path(
    get,
    path = "/api/chirps",
    responses(
        (status = 200, description = "All chirps", body = Vec<Chirp>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Chirps"
)]
#[instrument(skip(state))]
pub async fn list_chirps(State(state): State<AppState>) -> Result<Json<Vec<Chirp>>, AppError> {
    let chirps = ChirpService::list_chirps(state.store.as_ref()).await?;
    Ok(Json(chirps))
}

#[utoipa::path(
    get,
    path = "/api/chirps/{id}",
    params(("id" = Uuid, Path, description = "Chirp ID")),
    responses(
        (status = 200, description = "Chirp found", body = Chirp),
        (status = 404, description = "Chirp not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Chirps"
)]
#[instrument(skip(state))]
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Chirp>, AppError> {
    let chirp = ChirpService::get_chirp(state.store.as_ref(), id).await?;
    Ok(Json(chirp))
}

/// Delete one of the authenticated user's chirps
#[utoipa::path(
    delete,
    path = "/api/chirps/{id}",
    params(("id" = Uuid, Path, description = "Chirp ID")),
    responses(
        (status = 204, description = "Chirp deleted"),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Chirp belongs to another user", body = ErrorResponse),
        (status = 404, description = "Chirp not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Chirps"
)]
#[instrument(skip(state))]
pub async fn delete_chirp(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ChirpService::delete_chirp(state.store.as_ref(), id, auth_user.user_id()).await?;
    Ok(StatusCode::NO_CONTENT)
}
