use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use chirpy_core::{AppError, AuthError};

use crate::metrics::track_token_rejected;
use crate::state::AppState;

/// The user id carried by a valid access token in `Authorization: Bearer`.
///
/// Rejects with `401` when the header is missing or malformed, or when the
/// token fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = state
            .sessions
            .authenticate(&parts.headers)
            .inspect_err(|e| {
                track_token_rejected(rejection_kind(e));
                tracing::debug!(error = %e, "access token rejected");
            })?;

        Ok(AuthUser(user_id))
    }
}

fn rejection_kind(err: &AuthError) -> &'static str {
    match err {
        AuthError::TokenMissing => "missing",
        AuthError::TokenMalformed => "malformed",
        AuthError::InvalidSignature => "signature",
        AuthError::TokenExpired => "expired",
        AuthError::MalformedSubject => "subject",
        _ => "other",
    }
}
