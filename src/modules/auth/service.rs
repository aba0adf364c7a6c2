use axum::http::HeaderMap;
use tracing::instrument;

use chirpy_auth::SessionManager;
use chirpy_core::{AppError, AuthError};

use crate::metrics::{
    track_access_token_issued, track_login_failure, track_login_success,
    track_refresh_token_issued, track_refresh_token_revoked, track_token_rejected,
};

use super::model::{LoginRequest, LoginResponse, TokenResponse};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(sessions, dto), fields(email = %dto.email))]
    pub async fn login_user(
        sessions: &SessionManager,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let session = sessions
            .login(&dto.email, &dto.password)
            .await
            .inspect_err(|e| {
                if matches!(e, AuthError::CredentialInvalid) {
                    track_login_failure("invalid_credentials");
                }
            })?;

        track_login_success();
        track_refresh_token_issued();
        track_access_token_issued("login");

        Ok(LoginResponse::new(
            session.user,
            session.access_token,
            session.refresh_token.token,
        ))
    }

    #[instrument(skip_all)]
    pub async fn refresh_access_token(
        sessions: &SessionManager,
        headers: &HeaderMap,
    ) -> Result<TokenResponse, AppError> {
        let token = sessions
            .refresh(headers)
            .await
            .inspect_err(|e| reject_metric(e))?;

        track_access_token_issued("refresh");
        Ok(TokenResponse { token })
    }

    #[instrument(skip_all)]
    pub async fn revoke_refresh_token(
        sessions: &SessionManager,
        headers: &HeaderMap,
    ) -> Result<(), AppError> {
        sessions
            .revoke(headers)
            .await
            .inspect_err(|e| reject_metric(e))?;

        track_refresh_token_revoked();
        Ok(())
    }
}

fn reject_metric(err: &AuthError) {
    let kind = match err {
        AuthError::TokenRevoked => "refresh_revoked",
        AuthError::TokenExpired => "refresh_expired",
        AuthError::TokenNotFound => "refresh_unknown",
        e if e.is_client_error() => "refresh_header",
        _ => return,
    };
    track_token_rejected(kind);
}
