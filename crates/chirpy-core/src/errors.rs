//! Error types for the Chirpy API.
//!
//! [`AuthError`] is the closed set of failures the authentication core can
//! produce. [`AppError`] is what handlers return; it carries an HTTP status
//! and renders as `{"error": "..."}`.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Failures raised while hashing credentials or issuing and checking tokens.
///
/// Every variant maps to either `401 Unauthorized` or `500 Internal Server Error`
/// (see [`AuthError::status`]). The message shown to clients never says which
/// check failed.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    CredentialInvalid,

    #[error("authorization header is missing")]
    TokenMissing,

    #[error("authorization header is malformed")]
    TokenMalformed,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token subject is not a valid user id")]
    MalformedSubject,

    #[error("token has expired")]
    TokenExpired,

    #[error("token has been revoked")]
    TokenRevoked,

    #[error("token not found")]
    TokenNotFound,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token signing failed: {0}")]
    Signing(String),

    #[error("secure random source failed: {0}")]
    Entropy(String),

    #[error("persistence error: {0}")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Hashing(_)
            | AuthError::Signing(_)
            | AuthError::Entropy(_)
            | AuthError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Message safe to return to API clients.
    pub fn client_message(&self) -> &'static str {
        match self {
            AuthError::CredentialInvalid => "Incorrect email or password",
            AuthError::TokenMissing
            | AuthError::TokenMalformed
            | AuthError::InvalidSignature
            | AuthError::MalformedSubject
            | AuthError::TokenExpired
            | AuthError::TokenRevoked
            | AuthError::TokenNotFound => "Invalid or expired token",
            _ => "Internal server error",
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    /// Message written into the response body.
    fn public_message(&self) -> String {
        if let Some(auth) = self.error.downcast_ref::<AuthError>() {
            return auth.client_message().to_string();
        }
        if self.status.is_server_error() {
            return "Internal server error".to_string();
        }
        self.error.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "request failed");
        }

        let body = Json(json!({
            "error": self.public_message()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        let error: Error = err.into();
        let status = error
            .downcast_ref::<AuthError>()
            .map(AuthError::status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        AppError { status, error }
    }
}
