//! Session lifecycle: login, refresh, revoke and per-request authentication.

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::Duration;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use chirpy_config::JwtConfig;
use chirpy_core::{AuthError, verify_dummy_password, verify_password};
use chirpy_db::Store;
use chirpy_models::{RefreshToken, User};

use crate::bearer::extract_bearer_token;
use crate::jwt::{issue_access_token, verify_access_token};
use crate::refresh::RefreshTokenIssuer;

/// Everything a successful login hands back to the client.
#[derive(Clone)]
pub struct LoginSession {
    pub user: User,
    pub access_token: String,
    pub refresh_token: RefreshToken,
}

#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn Store>,
    jwt_config: JwtConfig,
    refresh_tokens: RefreshTokenIssuer,
}

impl SessionManager {
    pub fn new(store: Arc<dyn Store>, jwt_config: JwtConfig) -> Self {
        let refresh_tokens = RefreshTokenIssuer::new(
            store.clone(),
            Duration::seconds(jwt_config.refresh_token_expiry),
        );

        Self {
            store,
            jwt_config,
            refresh_tokens,
        }
    }

    pub fn refresh_tokens(&self) -> &RefreshTokenIssuer {
        &self.refresh_tokens
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    /// Checks the password for `email` and opens a session.
    ///
    /// An unknown email, a wrong password and a stored hash that cannot be
    /// verified all fail the same way with [`AuthError::CredentialInvalid`].
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError> {
        let Some(credential) = self.store.get_user_by_email(email).await? else {
            verify_dummy_password(password);
            warn!("login for unknown email");
            return Err(AuthError::CredentialInvalid);
        };

        match verify_password(password, &credential.hashed_password) {
            Ok(true) => {}
            Ok(false) => {
                warn!(user_id = %credential.id, "login with wrong password");
                return Err(AuthError::CredentialInvalid);
            }
            Err(e) => {
                error!(user_id = %credential.id, error = %e, "stored password hash is unusable");
                return Err(AuthError::CredentialInvalid);
            }
        }

        let refresh_token = self.refresh_tokens.issue(credential.id).await?;
        let access_token = issue_access_token(credential.id, &self.jwt_config)?;

        info!(user_id = %credential.id, "user logged in");
        Ok(LoginSession {
            user: credential.into_user(),
            access_token,
            refresh_token,
        })
    }

    /// Mints a new access token from the refresh token in `headers`.
    ///
    /// The refresh token itself is left as is; it stays usable until revoked
    /// or expired.
    #[instrument(skip_all)]
    pub async fn refresh(&self, headers: &HeaderMap) -> Result<String, AuthError> {
        let token = extract_bearer_token(headers)?;
        let record = self.refresh_tokens.lookup(token).await?;

        let user = self
            .store
            .get_user_from_refresh_token(&record.token)
            .await?
            .ok_or(AuthError::TokenNotFound)?;

        issue_access_token(user.id, &self.jwt_config)
    }

    /// Revokes the live refresh token in `headers`.
    ///
    /// A token that is already revoked, expired or unknown is rejected by the
    /// lookup before anything is written.
    #[instrument(skip_all)]
    pub async fn revoke(&self, headers: &HeaderMap) -> Result<RefreshToken, AuthError> {
        let token = extract_bearer_token(headers)?;
        let record = self.refresh_tokens.lookup(token).await?;
        self.refresh_tokens.revoke(&record.token).await
    }

    /// Resolves the access token in `headers` to a user id. Never touches the store.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Uuid, AuthError> {
        let token = extract_bearer_token(headers)?;
        verify_access_token(token, &self.jwt_config)
    }
}
