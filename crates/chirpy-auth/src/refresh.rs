//! Opaque refresh tokens.
//!
//! A refresh token is 32 bytes from the operating system's CSPRNG, hex encoded.
//! Unlike access tokens it carries no meaning on its own: every use goes back
//! to the [`Store`] to check it exists, is unrevoked and has not expired.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::{RngCore, rngs::OsRng};
use tracing::{info, instrument};
use uuid::Uuid;

use chirpy_core::AuthError;
use chirpy_db::Store;
use chirpy_models::{NewRefreshToken, RefreshToken};

/// Number of random bytes in a refresh token (64 hex characters).
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Produces a fresh token value. Does not persist anything.
///
/// # Errors
///
/// [`AuthError::Entropy`] if the OS random source fails.
pub fn generate_refresh_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::Entropy(e.to_string()))?;

    Ok(hex::encode(bytes))
}

/// Issues, looks up and revokes persisted refresh tokens.
#[derive(Clone)]
pub struct RefreshTokenIssuer {
    store: Arc<dyn Store>,
    lifetime: Duration,
}

impl RefreshTokenIssuer {
    pub fn new(store: Arc<dyn Store>, lifetime: Duration) -> Self {
        Self { store, lifetime }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Generates a token for `user_id` and stores it, unrevoked, expiring
    /// after the configured lifetime.
    #[instrument(skip(self))]
    pub async fn issue(&self, user_id: Uuid) -> Result<RefreshToken, AuthError> {
        let token = generate_refresh_token()?;
        let record = self
            .store
            .create_refresh_token(NewRefreshToken {
                token,
                user_id,
                expires_at: Utc::now() + self.lifetime,
            })
            .await?;

        Ok(record)
    }

    /// Returns the record for `token` if it can still be used.
    ///
    /// Revocation is reported ahead of expiry.
    #[instrument(skip_all)]
    pub async fn lookup(&self, token: &str) -> Result<RefreshToken, AuthError> {
        let record = self
            .store
            .get_refresh_token(token)
            .await?
            .ok_or(AuthError::TokenNotFound)?;

        if record.is_revoked() {
            return Err(AuthError::TokenRevoked);
        }
        if record.is_expired_at(Utc::now()) {
            return Err(AuthError::TokenExpired);
        }

        Ok(record)
    }

    /// Marks `token` revoked. Revoking an already revoked token leaves its
    /// first `revoked_at` untouched.
    #[instrument(skip_all)]
    pub async fn revoke(&self, token: &str) -> Result<RefreshToken, AuthError> {
        let record = self
            .store
            .revoke_refresh_token(token, Utc::now())
            .await?
            .ok_or(AuthError::TokenNotFound)?;

        info!(user_id = %record.user_id, "refresh token revoked");
        Ok(record)
    }
}
