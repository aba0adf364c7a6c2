use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use chirpy_models::{Chirp, NewRefreshToken, RefreshToken, User, UserCredential};

use crate::error::StoreError;

/// Persistence operations the API depends on.
///
/// Lookups return `Ok(None)` when nothing matches; `Err` is reserved for the
/// backend failing.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User, StoreError>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserCredential>, StoreError>;

    async fn update_user_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, StoreError>;

    async fn create_refresh_token(
        &self,
        new: NewRefreshToken,
    ) -> Result<RefreshToken, StoreError>;

    async fn get_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, StoreError>;

    /// Marks the token revoked at `at` unless it already is. The first
    /// revocation time is kept.
    async fn revoke_refresh_token(
        &self,
        token: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<RefreshToken>, StoreError>;

    async fn get_user_from_refresh_token(&self, token: &str) -> Result<Option<User>, StoreError>;

    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp, StoreError>;

    /// All chirps, oldest first.
    async fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError>;

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, StoreError>;

    /// Returns `false` if no chirp had that id.
    async fn delete_chirp(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Deletes every user and, by cascade, their tokens and chirps.
    async fn reset(&self) -> Result<(), StoreError>;
}
