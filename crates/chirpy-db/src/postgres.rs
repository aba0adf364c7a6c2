use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use chirpy_models::{Chirp, NewRefreshToken, RefreshToken, User, UserCredential};

use crate::error::StoreError;
use crate::store::Store;

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    #[instrument(skip(self, hashed_password))]
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, created_at, updated_at, email, hashed_password)
             VALUES (gen_random_uuid(), NOW(), NOW(), $1, $2)
             RETURNING id, created_at, updated_at, email",
        )
        .bind(email)
        .bind(hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_insert(e, "email"))
    }

    #[instrument(skip(self))]
    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserCredential>, StoreError> {
        let user = sqlx::query_as::<_, UserCredential>(
            "SELECT id, created_at, updated_at, email, hashed_password
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self, hashed_password))]
    async fn update_user_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email = $2, hashed_password = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING id, created_at, updated_at, email",
        )
        .bind(id)
        .bind(email)
        .bind(hashed_password)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::from_insert(e, "email"))
    }

    #[instrument(skip(self, new), fields(user_id = %new.user_id))]
    async fn create_refresh_token(
        &self,
        new: NewRefreshToken,
    ) -> Result<RefreshToken, StoreError> {
        sqlx::query_as::<_, RefreshToken>(
            "INSERT INTO refresh_tokens (token, user_id, created_at, updated_at, expires_at, revoked_at)
             VALUES ($1, $2, NOW(), NOW(), $3, NULL)
             RETURNING token, user_id, created_at, updated_at, expires_at, revoked_at",
        )
        .bind(&new.token)
        .bind(new.user_id)
        .bind(new.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_insert(e, "refresh token"))
    }

    #[instrument(skip_all)]
    async fn get_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, StoreError> {
        let record = sqlx::query_as::<_, RefreshToken>(
            "SELECT token, user_id, created_at, updated_at, expires_at, revoked_at
             FROM refresh_tokens WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    #[instrument(skip(self, token))]
    async fn revoke_refresh_token(
        &self,
        token: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<RefreshToken>, StoreError> {
        let record = sqlx::query_as::<_, RefreshToken>(
            "UPDATE refresh_tokens
             SET updated_at = CASE WHEN revoked_at IS NULL THEN $2 ELSE updated_at END,
                 revoked_at = COALESCE(revoked_at, $2)
             WHERE token = $1
             RETURNING token, user_id, created_at, updated_at, expires_at, revoked_at",
        )
        .bind(token)
        .bind(at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    #[instrument(skip_all)]
    async fn get_user_from_refresh_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT u.id, u.created_at, u.updated_at, u.email
             FROM users u
             JOIN refresh_tokens rt ON rt.user_id = u.id
             WHERE rt.token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self, body))]
    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp, StoreError> {
        let chirp = sqlx::query_as::<_, Chirp>(
            "INSERT INTO chirps (id, created_at, updated_at, body, user_id)
             VALUES (gen_random_uuid(), NOW(), NOW(), $1, $2)
             RETURNING id, created_at, updated_at, body, user_id",
        )
        .bind(body)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(chirp)
    }

    #[instrument(skip(self))]
    async fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError> {
        let chirps = sqlx::query_as::<_, Chirp>(
            "SELECT id, created_at, updated_at, body, user_id
             FROM chirps ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(chirps)
    }

    #[instrument(skip(self))]
    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, StoreError> {
        let chirp = sqlx::query_as::<_, Chirp>(
            "SELECT id, created_at, updated_at, body, user_id FROM chirps WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(chirp)
    }

    #[instrument(skip(self))]
    async fn delete_chirp(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn reset(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;
        Ok(())
    }
}
