use std::time::Instant;

use anyhow::anyhow;
use tracing::{info, instrument};
use uuid::Uuid;

use chirpy_core::{AppError, hash_password};
use chirpy_db::{Store, StoreError};

use crate::metrics::{track_password_hash_duration, track_user_created};

use super::model::{CreateUserRequest, UpdateUserRequest, User};

pub struct UserService;

impl UserService {
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn create_user(store: &dyn Store, dto: CreateUserRequest) -> Result<User, AppError> {
        let hashed = timed_hash(&dto.password)?;

        let user = store
            .create_user(&dto.email, &hashed)
            .await
            .map_err(conflict_as_bad_request)?;

        track_user_created();
        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Replaces both email and password of `user_id`.
    #[instrument(skip(store, dto), fields(user_id = %user_id))]
    pub async fn update_user(
        store: &dyn Store,
        user_id: Uuid,
        dto: UpdateUserRequest,
    ) -> Result<User, AppError> {
        let hashed = timed_hash(&dto.password)?;

        store
            .update_user_credentials(user_id, &dto.email, &hashed)
            .await
            .map_err(conflict_as_bad_request)?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }
}

fn timed_hash(password: &str) -> Result<String, AppError> {
    let start = Instant::now();
    let hashed = hash_password(password)?;
    track_password_hash_duration(start.elapsed().as_secs_f64());
    Ok(hashed)
}

fn conflict_as_bad_request(err: StoreError) -> AppError {
    match err {
        StoreError::Conflict(_) => AppError::bad_request(anyhow!("Email already exists")),
        other => AppError::internal(other),
    }
}
