//! Administrative commands run by the `chirpy-cli` binary.

use anyhow::{Context, bail};

use chirpy_config::Platform;
use chirpy_core::hash_password;
use chirpy_db::{Store, StoreError};
use chirpy_models::User;

/// Registers a user directly in the store, bypassing the HTTP API.
pub async fn create_user(store: &dyn Store, email: &str, password: &str) -> anyhow::Result<User> {
    if email.trim().is_empty() {
        bail!("Email must not be empty");
    }

    let hashed_password = hash_password(password).context("Failed to hash password")?;

    match store.create_user(email, &hashed_password).await {
        Ok(user) => Ok(user),
        Err(StoreError::Conflict(_)) => bail!("User with this email already exists"),
        Err(e) => Err(e).context("Failed to insert user"),
    }
}

/// Deletes every user, refresh token and chirp. Refused outside `dev`.
pub async fn reset(store: &dyn Store, platform: Platform) -> anyhow::Result<()> {
    if !platform.allows_reset() {
        bail!("Reset is only available when PLATFORM=dev (current: {platform})");
    }

    store.reset().await.context("Failed to reset store")
}
