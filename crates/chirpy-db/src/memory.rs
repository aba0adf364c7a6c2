use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use chirpy_models::{Chirp, NewRefreshToken, RefreshToken, User, UserCredential};

use crate::error::StoreError;
use crate::store::Store;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, UserCredential>,
    refresh_tokens: HashMap<String, RefreshToken>,
    chirps: Vec<Chirp>,
}

/// A [`Store`] held entirely in memory. Contents are lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == email) {
            return Err(StoreError::Conflict("email"));
        }

        let now = Utc::now();
        let credential = UserCredential {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
        };
        tables.users.insert(credential.id, credential.clone());

        Ok(credential.into_user())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserCredential>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn update_user_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == email && u.id != id) {
            return Err(StoreError::Conflict("email"));
        }

        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        user.email = email.to_string();
        user.hashed_password = hashed_password.to_string();
        user.updated_at = Utc::now();

        Ok(Some(user.clone().into_user()))
    }

    async fn create_refresh_token(
        &self,
        new: NewRefreshToken,
    ) -> Result<RefreshToken, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.refresh_tokens.contains_key(&new.token) {
            return Err(StoreError::Conflict("refresh token"));
        }

        let now = Utc::now();
        let record = RefreshToken {
            token: new.token,
            user_id: new.user_id,
            created_at: now,
            updated_at: now,
            expires_at: new.expires_at,
            revoked_at: None,
        };
        tables
            .refresh_tokens
            .insert(record.token.clone(), record.clone());

        Ok(record)
    }

    async fn get_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.refresh_tokens.get(token).cloned())
    }

    async fn revoke_refresh_token(
        &self,
        token: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<RefreshToken>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(record) = tables.refresh_tokens.get_mut(token) else {
            return Ok(None);
        };
        if record.revoked_at.is_none() {
            record.revoked_at = Some(at);
            record.updated_at = at;
        }

        Ok(Some(record.clone()))
    }

    async fn get_user_from_refresh_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        let user = tables
            .refresh_tokens
            .get(token)
            .and_then(|record| tables.users.get(&record.user_id))
            .cloned()
            .map(UserCredential::into_user);

        Ok(user)
    }

    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<Chirp, StoreError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let chirp = Chirp {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.to_string(),
            user_id,
        };
        tables.chirps.push(chirp.clone());

        Ok(chirp)
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError> {
        let tables = self.tables.read().await;
        let mut chirps = tables.chirps.clone();
        // stable: equal timestamps keep insertion order
        chirps.sort_by_key(|c| c.created_at);
        Ok(chirps)
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.chirps.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_chirp(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.chirps.len();
        tables.chirps.retain(|c| c.id != id);
        Ok(tables.chirps.len() < before)
    }

    async fn reset(&self) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        *tables = Tables::default();
        Ok(())
    }
}
