//! User entities and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A registered user as returned by the API. Never carries the password hash.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

/// A user row including the stored PHC hash. Internal only.
#[derive(FromRow, Clone)]
pub struct UserCredential {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub hashed_password: String,
}

impl UserCredential {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            email: self.email,
        }
    }
}

// Hand-written so the hash never reaches a log line.
impl std::fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredential")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("hashed_password", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "saul@bettercall.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "04234")]
    pub password: String,
}

#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
