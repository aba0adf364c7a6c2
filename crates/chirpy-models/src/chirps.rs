//! Chirp entities and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Longest accepted chirp body, counted in Unicode scalar values.
pub const MAX_CHIRP_LENGTH: usize = 140;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

/// Length is checked by the chirps service, which answers `400` rather than `422`.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateChirpRequest {
    #[schema(example = "I'm the one who knocks!")]
    pub body: String,
}
