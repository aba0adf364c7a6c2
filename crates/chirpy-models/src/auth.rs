//! Login, refresh and revoke payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::users::User;

/// Login credentials. Carries no validation rules: empty or absent fields
/// fall through to the credential check and fail with `401` like any other
/// wrong email or password.
#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "saul@bettercall.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "04234")]
    pub password: String,
}

/// Body returned by a successful login: the user plus both tokens.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    /// Short-lived signed access token.
    pub token: String,
    /// Opaque long-lived refresh token.
    pub refresh_token: String,
}

impl LoginResponse {
    pub fn new(user: User, token: String, refresh_token: String) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
            token,
            refresh_token,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let user = User {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            email: "saul@bettercall.com".to_string(),
        };
        let body = LoginResponse::new(user.clone(), "jwt".into(), "refresh".into());
        let value = serde_json::to_value(&body).unwrap();

        for key in ["id", "created_at", "updated_at", "email", "token", "refresh_token"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["id"], user.id.to_string());
    }

    #[test]
    fn test_login_request_accepts_absent_and_empty_fields() {
        let dto: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(dto.email.is_empty());
        assert!(dto.password.is_empty());
        assert!(dto.validate().is_ok());

        let dto: LoginRequest =
            serde_json::from_str(r#"{"email":"saul@bettercall.com","password":""}"#).unwrap();
        assert!(dto.validate().is_ok());
    }
}
