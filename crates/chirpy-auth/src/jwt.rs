//! Access token creation and validation.
//!
//! Tokens are HS256 JWTs signed with the server secret. Validation checks the
//! signature, then expiry with zero leeway, then that the subject parses as a
//! user id. Each failure maps to its own [`AuthError`] variant so callers can
//! log precisely while still answering clients with a single generic 401.
//!
//! # Example
//!
//! ```ignore
//! use chirpy_auth::{create_access_token, validate_access_token};
//!
//! let token = create_access_token(user_id, b"secret", chrono::Duration::hours(1))?;
//! assert_eq!(validate_access_token(&token, b"secret")?, user_id);
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use uuid::Uuid;

use chirpy_config::JwtConfig;
use chirpy_core::AuthError;

use crate::claims::{Claims, TOKEN_ISSUER};

/// Mints a signed access token for `user_id` that expires `ttl` from now.
///
/// Claims carry whole seconds: `exp` is `iat` plus `ttl` truncated to whole
/// seconds, so any `ttl` under one second (zero or negative included) yields
/// a token that is already expired.
///
/// # Errors
///
/// [`AuthError::Signing`] if the encoder fails.
pub fn create_access_token(user_id: Uuid, secret: &[u8], ttl: Duration) -> Result<String, AuthError> {
    let iat = Utc::now().timestamp();

    let claims = Claims {
        iss: TOKEN_ISSUER.to_string(),
        sub: user_id.to_string(),
        iat,
        exp: iat.saturating_add(ttl.num_seconds()),
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Verifies `token` and returns the user id it was minted for.
///
/// # Errors
///
/// - [`AuthError::InvalidSignature`] if the HMAC does not match `secret`
/// - [`AuthError::TokenExpired`] once `now >= exp`
/// - [`AuthError::MalformedSubject`] if `sub` is not a UUID
/// - [`AuthError::TokenMalformed`] for anything structurally wrong
pub fn validate_access_token(token: &str, secret: &[u8]) -> Result<Uuid, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // expiry is checked below with zero leeway
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub", "iss"]);

    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation).map_err(
        |e| match e.kind() {
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::TokenMalformed,
        },
    )?;

    if Utc::now().timestamp() >= data.claims.exp {
        return Err(AuthError::TokenExpired);
    }

    Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::MalformedSubject)
}

/// [`create_access_token`] using the configured secret and access lifetime.
pub fn issue_access_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    create_access_token(
        user_id,
        jwt_config.secret.as_bytes(),
        Duration::seconds(jwt_config.access_token_expiry),
    )
}

/// [`validate_access_token`] using the configured secret.
pub fn verify_access_token(token: &str, jwt_config: &JwtConfig) -> Result<Uuid, AuthError> {
    validate_access_token(token, jwt_config.secret.as_bytes())
}
