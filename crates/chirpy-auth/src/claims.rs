//! Claims carried by access tokens.

use serde::{Deserialize, Serialize};

/// Value of the `iss` claim on every token this service mints.
pub const TOKEN_ISSUER: &str = "chirpy";

/// Access token claims.
///
/// `sub` is the user id as a hyphenated UUID. `jti` is random per token so two
/// tokens minted for the same user within the same second still differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    pub jti: String,
}
