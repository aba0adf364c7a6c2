//! # Chirpy Auth
//!
//! The authentication and session-lifecycle core of the Chirpy API.
//!
//! - [`jwt`]: stateless access tokens (HS256 JWTs carrying the user id)
//! - [`refresh`]: opaque, persisted refresh tokens and their revocation
//! - [`bearer`]: pulling a token out of an `Authorization: Bearer` header
//! - [`session`]: login, refresh, revoke and authenticate, composed from the above
//!
//! Access tokens are never stored; a revoked refresh token therefore does not
//! invalidate access tokens minted before the revocation. They simply run out.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use chirpy_auth::SessionManager;
//! use chirpy_config::JwtConfig;
//! use chirpy_db::MemoryStore;
//!
//! let sessions = SessionManager::new(Arc::new(MemoryStore::new()), JwtConfig::from_env());
//! let session = sessions.login("saul@bettercall.com", "04234").await?;
//! println!("{}", session.access_token);
//! ```

pub mod bearer;
pub mod claims;
pub mod jwt;
pub mod refresh;
pub mod session;

pub use bearer::extract_bearer_token;
pub use claims::{Claims, TOKEN_ISSUER};
pub use jwt::{create_access_token, validate_access_token};
pub use refresh::{RefreshTokenIssuer, generate_refresh_token};
pub use session::{LoginSession, SessionManager};
