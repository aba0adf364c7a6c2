//! # Chirpy Models
//!
//! Database entities and request/response DTOs for the Chirpy API.
//!
//! - [`users`]: users and their stored credentials
//! - [`refresh_tokens`]: persisted refresh-token records
//! - [`chirps`]: short messages posted by users
//! - [`auth`]: login, refresh and revoke payloads

pub mod auth;
pub mod chirps;
pub mod refresh_tokens;
pub mod users;

pub use auth::{LoginRequest, LoginResponse, TokenResponse};
pub use chirps::{Chirp, CreateChirpRequest, MAX_CHIRP_LENGTH};
pub use refresh_tokens::{NewRefreshToken, RefreshToken};
pub use users::{CreateUserRequest, UpdateUserRequest, User, UserCredential};
