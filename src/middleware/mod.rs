//! Request extractors shared by the feature modules.
//!
//! - [`auth`]: [`AuthUser`](auth::AuthUser), the authenticated caller's id
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn whoami(AuthUser(user_id): AuthUser) -> String {
//!     user_id.to_string()
//! }
//! ```

pub mod auth;
