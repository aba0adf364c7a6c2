//! # Chirpy Core
//!
//! Foundational types shared by every Chirpy crate:
//!
//! - [`errors`]: the HTTP-facing [`AppError`] and the authentication taxonomy [`AuthError`]
//! - [`password`]: Argon2id password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use chirpy_core::{AuthError, hash_password, verify_password};
//!
//! let hash = hash_password("04234")?;
//! assert!(verify_password("04234", &hash)?);
//! ```

pub mod errors;
pub mod password;

pub use errors::{AppError, AuthError};
pub use password::{hash_password, verify_dummy_password, verify_password};
