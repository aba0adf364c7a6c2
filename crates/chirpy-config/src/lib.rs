//! # Chirpy Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetimes
//! - [`cors`]: allowed browser origins
//! - [`platform`]: deployment platform (gates the destructive reset)
//! - [`server`]: bind addresses, static file root and storage backend
//!
//! # Example
//!
//! ```ignore
//! use chirpy_config::{CorsConfig, JwtConfig, Platform, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let platform = Platform::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod platform;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use platform::Platform;
pub use server::{ServerConfig, StoreBackend};
