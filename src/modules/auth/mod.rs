//! Login, access-token refresh and refresh-token revocation.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
