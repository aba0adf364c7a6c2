pub use chirpy_models::auth::{LoginRequest, LoginResponse, TokenResponse};
