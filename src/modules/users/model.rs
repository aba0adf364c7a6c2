pub use chirpy_models::users::{CreateUserRequest, UpdateUserRequest, User};
