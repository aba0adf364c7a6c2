pub mod admin;
pub mod auth;
pub mod chirps;
pub mod health;
pub mod users;

pub use self::auth::model::LoginRequest;
pub use self::users::model::User;
