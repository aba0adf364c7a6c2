use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::{login_user, refresh_access_token, revoke_refresh_token};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route("/refresh", post(refresh_access_token))
        .route("/revoke", post(revoke_refresh_token))
}
