use crate::modules::admin::controller::{reset, show_metrics};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(show_metrics))
        .route("/reset", post(reset))
}
