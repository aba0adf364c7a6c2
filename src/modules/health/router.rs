use crate::modules::health::controller::healthz;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}
