use crate::modules::chirps::controller::{create_chirp, delete_chirp, get_chirp, list_chirps};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_chirps_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_chirps).post(create_chirp))
        .route("/{id}", get(get_chirp).delete(delete_chirp))
}
