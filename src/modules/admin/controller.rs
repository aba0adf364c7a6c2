use crate::docs::ErrorResponse;
use crate::state::AppState;
use anyhow::anyhow;
use axum::{extract::State, response::Html};
use chirpy_core::AppError;
use tracing::{instrument, warn};

/// Admin page showing how often the static app was served
#[utoipa::path(
    get,
    path = "/admin/metrics",
    responses(
        (status = 200, description = "HTML page with the visit count", body = String, content_type = "text/html")
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn show_metrics(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n  </body>\n</html>\n",
        state.hits.count()
    ))
}

/// Zero the visit counter and delete all users with their tokens and chirps
///
/// Only available when `PLATFORM=dev`.
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "Counter and store reset", body = String, content_type = "text/plain"),
        (status = 403, description = "Not running on the dev platform", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn reset(State(state): State<AppState>) -> Result<String, AppError> {
    if !state.platform.allows_reset() {
        warn!(platform = %state.platform, "reset refused");
        return Err(AppError::forbidden(anyhow!(
            "Reset is only available on the dev platform"
        )));
    }

    state.store.reset().await.map_err(AppError::internal)?;
    let previous = state.hits.reset();
    warn!(previous_hits = previous, "store and visit counter reset");

    Ok(format!(
        "Hits reset from: {previous}\nTo: 0\nDatabase reset."
    ))
}
