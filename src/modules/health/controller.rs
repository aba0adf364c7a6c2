/// Readiness probe
#[utoipa::path(
    get,
    path = "/api/healthz",
    responses((status = 200, description = "Service is up", body = String, content_type = "text/plain")),
    tag = "Health"
)]
pub async fn healthz() -> &'static str {
    "OK"
}
