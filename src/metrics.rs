use axum::{
    Router,
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};
use tracing::error;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

/// Counts requests served by the static file server.
///
/// Lives in [`AppState`](crate::state::AppState) rather than a global so each
/// router (and each test) has its own.
#[derive(Debug, Default)]
pub struct VisitCounter {
    hits: AtomicU64,
}

impl VisitCounter {
    pub fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Zeroes the counter and returns the previous value.
    pub fn reset(&self) -> u64 {
        self.hits.swap(0, Ordering::Relaxed)
    }
}

/// Middleware for the `/app` file server: bumps the visit counter.
pub async fn count_visits(
    State(hits): State<Arc<VisitCounter>>,
    req: Request,
    next: Next,
) -> Response {
    hits.hit();
    if is_observability_enabled() {
        counter!("fileserver_hits_total").increment(1);
    }
    next.run(req).await
}

/// Initialize Prometheus metrics exporter with upkeep task
/// Returns None if observability is disabled or the recorder cannot be installed
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let builder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0,
            ],
        )
        .and_then(|b| {
            b.set_buckets_for_metric(
                Matcher::Full("password_hash_duration_seconds".to_string()),
                &[0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0],
            )
        });

    let handle = match builder.map(PrometheusBuilder::install_recorder) {
        Ok(Ok(handle)) => handle,
        Ok(Err(e)) => {
            error!(error = %e, "failed to install Prometheus recorder");
            return None;
        }
        Err(e) => {
            error!(error = %e, "invalid Prometheus bucket configuration");
            return None;
        }
    };

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let uri_path = req.uri().path().to_owned();

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or(uri_path);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status.to_string()).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router for metrics server
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Business metrics helpers

pub fn track_user_created() {
    if !is_observability_enabled() {
        return;
    }
    counter!("users_created_total").increment(1);
}

pub fn track_login_success() {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "status" => "success").increment(1);
}

pub fn track_login_failure(reason: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "status" => "failure", "reason" => reason).increment(1);
}

pub fn track_access_token_issued(source: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("access_tokens_issued_total", "source" => source).increment(1);
}

pub fn track_refresh_token_issued() {
    if !is_observability_enabled() {
        return;
    }
    counter!("refresh_tokens_issued_total").increment(1);
}

pub fn track_refresh_token_revoked() {
    if !is_observability_enabled() {
        return;
    }
    counter!("refresh_tokens_revoked_total").increment(1);
}

pub fn track_token_rejected(kind: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("auth_tokens_rejected_total", "kind" => kind).increment(1);
}

pub fn track_chirp_created() {
    if !is_observability_enabled() {
        return;
    }
    counter!("chirps_created_total").increment(1);
}

pub fn track_password_hash_duration(duration_secs: f64) {
    if !is_observability_enabled() {
        return;
    }
    histogram!("password_hash_duration_seconds").record(duration_secs);
}
