//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Instant;

/// Install the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "tpulse_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "tpulse_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "tpulse_http_requests_in_flight";

    // Insights boards
    pub const INSIGHT_BOARDS_ACTIVE: &str = "tpulse_insight_boards_active";
    pub const INSIGHT_SESSIONS_TOTAL: &str = "tpulse_insight_sessions_total";
    pub const STALE_RESULTS_TOTAL: &str = "tpulse_stale_results_total";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "tpulse_rate_limit_hits_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Update the number of boards held in memory.
pub fn set_active_boards(count: usize) {
    gauge!(names::INSIGHT_BOARDS_ACTIVE).set(count as f64);
}

/// Record a new analysis session (video selected or cleared).
pub fn record_session_started(kind: &'static str) {
    counter!(names::INSIGHT_SESSIONS_TOTAL, "kind" => kind).increment(1);
}

/// Record a result that arrived after its session was replaced.
pub fn record_stale_result(slot: &'static str) {
    counter!(names::STALE_RESULTS_TOTAL, "slot" => slot).increment(1);
}

/// Record rate limit hit.
pub fn record_rate_limit_hit(endpoint: &str) {
    let labels = [("endpoint", sanitize_path(endpoint))];
    counter!(names::RATE_LIMIT_HITS_TOTAL, &labels).increment(1);
}

/// Sanitize path for metrics labels (collapse client-chosen ids).
fn sanitize_path(path: &str) -> String {
    static BOARD: OnceLock<regex_lite::Regex> = OnceLock::new();
    static CATEGORY: OnceLock<regex_lite::Regex> = OnceLock::new();

    let board = BOARD.get_or_init(|| {
        regex_lite::Regex::new(r"/insights/[^/]+").expect("valid board path regex")
    });
    let category = CATEGORY.get_or_init(|| {
        regex_lite::Regex::new(r"/categories/[^/]+").expect("valid category path regex")
    });

    let path = board.replace_all(path, "/insights/:board_id");
    category.replace_all(&path, "/categories/:id").to_string()
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
