//! Metrics and diagnostics for AI component outcomes.

use metrics::counter;
use tracing::{debug, warn};
use tpulse_models::{AiOutcome, DegradeReason};

/// Metric name constants for consistency.
pub mod names {
    /// AI component invocations by component and outcome.
    pub const AI_REQUESTS_TOTAL: &str = "tpulse_ai_requests_total";
}

/// Record how an AI component invocation ended.
///
/// Degradations are logged here so the components themselves stay silent
/// towards their callers.
pub fn record_outcome<T>(component: &'static str, outcome: &AiOutcome<T>) {
    counter!(
        names::AI_REQUESTS_TOTAL,
        "component" => component,
        "outcome" => outcome.label()
    )
    .increment(1);

    match outcome.reason() {
        None => debug!(component, "AI result generated"),
        Some(reason @ (DegradeReason::MissingCredential | DegradeReason::EmptyInput)) => {
            debug!(component, reason = %reason, "AI feature skipped")
        }
        Some(reason) => warn!(component, reason = %reason, "AI request failed, using fallback"),
    }
}
