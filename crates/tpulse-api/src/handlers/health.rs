//! Health check handlers.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint for liveness checks.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check response.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub youtube: CheckStatus,
    pub gemini: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckStatus {
    fn configured() -> Self {
        Self {
            status: "ok".to_string(),
            detail: None,
        }
    }

    fn missing(detail: impl Into<String>) -> Self {
        Self {
            status: "not_configured".to_string(),
            detail: Some(detail.into()),
        }
    }
}

/// Readiness check endpoint.
///
/// Missing credentials never make the server unready: the dashboard degrades
/// to empty feeds and heuristic estimates, so this only reports them.
pub async fn ready(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let youtube = if state.videos.is_some() {
        CheckStatus::configured()
    } else {
        CheckStatus::missing("YOUTUBE_API_KEY is not set; feeds will be empty")
    };

    let gemini = if state.generator.is_some() {
        CheckStatus::configured()
    } else {
        CheckStatus::missing("GEMINI_API_KEY is not set; AI analysis falls back to heuristics")
    };

    let degraded = state.videos.is_none() || state.generator.is_none();

    Json(ReadinessResponse {
        status: if degraded { "degraded" } else { "ready" }.to_string(),
        checks: ReadinessChecks { youtube, gemini },
    })
}
