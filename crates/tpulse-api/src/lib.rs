//! Axum HTTP API server.
//!
//! This crate provides:
//! - Trending feeds and hot keywords for the dashboard home and trends views
//! - Insights boards: per-video analysis sessions with a heuristic baseline,
//!   asynchronous AI refinement and a stale-response guard
//! - Rate limiting and security headers
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{BoardRegistry, InsightsBoard};
pub use state::AppState;
