//! YouTube Data API client.
//!
//! This crate provides:
//! - Paged retrieval of the regional trending chart
//! - Single video detail lookup
//! - A `VideoSource` trait so the dashboard can run against fakes in tests

pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::{YoutubeClient, YoutubeConfig, MAX_RESULTS_PER_PAGE};
pub use error::{YoutubeError, YoutubeResult};
pub use source::VideoSource;
