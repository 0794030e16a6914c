//! Shared data models for TrendPulse backend.
//!
//! This crate provides Serde-serializable types for:
//! - Trending video records from the video listing service
//! - Category classification and heuristic audience demographics
//! - AI-derived hot keywords and video summaries
//! - The outcome wrapper every AI-driven component returns
//! - Display formatting for dashboard video cards

pub mod category;
pub mod demographics;
pub mod display;
pub mod keyword;
pub mod outcome;
pub mod summary;
pub mod video;

// Re-export common types
pub use category::{category_name, UNKNOWN_CATEGORY};
pub use demographics::{baseline, AgeShare, Demographics, GenderShare};
pub use display::{format_relative_time, format_view_count};
pub use keyword::{HotKeyword, TREND_POINTS};
pub use outcome::{AiOutcome, DegradeReason};
pub use summary::{VideoSummary, POPULAR_FACTOR_COUNT};
pub use video::TrendingVideo;
