//! Gemini client and AI-driven trend analysis.
//!
//! This crate provides:
//! - A single-shot structured-output client for the Gemini `generateContent` API
//! - A `TextGenerator` trait so components can run against fakes in tests
//! - The demographics refiner, hot keyword extractor and video summary generator
//!
//! Components take the generator as `Option<&dyn TextGenerator>`; `None` means
//! no credential is configured. They never return errors: every failure
//! degrades to a fallback value wrapped in [`tpulse_models::AiOutcome`].

pub mod client;
pub mod error;
pub mod generator;
pub mod json;
pub mod keywords;
pub mod metrics;
pub mod prompts;
pub mod refiner;
pub mod summary;

pub use client::{GeminiClient, GeminiConfig};
pub use error::{GeminiError, GeminiResult};
pub use generator::TextGenerator;
pub use keywords::{extract_hot_keywords, KEYWORD_SAMPLE_SIZE};
pub use refiner::refine_demographics;
pub use summary::summarize_video;

#[cfg(test)]
mod testing;
