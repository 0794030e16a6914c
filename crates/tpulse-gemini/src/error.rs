//! Gemini client error types.

use thiserror::Error;
use tpulse_models::DegradeReason;

pub type GeminiResult<T> = Result<T, GeminiError>;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("No content in Gemini response")]
    EmptyResponse,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeminiError {
    /// Classify the failure for the caller's fallback.
    pub fn degrade_reason(&self) -> DegradeReason {
        match self {
            GeminiError::Status { .. } | GeminiError::Network(_) => {
                DegradeReason::Transport(self.to_string())
            }
            GeminiError::EmptyResponse | GeminiError::Json(_) => {
                DegradeReason::MalformedResponse(self.to_string())
            }
        }
    }
}
