//! YouTube client error types.

use thiserror::Error;

pub type YoutubeResult<T> = Result<T, YoutubeError>;

#[derive(Debug, Error)]
pub enum YoutubeError {
    #[error("YouTube API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl YoutubeError {
    /// HTTP status code, when the failure came from a response.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            YoutubeError::Status { status, .. } => Some(*status),
            YoutubeError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            YoutubeError::Status { .. } => "status",
            YoutubeError::Network(_) => "network",
            YoutubeError::Json(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = YoutubeError::Status {
            status: 403,
            body: "quotaExceeded".into(),
        };
        assert_eq!(err.http_status(), Some(403));
        assert_eq!(err.kind(), "status");
        assert_eq!(err.to_string(), "YouTube API returned 403: quotaExceeded");
    }

    #[test]
    fn test_json_error_has_no_status() {
        let err: YoutubeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.http_status(), None);
        assert_eq!(err.kind(), "json");
    }
}
