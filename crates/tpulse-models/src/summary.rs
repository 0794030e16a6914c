//! AI video summary models.

use serde::{Deserialize, Serialize};

/// Number of popularity factors in a summary.
pub const POPULAR_FACTOR_COUNT: usize = 3;

/// A one-line tagline plus the reasons a video is popular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub one_liner: String,
    pub popular_factor: [String; POPULAR_FACTOR_COUNT],
}
