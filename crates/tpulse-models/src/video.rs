//! Trending video records.

use serde::{Deserialize, Serialize};

/// A video as consumed from the listing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingVideo {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    /// High-resolution thumbnail when available, else the default one
    pub thumbnail: String,
    /// Decimal string as returned upstream
    pub view_count: String,
    /// RFC 3339 timestamp
    pub published_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 1-based position in the trending chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl TrendingVideo {
    /// Category id, or "0" when the listing omitted it.
    pub fn category_or_default(&self) -> &str {
        self.category_id.as_deref().unwrap_or("0")
    }

    /// Description, or an empty string when the listing omitted it.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
