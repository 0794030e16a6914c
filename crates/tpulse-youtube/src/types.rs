//! YouTube Data API v3 wire types (the subset the dashboard reads).

use serde::Deserialize;
use tpulse_models::TrendingVideo;

/// Response of `GET /videos`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub snippet: Snippet,
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_at: String,
    pub category_id: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    pub high: Option<Thumbnail>,
    #[serde(rename = "default")]
    pub standard: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<String>,
}

impl Thumbnails {
    /// High resolution when present, else default resolution, else empty.
    pub fn best_url(&self) -> String {
        self.high
            .as_ref()
            .or(self.standard.as_ref())
            .map(|t| t.url.clone())
            .unwrap_or_default()
    }
}

impl VideoItem {
    /// Convert to the dashboard record.
    ///
    /// Listing pages leave the description out to keep chart payloads small;
    /// detail lookups keep it for the AI components.
    pub fn into_video(self, rank: Option<u32>, with_description: bool) -> TrendingVideo {
        let thumbnail = self.snippet.thumbnails.best_url();
        let view_count = self
            .statistics
            .and_then(|s| s.view_count)
            .unwrap_or_else(|| "0".to_string());

        TrendingVideo {
            id: self.id,
            title: self.snippet.title,
            channel_title: self.snippet.channel_title,
            thumbnail,
            view_count,
            published_at: self.snippet.published_at,
            category_id: self.snippet.category_id,
            description: with_description.then_some(self.snippet.description),
            rank,
        }
    }
}
