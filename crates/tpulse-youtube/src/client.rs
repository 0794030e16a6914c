//! YouTube Data API HTTP client.

use async_trait::async_trait;
use metrics::counter;
use reqwest::Client;
use tracing::{debug, warn};

use tpulse_models::TrendingVideo;

use crate::error::{YoutubeError, YoutubeResult};
use crate::source::VideoSource;
use crate::types::VideoListResponse;

/// Largest page the videos endpoint serves.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_REGION: &str = "KR";
const REQUESTS_TOTAL: &str = "tpulse_youtube_requests_total";

/// Configuration for the YouTube client.
#[derive(Debug, Clone)]
pub struct YoutubeConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Base URL of the Data API
    pub base_url: String,
    /// Region used when a request does not name one
    pub default_region: String,
}

impl YoutubeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_region: DEFAULT_REGION.to_string(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Returns `None` when `YOUTUBE_API_KEY` is unset or empty: the listing
    /// feature is then unavailable and no request is ever attempted.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;

        Some(Self {
            api_key,
            base_url: std::env::var("YOUTUBE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            default_region: std::env::var("YOUTUBE_REGION")
                .unwrap_or_else(|_| DEFAULT_REGION.to_string()),
        })
    }
}

/// Client for the YouTube Data API `videos` endpoint.
pub struct YoutubeClient {
    http: Client,
    config: YoutubeConfig,
}

impl YoutubeClient {
    /// Create a new YouTube client.
    pub fn new(config: YoutubeConfig) -> YoutubeResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("tpulse-youtube/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(YoutubeError::Network)?;

        Ok(Self { http, config })
    }

    async fn fetch_page(&self, query: &[(&str, &str)]) -> YoutubeResult<VideoListResponse> {
        let url = format!("{}/videos", self.config.base_url.trim_end_matches('/'));

        let response = self
            .http
            .get(&url)
            .query(&[("part", "snippet,statistics")])
            .query(query)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(YoutubeError::Status { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_trending(
        &self,
        region_code: &str,
        limit: u32,
    ) -> YoutubeResult<Vec<TrendingVideo>> {
        let pages = limit.div_ceil(MAX_RESULTS_PER_PAGE);
        let mut videos: Vec<TrendingVideo> = Vec::with_capacity(limit as usize);
        let mut page_token: Option<String> = None;

        for page in 0..pages {
            let remaining = limit.saturating_sub(videos.len() as u32);
            if remaining == 0 {
                break;
            }
            let max_results = remaining.min(MAX_RESULTS_PER_PAGE).to_string();

            debug!(
                region = region_code,
                page,
                max_results = %max_results,
                "Fetching trending page"
            );
            let response = {
                let mut query = vec![
                    ("chart", "mostPopular"),
                    ("regionCode", region_code),
                    ("maxResults", max_results.as_str()),
                ];
                if let Some(token) = page_token.as_deref() {
                    query.push(("pageToken", token));
                }
                self.fetch_page(&query).await?
            };

            for item in response.items {
                let rank = videos.len() as u32 + 1;
                videos.push(item.into_video(Some(rank), false));
            }

            match response.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(videos)
    }
}

fn record(operation: &'static str, outcome: &'static str) {
    counter!(REQUESTS_TOTAL, "operation" => operation, "outcome" => outcome).increment(1);
}

#[async_trait]
impl VideoSource for YoutubeClient {
    async fn trending(&self, region_code: &str, limit: u32) -> YoutubeResult<Vec<TrendingVideo>> {
        let result = self.fetch_trending(region_code, limit).await;
        match &result {
            Ok(videos) => {
                record("trending", "ok");
                debug!(region = region_code, count = videos.len(), "Fetched trending videos");
            }
            Err(e) => {
                record("trending", e.kind());
                warn!(region = region_code, error = %e, "Failed to fetch trending videos");
            }
        }
        result
    }

    async fn video_details(&self, video_id: &str) -> YoutubeResult<Option<TrendingVideo>> {
        let result = self
            .fetch_page(&[("id", video_id)])
            .await
            .map(|response| {
                response
                    .items
                    .into_iter()
                    .next()
                    .map(|item| item.into_video(None, true))
            });

        match &result {
            Ok(_) => record("video_details", "ok"),
            Err(e) => {
                record("video_details", e.kind());
                warn!(video_id, error = %e, "Failed to fetch video details");
            }
        }
        result
    }
}
