//! Trending feeds and hot keywords for the dashboard home and trends views.
//!
//! Feeds never fail outward: a fetch error and an empty chart both become
//! [`FeedView::Empty`] with a user-facing message, which the dashboard shows
//! instead of a spinner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use tpulse_gemini::{extract_hot_keywords, TextGenerator, KEYWORD_SAMPLE_SIZE};
use tpulse_models::{
    format_relative_time, format_view_count, DegradeReason, HotKeyword, TrendingVideo,
};
use tpulse_youtube::VideoSource;

/// Videos fetched for the home view.
pub const HOME_FETCH_LIMIT: u32 = 10;

/// Videos shown on the home view.
pub const HOME_DISPLAY_COUNT: usize = 5;

/// Videos fetched and shown on the trends view.
pub const TRENDS_FETCH_LIMIT: u32 = 100;

/// Message shown when a feed has nothing to display.
pub const EMPTY_FEED_MESSAGE: &str = "Unable to load data.";

/// Which feed's fetch the hot keyword sample is drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    #[default]
    Home,
    Trends,
}

impl FeedSource {
    /// Videos the feed fetches.
    pub fn fetch_limit(self) -> u32 {
        match self {
            FeedSource::Home => HOME_FETCH_LIMIT,
            FeedSource::Trends => TRENDS_FETCH_LIMIT,
        }
    }
}

/// A trending video decorated with display strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCard {
    #[serde(flatten)]
    pub video: TrendingVideo,
    pub view_count_display: String,
    pub published_display: String,
}

impl VideoCard {
    pub fn new(video: TrendingVideo, now: DateTime<Utc>) -> Self {
        Self {
            view_count_display: format_view_count(&video.view_count),
            published_display: format_relative_time(&video.published_at, now),
            video,
        }
    }
}

/// What a feed panel renders.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeedView {
    Ready { videos: Vec<VideoCard> },
    Empty { message: String },
}

impl FeedView {
    fn empty() -> Self {
        FeedView::Empty {
            message: EMPTY_FEED_MESSAGE.to_string(),
        }
    }
}

/// Fetch `limit` trending videos for `region` and keep the first `display`.
pub async fn load_feed(
    videos: Option<&dyn VideoSource>,
    region: &str,
    limit: u32,
    display: usize,
    now: DateTime<Utc>,
) -> FeedView {
    let Some(source) = videos else {
        return FeedView::empty();
    };

    match source.trending(region, limit).await {
        Ok(list) if !list.is_empty() => FeedView::Ready {
            videos: list
                .into_iter()
                .take(display)
                .map(|video| VideoCard::new(video, now))
                .collect(),
        },
        Ok(_) => FeedView::empty(),
        Err(e) => {
            warn!(region = %region, error = %e, "Failed to load trending feed");
            FeedView::empty()
        }
    }
}

/// Hot keyword panel payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsView {
    pub keywords: Vec<HotKeyword>,
    pub generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<DegradeReason>,
}

/// Extract hot keywords from the leading titles of `feed`'s fetch.
///
/// The list is requested with the same limit the feed uses, so the home view
/// samples its 10 videos and the trends view the first 30 of its 100.
pub async fn load_hot_keywords(
    videos: Option<&dyn VideoSource>,
    generator: Option<&dyn TextGenerator>,
    region: &str,
    feed: FeedSource,
) -> KeywordsView {
    let list = match videos {
        Some(source) => match source.trending(region, feed.fetch_limit()).await {
            Ok(list) => list,
            Err(e) => {
                warn!(
                    region = %region,
                    error = %e,
                    "Failed to load titles for hot keywords"
                );
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let titles: Vec<&str> = list
        .iter()
        .take(KEYWORD_SAMPLE_SIZE)
        .map(|video| video.title.as_str())
        .collect();
    let outcome = extract_hot_keywords(generator, &titles).await;

    KeywordsView {
        generated: outcome.is_generated(),
        note: outcome.reason().cloned(),
        keywords: outcome.into_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{sample_video, FakeGenerator, FakeSource};

    fn now() -> DateTime<Utc> {
        "2024-05-02T12:00:00Z".parse().unwrap()
    }

    #[tokio::test]
    async fn test_feed_keeps_first_entries() {
        let source = FakeSource::with_trending(
            (1..=10)
                .map(|i| sample_video(&format!("v{i}"), "10"))
                .collect(),
        );
        let view = load_feed(
            Some(&source),
            "KR",
            HOME_FETCH_LIMIT,
            HOME_DISPLAY_COUNT,
            now(),
        )
        .await;

        match view {
            FeedView::Ready { videos } => {
                assert_eq!(videos.len(), 5);
                assert_eq!(videos[0].video.id, "v1");
                assert_eq!(videos[4].video.id, "v5");
                assert_eq!(videos[0].view_count_display, "123.5만회");
            }
            other => panic!("expected ready feed, got {other:?}"),
        }
        assert_eq!(source.last_request(), Some(("KR".to_string(), 10)));
    }

    #[tokio::test]
    async fn test_feed_empty_without_source() {
        let view = load_feed(None, "KR", TRENDS_FETCH_LIMIT, 100, now()).await;
        assert!(
            matches!(view, FeedView::Empty { ref message } if message == EMPTY_FEED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_feed_empty_on_error_and_no_results() {
        let failing = FakeSource::failing();
        let view = load_feed(Some(&failing), "KR", TRENDS_FETCH_LIMIT, 100, now()).await;
        assert!(matches!(view, FeedView::Empty { .. }));

        let empty = FakeSource::with_trending(Vec::new());
        let view = load_feed(Some(&empty), "KR", TRENDS_FETCH_LIMIT, 100, now()).await;
        assert!(matches!(view, FeedView::Empty { .. }));
    }

    #[test]
    fn test_feed_wire_format() {
        let view = FeedView::Ready {
            videos: vec![VideoCard::new(sample_video("abc", "20"), now())],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["videos"][0]["id"], "abc");
        assert_eq!(json["videos"][0]["channelTitle"], "Channel abc");
        assert_eq!(json["videos"][0]["viewCountDisplay"], "123.5만회");
        assert_eq!(json["videos"][0]["publishedDisplay"], "1일 전");

        let json = serde_json::to_value(FeedView::empty()).unwrap();
        assert_eq!(json["status"], "empty");
        assert_eq!(json["message"], "Unable to load data.");
    }

    #[tokio::test]
    async fn test_hot_keywords_use_trending_titles() {
        let source =
            FakeSource::with_trending(vec![sample_video("a", "10"), sample_video("b", "20")]);
        let generator = FakeGenerator::replying(
            r#"[{"term": "comeback", "growth": "+320%", "description": "Idol comeback week",
                "trend": [10, 20, 35, 50, 80, 100]}]"#,
        );

        let view =
            load_hot_keywords(Some(&source), Some(&generator), "US", FeedSource::Home).await;

        assert!(view.generated);
        assert_eq!(view.keywords.len(), 1);
        assert_eq!(view.keywords[0].term, "comeback");
        assert_eq!(source.last_request(), Some(("US".to_string(), 10)));
        assert!(generator.last_prompt().unwrap().contains("Title a"));
    }

    #[tokio::test]
    async fn test_hot_keywords_sample_leading_trends_titles() {
        let source = FakeSource::with_trending(
            (1..=100)
                .map(|i| sample_video(&format!("v{i}"), "10"))
                .collect(),
        );
        let generator = FakeGenerator::replying("[]");

        load_hot_keywords(Some(&source), Some(&generator), "KR", FeedSource::Trends).await;

        assert_eq!(source.last_request(), Some(("KR".to_string(), 100)));
        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.contains("Title v30"));
        assert!(!prompt.contains("Title v31"));
    }

    #[tokio::test]
    async fn test_hot_keywords_empty_when_titles_unavailable() {
        let failing = FakeSource::failing();
        let generator = FakeGenerator::replying("[]");

        let view =
            load_hot_keywords(Some(&failing), Some(&generator), "KR", FeedSource::Home).await;

        assert!(view.keywords.is_empty());
        assert_eq!(view.note, Some(DegradeReason::EmptyInput));
        assert_eq!(generator.calls(), 0);
    }
}
