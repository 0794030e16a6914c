//! Application state.

use std::sync::Arc;

use tracing::warn;

use tpulse_gemini::{GeminiClient, GeminiConfig, TextGenerator};
use tpulse_youtube::{VideoSource, YoutubeClient, YoutubeConfig};

use crate::config::ApiConfig;
use crate::services::BoardRegistry;

/// Region used when neither the request nor the environment names one.
pub const DEFAULT_REGION: &str = "KR";

/// Shared application state.
///
/// `videos` and `generator` are `None` when their credential is not
/// configured; every consumer degrades instead of failing.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub videos: Option<Arc<dyn VideoSource>>,
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub boards: Arc<BoardRegistry>,
    pub default_region: String,
}

impl AppState {
    /// Create application state from already-built clients.
    pub fn new(
        config: ApiConfig,
        videos: Option<Arc<dyn VideoSource>>,
        generator: Option<Arc<dyn TextGenerator>>,
        default_region: impl Into<String>,
    ) -> Self {
        let boards = Arc::new(BoardRegistry::new(
            config.max_boards,
            videos.clone(),
            generator.clone(),
        ));

        Self {
            config,
            videos,
            generator,
            boards,
            default_region: default_region.into(),
        }
    }

    /// Create application state with clients configured from the environment.
    pub fn from_env(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let youtube_config = YoutubeConfig::from_env();
        let default_region = youtube_config
            .as_ref()
            .map(|c| c.default_region.clone())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let videos: Option<Arc<dyn VideoSource>> = match youtube_config {
            Some(c) => Some(Arc::new(YoutubeClient::new(c)?) as Arc<dyn VideoSource>),
            None => {
                warn!("YOUTUBE_API_KEY not set, trending feeds will be empty");
                None
            }
        };

        let generator: Option<Arc<dyn TextGenerator>> = match GeminiConfig::from_env() {
            Some(c) => Some(Arc::new(GeminiClient::new(c)?) as Arc<dyn TextGenerator>),
            None => {
                warn!("GEMINI_API_KEY not set, AI analysis will use heuristics only");
                None
            }
        };

        Ok(Self::new(config, videos, generator, default_region))
    }
}
