//! Video source abstraction.

use async_trait::async_trait;
use tpulse_models::TrendingVideo;

use crate::error::YoutubeResult;

/// Anything that can list trending videos and look up a single video.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Up to `limit` trending videos for a region, in chart order.
    async fn trending(&self, region_code: &str, limit: u32) -> YoutubeResult<Vec<TrendingVideo>>;

    /// Full record for one video, or `None` if the service does not know it.
    async fn video_details(&self, video_id: &str) -> YoutubeResult<Option<TrendingVideo>>;
}
