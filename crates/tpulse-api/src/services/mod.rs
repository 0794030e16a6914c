//! Business logic services.

pub mod feed;
pub mod insights;

pub use feed::{load_feed, load_hot_keywords, FeedSource, FeedView, KeywordsView, VideoCard};
pub use insights::{BoardRegistry, BoardSnapshot, DemographicsSource, InsightsBoard, Phase};

#[cfg(test)]
mod testing;
