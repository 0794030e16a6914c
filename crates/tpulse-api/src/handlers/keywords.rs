//! Hot keyword handler.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiResult;
use crate::handlers::feeds::validate_region;
use crate::services::feed::{load_hot_keywords, FeedSource, KeywordsView};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct KeywordsQuery {
    #[validate(length(equal = 2), custom(function = "validate_region"))]
    pub region: Option<String>,
    /// Feed whose fetch the titles come from (`home` or `trends`)
    #[serde(default)]
    pub source: FeedSource,
}

/// Hot keywords across the leading trending titles of a feed.
pub async fn hot_keywords(
    State(state): State<AppState>,
    Query(query): Query<KeywordsQuery>,
) -> ApiResult<Json<KeywordsView>> {
    query.validate()?;

    let region = query
        .region
        .map(|r| r.to_uppercase())
        .unwrap_or_else(|| state.default_region.clone());

    let view = load_hot_keywords(
        state.videos.as_deref(),
        state.generator.as_deref(),
        &region,
        query.source,
    )
    .await;
    Ok(Json(view))
}
