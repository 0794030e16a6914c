//! Trending feed handlers.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::ApiResult;
use crate::services::feed::{
    load_feed, FeedView, HOME_DISPLAY_COUNT, HOME_FETCH_LIMIT, TRENDS_FETCH_LIMIT,
};
use crate::state::AppState;

/// Query parameters for the trends feed.
#[derive(Debug, Deserialize, Validate)]
pub struct TrendingQuery {
    /// ISO 3166-1 alpha-2 region code
    #[validate(length(equal = 2), custom(function = "validate_region"))]
    pub region: Option<String>,
    #[validate(range(min = 1, max = 200))]
    pub limit: Option<u32>,
}

/// Region codes are two ASCII letters; case is normalized afterwards.
pub(crate) fn validate_region(region: &str) -> Result<(), ValidationError> {
    if region.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::new("region_letters"))
    }
}

/// Home feed: the top of the default region's trending chart.
pub async fn home(State(state): State<AppState>) -> Json<FeedView> {
    let view = load_feed(
        state.videos.as_deref(),
        &state.default_region,
        HOME_FETCH_LIMIT,
        HOME_DISPLAY_COUNT,
        Utc::now(),
    )
    .await;
    Json(view)
}

/// Trends feed: the full trending chart for a region.
pub async fn trending(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> ApiResult<Json<FeedView>> {
    query.validate()?;

    let region = query
        .region
        .map(|r| r.to_uppercase())
        .unwrap_or_else(|| state.default_region.clone());
    let limit = query.limit.unwrap_or(TRENDS_FETCH_LIMIT);

    let view = load_feed(
        state.videos.as_deref(),
        &region,
        limit,
        limit as usize,
        Utc::now(),
    )
    .await;
    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(region: &str) -> TrendingQuery {
        TrendingQuery {
            region: Some(region.to_string()),
            limit: None,
        }
    }

    #[test]
    fn test_region_accepts_letters() {
        assert!(query("KR").validate().is_ok());
        assert!(query("us").validate().is_ok());
        assert!(TrendingQuery { region: None, limit: None }.validate().is_ok());
    }

    #[test]
    fn test_region_rejects_non_letters() {
        assert!(query("1!").validate().is_err());
        assert!(query("K1").validate().is_err());
        assert!(query("KOR").validate().is_err());
    }
}
