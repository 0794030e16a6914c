//! Category lookup handler.

use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use tpulse_models::{baseline, category_name, Demographics};

/// Category name with its heuristic audience.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_id: String,
    pub category_name: String,
    pub demographics: Demographics,
}

/// Describe a category id. Unknown ids resolve to "Unknown" with the default audience.
pub async fn get_category(Path(category_id): Path<String>) -> Json<CategoryResponse> {
    Json(CategoryResponse {
        category_name: category_name(&category_id).to_string(),
        demographics: baseline(&category_id),
        category_id,
    })
}
