//! Insights board handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::services::BoardSnapshot;
use crate::state::AppState;

/// Longest accepted board id.
const MAX_BOARD_ID_LEN: usize = 64;

/// Request to change a board's selected video.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SelectVideoRequest {
    /// `null` clears the selection
    #[validate(length(min = 1, max = 64))]
    pub video_id: Option<String>,
}

/// Board ids are chosen by the client (one per dashboard tab).
fn is_valid_board_id(board_id: &str) -> bool {
    !board_id.is_empty()
        && board_id.len() <= MAX_BOARD_ID_LEN
        && board_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn check_board_id(board_id: &str) -> ApiResult<()> {
    if is_valid_board_id(board_id) {
        Ok(())
    } else {
        Err(ApiError::bad_request("Invalid board ID format"))
    }
}

/// Current contents of a board.
pub async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<Json<BoardSnapshot>> {
    check_board_id(&board_id)?;

    let board = state
        .boards
        .get(&board_id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Board {board_id}")))?;

    Ok(Json(board.snapshot().await))
}

/// Select a video on a board, creating the board on first use.
///
/// Responds once the video details have been fetched; AI results land on the
/// board afterwards.
pub async fn select_video(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
    Json(request): Json<SelectVideoRequest>,
) -> ApiResult<Json<BoardSnapshot>> {
    check_board_id(&board_id)?;
    request.validate()?;

    let board = state.boards.get_or_create(&board_id).await;
    Ok(Json(board.select(request.video_id).await))
}

/// Clear a board's selection.
pub async fn clear_board(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<StatusCode> {
    check_board_id(&board_id)?;

    if let Some(board) = state.boards.get(&board_id).await {
        board.select(None).await;
    }
    Ok(StatusCode::NO_CONTENT)
}
