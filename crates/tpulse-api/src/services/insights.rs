//! Insights boards: one video analysis session at a time per board.
//!
//! Selecting a video starts a new session and fetches its details. Once the
//! details arrive the board shows the heuristic audience baseline right away,
//! then two background tasks ask the generative service for a refined
//! audience estimate and a summary.
//!
//! # Stale results
//!
//! Every session carries a monotonically increasing token. Background results
//! (and the detail lookup itself) capture the token of the session that
//! started them and are applied under the board's write lock only if that
//! token is still current. Selecting another video, or clearing the
//! selection, therefore makes every in-flight result of the previous session
//! a no-op.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use tpulse_gemini::{refine_demographics, summarize_video, TextGenerator};
use tpulse_models::{baseline, DegradeReason, Demographics, TrendingVideo, VideoSummary};
use tpulse_youtube::VideoSource;

use crate::metrics;

/// Shown when the listing service has no video with the requested id.
pub const VIDEO_NOT_FOUND_MESSAGE: &str = "Video not found.";

/// Shown when video details could not be fetched at all.
pub const DETAILS_UNAVAILABLE_MESSAGE: &str = "Unable to load video details.";

/// Board phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Where the displayed demographics came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DemographicsSource {
    Baseline,
    Refined,
}

/// Everything a board displays for its current session.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub session: u64,
    pub phase: Phase,
    pub video_id: Option<String>,
    pub video: Option<TrendingVideo>,
    pub demographics: Option<Demographics>,
    pub demographics_source: Option<DemographicsSource>,
    /// Why the refined estimate fell back to the baseline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refinement_note: Option<DegradeReason>,
    pub ai_refining: bool,
    pub summary_pending: bool,
    pub summary: Option<VideoSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_note: Option<DegradeReason>,
    pub error: Option<String>,
}

impl BoardSnapshot {
    /// Start a new session, dropping everything derived from the previous one.
    fn begin(&mut self, video_id: Option<String>) -> u64 {
        let session = self.session + 1;
        *self = BoardSnapshot {
            session,
            phase: if video_id.is_some() {
                Phase::Loading
            } else {
                Phase::Idle
            },
            video_id,
            ..BoardSnapshot::default()
        };
        session
    }
}

/// A single analysis board.
pub struct InsightsBoard {
    state: RwLock<BoardSnapshot>,
    videos: Option<Arc<dyn VideoSource>>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl InsightsBoard {
    /// Create an idle board. `None` dependencies mean no credential is configured.
    pub fn new(
        videos: Option<Arc<dyn VideoSource>>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            state: RwLock::new(BoardSnapshot::default()),
            videos,
            generator,
        }
    }

    /// Current board contents.
    pub async fn snapshot(&self) -> BoardSnapshot {
        self.state.read().await.clone()
    }

    /// Select a video (or clear the selection) and return the board once the
    /// detail lookup has settled.
    ///
    /// AI results arrive later; poll [`InsightsBoard::snapshot`] to observe them.
    pub async fn select(self: &Arc<Self>, video_id: Option<String>) -> BoardSnapshot {
        let session = self.state.write().await.begin(video_id.clone());

        let Some(video_id) = video_id else {
            metrics::record_session_started("clear");
            return self.snapshot().await;
        };
        metrics::record_session_started("select");
        debug!(session, video_id = %video_id, "Loading video details");

        let detail = self.fetch_detail(&video_id).await;

        let mut state = self.state.write().await;
        if state.session != session {
            debug!(session, current = state.session, "Discarding details of a replaced session");
            metrics::record_stale_result("detail");
            return state.clone();
        }

        match detail {
            Ok(video) => {
                state.phase = Phase::Ready;
                state.demographics = Some(baseline(video.category_or_default()));
                state.demographics_source = Some(DemographicsSource::Baseline);
                state.ai_refining = true;
                state.summary_pending = true;
                state.video = Some(video.clone());

                // Spawned while the baseline is held under the lock, so no
                // refined result can be applied before it.
                self.spawn_refinement(session, video.clone());
                self.spawn_summary(session, video);
            }
            Err(message) => {
                state.phase = Phase::Failed;
                state.error = Some(message.to_string());
            }
        }

        state.clone()
    }

    async fn fetch_detail(&self, video_id: &str) -> Result<TrendingVideo, &'static str> {
        let Some(source) = self.videos.as_deref() else {
            return Err(DETAILS_UNAVAILABLE_MESSAGE);
        };

        match source.video_details(video_id).await {
            Ok(Some(video)) => Ok(video),
            Ok(None) => Err(VIDEO_NOT_FOUND_MESSAGE),
            Err(e) => {
                warn!(video_id = %video_id, error = %e, "Failed to fetch video details");
                Err(DETAILS_UNAVAILABLE_MESSAGE)
            }
        }
    }

    fn spawn_refinement(self: &Arc<Self>, session: u64, video: TrendingVideo) {
        let board = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = refine_demographics(
                board.generator.as_deref(),
                &video.title,
                video.description_or_empty(),
                video.category_or_default(),
            )
            .await;

            let mut state = board.state.write().await;
            if state.session != session {
                debug!(session, current = state.session, "Discarding stale demographics");
                metrics::record_stale_result("demographics");
                return;
            }

            state.demographics_source = Some(if outcome.is_generated() {
                DemographicsSource::Refined
            } else {
                DemographicsSource::Baseline
            });
            state.refinement_note = outcome.reason().cloned();
            state.demographics = Some(outcome.into_value());
            state.ai_refining = false;
        });
    }

    fn spawn_summary(self: &Arc<Self>, session: u64, video: TrendingVideo) {
        let board = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = summarize_video(
                board.generator.as_deref(),
                &video.title,
                video.description_or_empty(),
            )
            .await;

            let mut state = board.state.write().await;
            if state.session != session {
                debug!(session, current = state.session, "Discarding stale summary");
                metrics::record_stale_result("summary");
                return;
            }

            state.summary_note = outcome.reason().cloned();
            state.summary = outcome.into_value();
            state.summary_pending = false;
        });
    }
}

struct BoardEntry {
    board: Arc<InsightsBoard>,
    last_used: Instant,
}

/// In-memory boards keyed by a client-chosen id.
///
/// Holds at most `capacity` boards; the least recently used board is evicted
/// to make room. Every lookup counts as a use.
pub struct BoardRegistry {
    boards: RwLock<HashMap<String, BoardEntry>>,
    capacity: usize,
    videos: Option<Arc<dyn VideoSource>>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl BoardRegistry {
    pub fn new(
        capacity: usize,
        videos: Option<Arc<dyn VideoSource>>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            boards: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
            videos,
            generator,
        }
    }

    /// Look up an existing board.
    pub async fn get(&self, board_id: &str) -> Option<Arc<InsightsBoard>> {
        let mut boards = self.boards.write().await;
        let entry = boards.get_mut(board_id)?;
        entry.last_used = Instant::now();
        Some(Arc::clone(&entry.board))
    }

    /// Look up a board, creating an idle one if needed.
    pub async fn get_or_create(&self, board_id: &str) -> Arc<InsightsBoard> {
        let mut boards = self.boards.write().await;
        if let Some(entry) = boards.get_mut(board_id) {
            entry.last_used = Instant::now();
            return Arc::clone(&entry.board);
        }

        if boards.len() >= self.capacity {
            let idlest = boards
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(id, _)| id.clone());
            if let Some(id) = idlest {
                info!(
                    board_id = %id,
                    "Board registry at capacity, evicting least recently used board"
                );
                boards.remove(&id);
            }
        }

        let board = Arc::new(InsightsBoard::new(
            self.videos.clone(),
            self.generator.clone(),
        ));
        boards.insert(
            board_id.to_string(),
            BoardEntry {
                board: Arc::clone(&board),
                last_used: Instant::now(),
            },
        );
        metrics::set_active_boards(boards.len());
        board
    }

    pub async fn len(&self) -> usize {
        self.boards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.boards.read().await.is_empty()
    }
}
