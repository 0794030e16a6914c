//! Fakes for the services' external dependencies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use tpulse_gemini::{GeminiError, GeminiResult, TextGenerator};
use tpulse_models::TrendingVideo;
use tpulse_youtube::{VideoSource, YoutubeError, YoutubeResult};

pub fn sample_video(id: &str, category_id: &str) -> TrendingVideo {
    TrendingVideo {
        id: id.to_string(),
        title: format!("Title {id}"),
        channel_title: format!("Channel {id}"),
        thumbnail: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
        view_count: "1234567".to_string(),
        published_at: "2024-05-01T12:00:00Z".to_string(),
        category_id: Some(category_id.to_string()),
        description: Some(format!("Description of {id}")),
        rank: None,
    }
}

fn upstream_failure() -> YoutubeError {
    YoutubeError::Status {
        status: 503,
        body: "backend unavailable".to_string(),
    }
}

/// In-memory video listing with optional per-id gates on detail lookups.
#[derive(Default)]
pub struct FakeSource {
    trending: Option<Vec<TrendingVideo>>,
    details: HashMap<String, TrendingVideo>,
    gates: HashMap<String, Arc<Semaphore>>,
    fail_details: bool,
    requests: Mutex<Vec<(String, u32)>>,
}

impl FakeSource {
    pub fn with_trending(videos: Vec<TrendingVideo>) -> Self {
        Self {
            trending: Some(videos),
            ..Self::default()
        }
    }

    pub fn with_details(videos: Vec<TrendingVideo>) -> Self {
        Self {
            trending: Some(Vec::new()),
            details: videos.into_iter().map(|v| (v.id.clone(), v)).collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            trending: None,
            fail_details: true,
            ..Self::default()
        }
    }

    /// Hold detail lookups for `id` until the returned semaphore gets a permit.
    pub fn gate(&mut self, id: &str) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        self.gates.insert(id.to_string(), Arc::clone(&gate));
        gate
    }

    pub fn last_request(&self) -> Option<(String, u32)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl VideoSource for FakeSource {
    async fn trending(&self, region_code: &str, limit: u32) -> YoutubeResult<Vec<TrendingVideo>> {
        self.requests
            .lock()
            .unwrap()
            .push((region_code.to_string(), limit));
        match &self.trending {
            Some(videos) => Ok(videos.iter().take(limit as usize).cloned().collect()),
            None => Err(upstream_failure()),
        }
    }

    async fn video_details(&self, video_id: &str) -> YoutubeResult<Option<TrendingVideo>> {
        if let Some(gate) = self.gates.get(video_id) {
            gate.acquire().await.unwrap().forget();
        }
        if self.fail_details {
            return Err(upstream_failure());
        }
        Ok(self.details.get(video_id).cloned())
    }
}

struct Rule {
    needles: Vec<String>,
    reply: Result<String, u16>,
    gate: Option<Arc<Semaphore>>,
}

/// Generator whose reply (and optional gate) is chosen by prompt content.
pub struct FakeGenerator {
    rules: Vec<Rule>,
    fallback: Result<String, u16>,
    calls: AtomicUsize,
    finished: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with_fallback(Ok(text.to_string()))
    }

    pub fn failing(status: u16) -> Self {
        Self::with_fallback(Err(status))
    }

    fn with_fallback(fallback: Result<String, u16>) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
            calls: AtomicUsize::new(0),
            finished: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Reply with `text` to prompts containing every needle, once a permit is added.
    pub fn when_gated(&mut self, needles: &[&str], text: &str) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        self.rules.push(Rule {
            needles: needles.iter().map(|n| n.to_string()).collect(),
            reply: Ok(text.to_string()),
            gate: Some(Arc::clone(&gate)),
        });
        gate
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> GeminiResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        let rule = self
            .rules
            .iter()
            .find(|rule| rule.needles.iter().all(|n| prompt.contains(n.as_str())));

        if let Some(gate) = rule.and_then(|r| r.gate.as_ref()) {
            gate.acquire().await.unwrap().forget();
        }

        let reply = rule.map(|r| &r.reply).unwrap_or(&self.fallback);
        self.finished.fetch_add(1, Ordering::SeqCst);
        match reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(GeminiError::Status {
                status: *status,
                body: "scripted failure".to_string(),
            }),
        }
    }
}
