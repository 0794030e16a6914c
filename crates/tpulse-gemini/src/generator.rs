//! Text generation abstraction.

use async_trait::async_trait;

use crate::error::GeminiResult;

/// A single-shot structured-output text generator.
///
/// One call is one request: no streaming, no conversation context, no
/// caching and no retries. The returned text is expected to be a JSON
/// document, but callers must not assume it parses.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> GeminiResult<String>;
}
