//! One-line video summaries with popularity factors.

use tpulse_models::{AiOutcome, DegradeReason, VideoSummary};

use crate::generator::TextGenerator;
use crate::json::{extract_braced, parse_document};
use crate::metrics::record_outcome;
use crate::prompts::summary_prompt;

/// Ask the generative service for a tagline and three popularity factors.
///
/// Always resolves; `None` means "summary unavailable". When the reply does
/// not parse directly, the first-`{`-to-last-`}` span is parsed once more so
/// documents wrapped in prose still come through.
pub async fn summarize_video(
    generator: Option<&dyn TextGenerator>,
    title: &str,
    description: &str,
) -> AiOutcome<Option<VideoSummary>> {
    let outcome = match generator {
        None => AiOutcome::degraded(None, DegradeReason::MissingCredential),
        Some(generator) => match generator.generate(&summary_prompt(title, description)).await {
            Err(e) => AiOutcome::degraded(None, e.degrade_reason()),
            Ok(text) => match parse_summary(&text) {
                Ok(summary) => AiOutcome::Generated(Some(summary)),
                Err(reason) => AiOutcome::degraded(None, reason),
            },
        },
    };

    record_outcome("video_summary", &outcome);
    outcome
}

fn parse_summary(text: &str) -> Result<VideoSummary, DegradeReason> {
    let first_error = match parse_document::<VideoSummary>(text) {
        Ok(summary) => return Ok(summary),
        Err(e) => e,
    };

    let braced = extract_braced(text).ok_or_else(|| {
        DegradeReason::MalformedResponse(format!("{}; no braced document found", first_error))
    })?;

    serde_json::from_str(braced).map_err(|e| {
        DegradeReason::MalformedResponse(format!("{}; braced retry: {}", first_error, e))
    })
}
