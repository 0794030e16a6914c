//! Hot keyword extraction from trending titles.

use tpulse_models::{AiOutcome, DegradeReason, HotKeyword};

use crate::generator::TextGenerator;
use crate::json::parse_document;
use crate::metrics::record_outcome;
use crate::prompts::hot_keywords_prompt;

/// How many leading trending titles callers feed to the extractor.
pub const KEYWORD_SAMPLE_SIZE: usize = 30;

/// Ask the generative service for the top recurring topics in `titles`.
///
/// Always resolves. Empty input or a missing generator short-circuits to an
/// empty list without a request. A reply that does not parse as a keyword
/// array is discarded whole; parsed keywords are kept in emitted order with
/// no dedup or re-ranking.
pub async fn extract_hot_keywords(
    generator: Option<&dyn TextGenerator>,
    titles: &[&str],
) -> AiOutcome<Vec<HotKeyword>> {
    let outcome = match generator {
        _ if titles.is_empty() => AiOutcome::degraded(Vec::new(), DegradeReason::EmptyInput),
        None => AiOutcome::degraded(Vec::new(), DegradeReason::MissingCredential),
        Some(generator) => match generator.generate(&hot_keywords_prompt(titles)).await {
            Err(e) => AiOutcome::degraded(Vec::new(), e.degrade_reason()),
            Ok(text) => match parse_document::<Vec<HotKeyword>>(&text) {
                Ok(keywords) => AiOutcome::Generated(keywords),
                Err(e) => AiOutcome::degraded(
                    Vec::new(),
                    DegradeReason::MalformedResponse(e.to_string()),
                ),
            },
        },
    };

    record_outcome("hot_keywords", &outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedGenerator;

    const KEYWORDS: &str = r#"[
        {"term": "NewJeans", "growth": "+150%", "description": "Comeback stage.",
         "trend": [10, 20, 30, 40, 50, 60]},
        {"term": "ChatGPT", "growth": "+80%", "description": "New model launch.",
         "trend": [5, 15, 20, 35, 60, 90]},
        {"term": "NewJeans", "growth": "+10%", "description": "Duplicate entry.",
         "trend": [1, 2, 3, 4, 5, 6]}
    ]"#;

    #[tokio::test]
    async fn test_empty_input_returns_empty_without_request() {
        let generator = ScriptedGenerator::replying(KEYWORDS);
        let outcome = extract_hot_keywords(Some(&generator), &[]).await;

        assert_eq!(outcome.reason(), Some(&DegradeReason::EmptyInput));
        assert!(outcome.value().is_empty());
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_returns_empty() {
        let outcome = extract_hot_keywords(None, &["a title"]).await;
        assert_eq!(outcome.reason(), Some(&DegradeReason::MissingCredential));
        assert!(outcome.into_value().is_empty());
    }

    #[tokio::test]
    async fn test_keywords_kept_in_emitted_order() {
        let generator = ScriptedGenerator::replying(KEYWORDS);
        let outcome = extract_hot_keywords(Some(&generator), &["one", "two"]).await;

        assert!(outcome.is_generated());
        let keywords = outcome.into_value();
        let terms: Vec<&str> = keywords.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["NewJeans", "ChatGPT", "NewJeans"]);
        assert_eq!(keywords[1].trend, [5.0, 15.0, 20.0, 35.0, 60.0, 90.0]);
        assert!(generator.last_prompt().unwrap().contains("one\ntwo"));
    }

    #[tokio::test]
    async fn test_partially_invalid_array_is_discarded_whole() {
        let generator = ScriptedGenerator::replying(
            r#"[
                {"term": "ok", "growth": "+1%", "description": "fine", "trend": [1, 2, 3, 4, 5, 6]},
                {"term": "broken", "growth": "+1%", "description": "short trend", "trend": [1, 2]}
            ]"#,
        );
        let outcome = extract_hot_keywords(Some(&generator), &["title"]).await;

        assert!(matches!(
            outcome.reason(),
            Some(DegradeReason::MalformedResponse(_))
        ));
        assert!(outcome.into_value().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_returns_empty() {
        let generator = ScriptedGenerator::failing(500);
        let outcome = extract_hot_keywords(Some(&generator), &["title"]).await;

        assert!(matches!(outcome.reason(), Some(DegradeReason::Transport(_))));
        assert!(outcome.into_value().is_empty());
    }
}
