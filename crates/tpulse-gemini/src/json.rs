//! Parsing of model output into typed documents.
//!
//! Structured-output requests usually come back as bare JSON, but models
//! still wrap replies in Markdown fences or surrounding prose now and then.

use std::sync::OnceLock;

use regex_lite::Regex;
use serde::de::DeserializeOwned;

/// Strip a surrounding Markdown code fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// Parse a reply as a typed document.
pub fn parse_document<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    serde_json::from_str(strip_code_fence(text))
}

/// The span from the first `{` to the last `}`, if there is one.
pub fn extract_braced(text: &str) -> Option<&str> {
    static BRACED: OnceLock<Regex> = OnceLock::new();
    let re = BRACED.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));
    re.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Doc {
        a: u32,
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_parse_document() {
        assert_eq!(parse_document::<Doc>("```json\n{\"a\": 3}\n```").unwrap(), Doc { a: 3 });
        assert!(parse_document::<Doc>("Sure! {\"a\": 3}").is_err());
    }

    #[test]
    fn test_extract_braced() {
        assert_eq!(
            extract_braced("Here you go: {\"a\": {\"b\": 1}} hope it helps"),
            Some("{\"a\": {\"b\": 1}}")
        );
        assert_eq!(extract_braced("line one\n{\n  \"a\": 1\n}\n"), Some("{\n  \"a\": 1\n}"));
        assert_eq!(extract_braced("no document here"), None);
        assert_eq!(extract_braced("} backwards {"), None);
    }
}
