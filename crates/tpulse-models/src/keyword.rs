//! Hot keyword models.

use serde::{Deserialize, Serialize};

/// Number of samples in a keyword sparkline.
pub const TREND_POINTS: usize = 6;

/// A recurring topic across the current trending titles.
///
/// Keywords are produced in batches and kept in the extractor's rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotKeyword {
    /// Topic name (person, brand, event, catchphrase)
    pub term: String,
    /// Signed percentage for display, e.g. "+150%"; never parsed
    pub growth: String,
    /// One-sentence rationale
    pub description: String,
    /// Synthetic sparkline, values in [0, 100]
    pub trend: [f64; TREND_POINTS],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_array() {
        let keywords: Vec<HotKeyword> = serde_json::from_str(
            r#"[{"term":"NewJeans","growth":"+150%","description":"Comeback week.",
                 "trend":[10,20,30,40,50,60]}]"#,
        )
        .unwrap();
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].growth, "+150%");
        assert_eq!(keywords[0].trend[5], 60.0);
    }

    #[test]
    fn test_trend_must_have_six_points() {
        let result: Result<Vec<HotKeyword>, _> = serde_json::from_str(
            r#"[{"term":"x","growth":"+1%","description":"d","trend":[1,2,3]}]"#,
        );
        assert!(result.is_err());
    }
}
