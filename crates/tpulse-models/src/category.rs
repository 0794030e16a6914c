//! Video category classification.
//!
//! Category ids are opaque tokens assigned by the upstream video service.
//! They are never validated, only looked up.

/// Display name for any category id outside the known table.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("1", "Film & Animation"),
    ("2", "Autos & Vehicles"),
    ("10", "Music"),
    ("15", "Pets & Animals"),
    ("17", "Sports"),
    ("18", "Short Movies"),
    ("19", "Travel & Events"),
    ("20", "Gaming"),
    ("22", "People & Blogs"),
    ("23", "Comedy"),
    ("24", "Entertainment"),
    ("25", "News & Politics"),
    ("26", "Howto & Style"),
    ("27", "Education"),
    ("28", "Science & Technology"),
    ("29", "Nonprofits & Activism"),
];

/// Map a category id to its display name.
///
/// Total: unknown ids yield [`UNKNOWN_CATEGORY`], so the result is never empty.
pub fn category_name(category_id: &str) -> &'static str {
    CATEGORY_NAMES
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(category_name("1"), "Film & Animation");
        assert_eq!(category_name("20"), "Gaming");
        assert_eq!(category_name("26"), "Howto & Style");
        assert_eq!(category_name("29"), "Nonprofits & Activism");
    }

    #[test]
    fn test_every_table_entry_is_reachable() {
        for (id, name) in CATEGORY_NAMES {
            assert_eq!(category_name(id), *name);
            assert!(!name.is_empty());
        }
        assert_eq!(CATEGORY_NAMES.len(), 16);
    }

    #[test]
    fn test_unknown_categories() {
        for id in ["", "0", "3", "21", "30", "999", " 20", "gaming"] {
            assert_eq!(category_name(id), UNKNOWN_CATEGORY, "id {:?}", id);
        }
    }
}
