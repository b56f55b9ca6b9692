//! Cell-level comparison logic

/// Treat an absent cell the same as an empty one
pub fn normalize(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

/// Compare two cell values after normalization
pub fn cells_equal(a: Option<&str>, b: Option<&str>) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_equality() {
        assert!(cells_equal(Some("5"), Some("5")));
        assert!(!cells_equal(Some("5"), Some("6")));
    }

    #[test]
    fn test_absent_equals_empty() {
        assert!(cells_equal(Some(""), None));
        assert!(cells_equal(None, Some("")));
        assert!(cells_equal(None, None));
        assert!(!cells_equal(None, Some("0")));
    }

    #[test]
    fn test_no_trimming_or_case_folding() {
        assert!(!cells_equal(Some(" "), None));
        assert!(!cells_equal(Some("a"), Some("A")));
    }
}
