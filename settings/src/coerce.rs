//! Pure text coercion helpers for configuration values.
//!
//! Both functions are deliberately lenient: malformed configuration must
//! never crash a collection run, so anything unparsable resolves to the
//! field's default instead of an error. Keeping them as standalone pure
//! functions makes that policy auditable and unit-testable on its own.

/// Normalize a comma-separated text value into an ordered token list.
///
/// Absent input stays absent. Present input always yields a list (possibly
/// empty, never `None`): segments are split on the literal comma, trimmed,
/// and empty or whitespace-only segments are dropped. Relative order is
/// preserved.
pub fn split_list(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw?;
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Parse a boolean flag leniently.
///
/// Yields `true` only for case-insensitive `"true"` (surrounding whitespace
/// tolerated). Absent text, empty text, and garbage all yield `false`.
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|text| text.trim().eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_absent_stays_absent() {
        assert_eq!(split_list(None), None);
    }

    #[test]
    fn split_list_trims_and_drops_empty_segments() {
        assert_eq!(
            split_list(Some(" a , ,b,  ")),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn split_list_preserves_order() {
        assert_eq!(
            split_list(Some("json,lcov,cobertura")),
            Some(vec![
                "json".to_string(),
                "lcov".to_string(),
                "cobertura".to_string()
            ])
        );
    }

    #[test]
    fn split_list_present_but_blank_yields_empty_list() {
        assert_eq!(split_list(Some("")), Some(Vec::new()));
        assert_eq!(split_list(Some("  , ,,  ")), Some(Vec::new()));
    }

    #[test]
    fn split_list_is_idempotent_on_clean_input() {
        let first = split_list(Some("a, b ,, c")).expect("present");
        let rejoined = first.join(",");
        assert_eq!(split_list(Some(&rejoined)), Some(first));
    }

    #[test]
    fn parse_flag_accepts_true_case_insensitively() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("True")));
        assert!(parse_flag(Some(" true ")));
    }

    #[test]
    fn parse_flag_defaults_to_false_on_anything_else() {
        assert!(!parse_flag(None));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("maybe")));
        assert!(!parse_flag(Some("1")));
        assert!(!parse_flag(Some("yes")));
    }
}
