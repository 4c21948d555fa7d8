//! Reference token extraction from free-text narration.
//!
//! Bank statements bury the loan reference ("R-number") inside the
//! description text. The token shape is digits-`R`-digits, any case.

use std::sync::OnceLock;

use regex::Regex;

fn token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\d+R\d+").unwrap())
}

/// First reference token in `text`, upper-cased. `None` when no token occurs.
pub fn extract_reference(text: &str) -> Option<String> {
    token_pattern().find(text).map(|m| m.as_str().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_token() {
        assert_eq!(
            extract_reference("PAYMENT REF 123R456 THEN 789R012"),
            Some("123R456".into())
        );
    }

    #[test]
    fn uppercases_lowercase_r() {
        assert_eq!(extract_reference("transfer 123r456"), Some("123R456".into()));
    }

    #[test]
    fn token_may_be_embedded() {
        assert_eq!(extract_reference("FT24123R456XYZ"), Some("24123R456".into()));
    }

    #[test]
    fn digits_required_on_both_sides() {
        assert_eq!(extract_reference("R456 ONLY"), None);
        assert_eq!(extract_reference("123R ONLY"), None);
        assert_eq!(extract_reference("CASH DEPOSIT"), None);
        assert_eq!(extract_reference(""), None);
    }

    #[test]
    fn match_stops_at_first_token_boundary() {
        // The second R segment is outside the greedy match.
        assert_eq!(extract_reference("12R34R56"), Some("12R34".into()));
    }
}
