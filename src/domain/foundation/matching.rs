//! Case-insensitive substring matching.
//!
//! Strategic and geographic alignment are intentionally fuzzy: a focus
//! term matches when it appears anywhere inside the opportunity text,
//! regardless of case. The rules live here so they can be tested in
//! isolation instead of being scattered as inline string methods.

/// Returns true if `term` appears as a case-insensitive substring of
/// `text`. Empty or whitespace-only terms never match.
pub fn contains_term(text: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return false;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Returns true if any of `terms` matches `text`.
pub fn any_term_matches(terms: &[String], text: &str) -> bool {
    terms.iter().any(|term| contains_term(text, term))
}

/// Returns true if either string contains the other (case-insensitive).
///
/// Used for geographic matching, where "Vietnam" should match a
/// preference of "Southeast Asia & Vietnam" and vice versa.
pub fn mutual_contains(a: &str, b: &str) -> bool {
    contains_term(a, b) || contains_term(b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_term_is_case_insensitive() {
        assert!(contains_term("Strategic Partnership in Tech", "PARTNERSHIP"));
        assert!(contains_term("renewable ENERGY project", "energy"));
    }

    #[test]
    fn contains_term_matches_substrings() {
        assert!(contains_term("fintech expansion", "tech"));
    }

    #[test]
    fn contains_term_rejects_missing_terms() {
        assert!(!contains_term("manufacturing", "retail"));
    }

    #[test]
    fn empty_terms_never_match() {
        assert!(!contains_term("anything", ""));
        assert!(!contains_term("anything", "   "));
    }

    #[test]
    fn any_term_matches_finds_one_of_many() {
        let terms = vec!["logistics".to_string(), "technology".to_string()];
        assert!(any_term_matches(&terms, "Technology joint venture"));
        assert!(!any_term_matches(&terms, "Agriculture cooperative"));
    }

    #[test]
    fn any_term_matches_empty_list_is_false() {
        assert!(!any_term_matches(&[], "anything"));
    }

    #[test]
    fn mutual_contains_works_both_directions() {
        assert!(mutual_contains("Vietnam", "Southeast Asia & Vietnam"));
        assert!(mutual_contains("Southeast Asia & Vietnam", "vietnam"));
        assert!(!mutual_contains("Vietnam", "Brazil"));
    }
}
