//! Word-boundary literal matching shared by the propagator and hint builder.
//!
//! The pattern is the entity name with all regex-special characters escaped,
//! anchored to word boundaries on both sides. "Aldric" therefore does not
//! match inside "Aldricson", but does match in "Aldric's" — the boundary
//! before a non-word character still counts. Matching is case-sensitive:
//! "ALDRIC" is a different token and is left alone.

use regex::Regex;

/// Compile the word-boundary pattern for a literal entity name.
///
/// Returns `None` for an empty name — there is nothing to match, and the
/// callers treat that as a no-op rather than an error.
#[must_use]
pub fn word_pattern(name: &str) -> Option<Regex> {
    if name.is_empty() {
        return None;
    }
    let escaped = regex::escape(name);
    // The escaped literal contains no metacharacters, so compilation cannot
    // fail for any name; treat failure as no-match anyway.
    Regex::new(&format!(r"\b{escaped}\b")).ok()
}

/// Count word-boundary occurrences of `name` in `content`.
#[must_use]
pub fn count_occurrences(pattern: &Regex, content: &str) -> usize {
    pattern.find_iter(content).count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn count(name: &str, content: &str) -> usize {
        word_pattern(name).map_or(0, |p| count_occurrences(&p, content))
    }

    #[test]
    fn plain_word_matches() {
        assert_eq!(count("Aldric", "Aldric stands at the gate."), 1);
    }

    #[test]
    fn does_not_match_inside_longer_word() {
        assert_eq!(count("Aldric", "Aldricson waits"), 0);
    }

    #[test]
    fn matches_before_apostrophe() {
        assert_eq!(count("Aldric", "Aldric's sword"), 1);
    }

    #[test]
    fn matches_multiple_occurrences() {
        assert_eq!(count("Aldric", "Aldric nods. Aldric leaves."), 2);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(count("Aldric", "ALDRIC shouts"), 0);
        assert_eq!(count("Aldric", "aldric whispers"), 0);
    }

    #[test]
    fn regex_special_characters_are_literal() {
        assert_eq!(count("Dr. Vane", "Dr. Vane enters. DrX Vane stays."), 1);
        assert_eq!(count("K+9", "the unit K+9 beeps"), 1);
    }

    #[test]
    fn empty_name_has_no_pattern() {
        assert!(word_pattern("").is_none());
    }

    #[test]
    fn matches_at_string_edges() {
        assert_eq!(count("Aldric", "Aldric"), 1);
        assert_eq!(count("Aldric", "gate, says Aldric"), 1);
    }
}
