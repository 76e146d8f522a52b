pub mod domain;
pub mod location;
pub mod money;
pub mod taxonomy;
pub mod text;

pub use domain::extract_domain;
pub use location::normalize_location;
pub use money::{parse_percent, parse_usd_amount};
pub use taxonomy::normalize_taxonomy;
pub use text::{format_chip_label, is_blank_value, normalize_text, word_overlap_ratio};

use serde::{Deserialize, Serialize};

/// Which normalization to apply before comparing two values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NormKind {
    Text,
    Location,
    Taxonomy,
}

pub fn normalize_for(kind: NormKind, s: &str) -> String {
    match kind {
        NormKind::Text => normalize_text(s),
        NormKind::Location => normalize_location(s),
        NormKind::Taxonomy => normalize_taxonomy(s),
    }
}

// Word-overlap equivalence only applies from 4 chars up; shorter tags must
// match exactly or false positives swamp short acronyms.
const MIN_FUZZY_LEN: usize = 4;
const TAG_OVERLAP_THRESHOLD: f64 = 0.8;

/// Equivalence over already-normalized strings.
pub(crate) fn normalized_equivalent(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    if a.len() < MIN_FUZZY_LEN || b.len() < MIN_FUZZY_LEN {
        return false;
    }
    word_overlap_ratio(a, b) >= TAG_OVERLAP_THRESHOLD
}

/// Heuristic replacement for exact string equality: exact normalized match,
/// or high word-set overlap for strings long enough to compare fuzzily.
pub fn semantically_equivalent(a: &str, b: &str, kind: NormKind) -> bool {
    normalized_equivalent(&normalize_for(kind, a), &normalize_for(kind, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_after_normalization() {
        assert!(semantically_equivalent("  FinTech ", "fintech", NormKind::Taxonomy));
        assert!(semantically_equivalent("U.S.A.", "United States", NormKind::Location));
    }

    #[test]
    fn test_overlap_equivalence() {
        assert!(semantically_equivalent(
            "machine learning platform",
            "platform machine learning",
            NormKind::Text
        ));
    }

    #[test]
    fn test_short_strings_require_exact_match() {
        assert!(!semantically_equivalent("ab", "ac", NormKind::Text));
        assert!(semantically_equivalent("ab", "AB", NormKind::Text));
    }

    #[test]
    fn test_low_overlap_not_equivalent() {
        assert!(!semantically_equivalent(
            "consumer lending",
            "industrial robotics",
            NormKind::Text
        ));
    }
}
