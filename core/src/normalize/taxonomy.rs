use super::text::normalize_text;

/// Synonym table for industry/keyword tags. Keys are in normalized form.
const TAXONOMY_SYNONYMS: &[(&str, &str)] = &[
    ("healthcare", "health"),
    ("health care", "health"),
    ("fintech", "financial technology"),
    ("fin tech", "financial technology"),
    ("saas", "software as a service"),
    ("ecommerce", "electronic commerce"),
    ("e-commerce", "electronic commerce"),
    ("ml", "artificial intelligence"),
    ("machine learning", "artificial intelligence"),
    ("ai", "artificial intelligence"),
    ("crypto", "cryptocurrency"),
    ("edtech", "education technology"),
];

fn synonym_for(s: &str) -> Option<&'static str> {
    TAXONOMY_SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == s)
        .map(|(_, canonical)| *canonical)
}

/// Naive singular form: drop one trailing `s` from strings longer than 3
/// chars. Deliberately crude; the synonym table is consulted before this
/// runs so short branded terms ("saas") are not mangled.
fn singularize(s: &str) -> String {
    if s.len() > 3 && s.ends_with('s') {
        s[..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

pub fn normalize_taxonomy(s: &str) -> String {
    let norm = normalize_text(&s.replace('&', " and "));
    if let Some(canonical) = synonym_for(&norm) {
        return canonical.to_string();
    }
    let singular = singularize(&norm);
    match synonym_for(&singular) {
        Some(canonical) => canonical.to_string(),
        None => singular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms() {
        assert_eq!(normalize_taxonomy("Healthcare"), "health");
        assert_eq!(normalize_taxonomy("FinTech"), "financial technology");
        assert_eq!(normalize_taxonomy("SaaS"), "software as a service");
    }

    #[test]
    fn test_ampersand_becomes_and() {
        assert_eq!(normalize_taxonomy("Payments & Lending"), "payments and lending");
    }

    #[test]
    fn test_singularization() {
        assert_eq!(normalize_taxonomy("Payments"), "payment");
        // 3 chars or fewer keep their plural
        assert_eq!(normalize_taxonomy("gas"), "gas");
    }

    #[test]
    fn test_plural_synonym_still_matches() {
        assert_eq!(normalize_taxonomy("healthcares"), "health");
    }
}
