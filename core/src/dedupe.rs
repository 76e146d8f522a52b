use crate::normalize::{is_blank_value, normalize_for, normalized_equivalent, NormKind};
use std::collections::HashSet;

/// Merge a tag list gathered from several sources into one list with no
/// semantic duplicates. The first-seen variant keeps its original casing and
/// punctuation; output order is first-occurrence order.
pub fn dedupe_across_sources(items: &[String], kind: NormKind) -> Vec<String> {
    let mut seen_exact: HashSet<String> = HashSet::new();
    let mut accepted_norms: Vec<String> = Vec::new();
    let mut out: Vec<String> = Vec::new();

    for item in items {
        if is_blank_value(item) {
            continue;
        }
        let norm = normalize_for(kind, item);
        if norm.is_empty() || seen_exact.contains(&norm) {
            continue;
        }
        if accepted_norms
            .iter()
            .any(|prev| normalized_equivalent(prev, &norm))
        {
            continue;
        }
        seen_exact.insert(norm.clone());
        accepted_norms.push(norm);
        out.push(item.trim().to_string());
    }
    out
}
