use crate::normalize::{normalize_text, word_overlap_ratio};
use std::collections::HashSet;

// Sentence fragments at or below this length are noise, not sentences.
const MIN_SENTENCE_LEN: usize = 15;
// Sentences share an idea at a lower overlap bar than short tags do.
const SENTENCE_OVERLAP_THRESHOLD: f64 = 0.7;

/// Split free text into sentences on `.` `!` `?`, dropping short fragments.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.len() > MIN_SENTENCE_LEN)
        .map(str::to_string)
        .collect()
}

fn sentences_equivalent(a_norm: &str, b_norm: &str) -> bool {
    a_norm == b_norm || word_overlap_ratio(a_norm, b_norm) >= SENTENCE_OVERLAP_THRESHOLD
}

fn filter_against(keep_from: &[String], reference: &[String]) -> Vec<String> {
    let ref_norms: Vec<String> = reference.iter().map(|s| normalize_text(s)).collect();
    let ref_set: HashSet<&str> = ref_norms.iter().map(String::as_str).collect();
    keep_from
        .iter()
        .filter(|s| {
            let norm = normalize_text(s);
            if ref_set.contains(norm.as_str()) {
                return false;
            }
            !ref_norms.iter().any(|r| sentences_equivalent(&norm, r))
        })
        .cloned()
        .collect()
}

fn rejoin(sentences: &[String]) -> String {
    sentences.join(". ")
}

/// Remove cross-source duplication between an overview blob and AI-generated
/// commentary, independently in each direction. Each side is filtered
/// against the other side's ORIGINAL sentence set, so a shared idea survives
/// in exactly one place and one-sided information is never discarded. A side
/// whose every sentence is filtered out falls back to its original text.
pub fn remove_overlapping_fragments(overview: &str, ai_text: &str) -> (String, String) {
    let overview_sents = split_sentences(overview);
    let ai_sents = split_sentences(ai_text);

    let ai_kept = filter_against(&ai_sents, &overview_sents);
    let overview_kept = filter_against(&overview_sents, &ai_sents);

    let overview_out = if overview_kept.is_empty() {
        overview.trim().to_string()
    } else {
        rejoin(&overview_kept)
    };
    let ai_out = if ai_kept.is_empty() {
        ai_text.trim().to_string()
    } else {
        rejoin(&ai_kept)
    };
    (overview_out, ai_out)
}

/// True when any sentence of `a` near-duplicates a sentence of `b`.
pub fn texts_share_sentence(a: &str, b: &str) -> bool {
    let a_norms: Vec<String> = split_sentences(a).iter().map(|s| normalize_text(s)).collect();
    let b_norms: Vec<String> = split_sentences(b).iter().map(|s| normalize_text(s)).collect();
    a_norms
        .iter()
        .any(|sa| b_norms.iter().any(|sb| sentences_equivalent(sa, sb)))
}

/// One-directional variant: strip sentences of `text` that duplicate a
/// sentence of any reference text. Same fallback rule as the symmetric pass.
pub fn remove_fragments_covered_by(text: &str, references: &[&str]) -> String {
    let sents = split_sentences(text);
    let mut ref_sents: Vec<String> = Vec::new();
    for r in references {
        ref_sents.extend(split_sentences(r));
    }
    let kept = filter_against(&sents, &ref_sents);
    if kept.is_empty() {
        text.trim().to_string()
    } else {
        rejoin(&kept)
    }
}
