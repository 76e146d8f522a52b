pub mod classifier;

pub use classifier::{BulletCategory, BulletClassifier, KeywordClassifier};

use crate::normalize::normalize_text;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// Lines at or below this length are markers or noise, not bullets.
const MIN_BULLET_LEN: usize = 12;
// Short bullets must match exactly; longer ones compare as word bags.
const SHORT_BULLET_LEN: usize = 20;
const BULLET_OVERLAP_THRESHOLD: f64 = 0.7;
const MAX_PER_CATEGORY: usize = 3;
const MAX_SUMMARY_CHARS: usize = 500;

/// Categorized, capped, deduplicated summary of free-text AI commentary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructuredInsights {
    pub summary: Option<String>,
    pub key_strengths: Vec<String>,
    pub top_risks: Vec<String>,
    pub suggested_next_actions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBullets {
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub actions: Vec<String>,
}

fn marker_regex() -> Regex {
    Regex::new(r"^\s*(?:[-*•‣▪–—]+|\d+[.)])\s*").unwrap_or_else(|_| Regex::new("^$").unwrap())
}

/// Split an insights blob into categorized bullets. Leading bullet/number
/// markers are stripped; lines of 12 chars or fewer are discarded. When
/// nothing classifies but lines exist, the first two lines seed strengths so
/// non-empty input always yields non-empty output.
pub fn parse_bullets(text: &str, classifier: &dyn BulletClassifier) -> ParsedBullets {
    let marker = marker_regex();
    let cleaned: Vec<String> = text
        .lines()
        .map(|line| marker.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    let mut out = ParsedBullets::default();
    for line in &cleaned {
        if line.len() <= MIN_BULLET_LEN {
            continue;
        }
        match classifier.classify(line) {
            BulletCategory::Risk => out.risks.push(line.clone()),
            BulletCategory::Action => out.actions.push(line.clone()),
            BulletCategory::Strength => out.strengths.push(line.clone()),
        }
    }

    if out.strengths.is_empty() && out.risks.is_empty() && out.actions.is_empty() {
        out.strengths = cleaned.into_iter().take(2).collect();
    }
    out
}

/// Near-duplicate check for insight bullets. Both short: exact normalized
/// match. Otherwise: word bags with words of 2 chars or fewer removed,
/// overlap of at least 0.7 of the smaller bag.
pub fn bullets_similar(a: &str, b: &str) -> bool {
    let na = normalize_text(a);
    let nb = normalize_text(b);
    if na == nb {
        return true;
    }
    if a.len() < SHORT_BULLET_LEN && b.len() < SHORT_BULLET_LEN {
        return false;
    }
    let bag = |s: &str| -> HashSet<String> {
        s.split_whitespace()
            .filter(|w| w.len() > 2)
            .map(str::to_string)
            .collect()
    };
    let ba = bag(&na);
    let bb = bag(&nb);
    let smaller = ba.len().min(bb.len());
    if smaller == 0 {
        return false;
    }
    let shared = ba.intersection(&bb).count();
    shared as f64 / smaller as f64 >= BULLET_OVERLAP_THRESHOLD
}

/// Walk items in order keeping at most `max`, skipping blanks, repeats, and
/// anything similar to an `exclude` entry or an already-kept entry.
pub fn dedupe_and_limit(items: &[String], max: usize, exclude: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if out.len() >= max {
            break;
        }
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        let norm = normalize_text(trimmed);
        if norm.is_empty() || seen.contains(&norm) {
            continue;
        }
        if exclude.iter().any(|e| bullets_similar(e, trimmed)) {
            continue;
        }
        if out.iter().any(|kept| bullets_similar(kept, trimmed)) {
            continue;
        }
        seen.insert(norm);
        out.push(trimmed.to_string());
    }
    out
}

fn clean_summary(summary: &str) -> Option<String> {
    let mut s = summary.trim();
    // strip one layer of wrapping quotes
    for (open, close) in [('"', '"'), ('\'', '\''), ('“', '”')] {
        if s.len() >= 2 && s.starts_with(open) && s.ends_with(close) {
            s = s[open.len_utf8()..s.len() - close.len_utf8()].trim();
        }
    }
    if s.is_empty() {
        return None;
    }
    let capped: String = s.chars().take(MAX_SUMMARY_CHARS).collect();
    Some(capped.trim_end().to_string())
}

/// Build the structured insight object from the raw AI summary and insight
/// text. Strengths and risks cap at 3; suggested actions cap at 3 and never
/// repeat an already-chosen strength.
pub fn build_structured_insights(
    summary: Option<&str>,
    raw_insights: Option<&str>,
    classifier: &dyn BulletClassifier,
) -> StructuredInsights {
    let summary_clean = summary.and_then(clean_summary);

    let mut combined = String::new();
    if let Some(raw) = raw_insights {
        combined.push_str(raw);
    }
    if let Some(s) = &summary_clean {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(s);
    }

    let bullets = parse_bullets(&combined, classifier);
    let key_strengths = dedupe_and_limit(&bullets.strengths, MAX_PER_CATEGORY, &[]);
    let top_risks = dedupe_and_limit(&bullets.risks, MAX_PER_CATEGORY, &[]);
    let suggested_next_actions =
        dedupe_and_limit(&bullets.actions, MAX_PER_CATEGORY, &key_strengths);

    StructuredInsights {
        summary: summary_clean,
        key_strengths,
        top_risks,
        suggested_next_actions,
    }
}
