use crate::normalize::is_blank_value;
use serde::{Deserialize, Serialize};

/// Where a candidate value came from. Ordering of `DEFAULT_PRIORITY` is the
/// platform-wide trust ranking when sources disagree on a field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Manual,
    Questionnaire,
    Enrichment,
    Linkedin,
    Extraction,
    ExtractionMeta,
    Ai,
}

pub const DEFAULT_PRIORITY: &[SourceKind] = &[
    SourceKind::Manual,
    SourceKind::Questionnaire,
    SourceKind::Enrichment,
    SourceKind::Linkedin,
    SourceKind::Extraction,
    SourceKind::ExtractionMeta,
    SourceKind::Ai,
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    pub source: SourceKind,
}

impl Candidate {
    pub fn new(value: impl Into<String>, source: SourceKind) -> Self {
        Candidate {
            value: value.into(),
            source,
        }
    }
}

/// Resolved value plus everything it beat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldProvenance {
    pub value: String,
    pub source: SourceKind,
    pub alternatives: Vec<Candidate>,
    pub confidence: ConfidenceTier,
}

fn confidence_for(source: SourceKind) -> ConfidenceTier {
    match source {
        SourceKind::Manual | SourceKind::Questionnaire => ConfidenceTier::High,
        SourceKind::Enrichment | SourceKind::Linkedin => ConfidenceTier::Medium,
        SourceKind::Extraction | SourceKind::ExtractionMeta | SourceKind::Ai => {
            ConfidenceTier::Low
        }
    }
}

/// Pick a winning value by source priority. Blank candidates are dropped
/// first; the remainder is stable-sorted by position in `order` (sources not
/// listed in `order` sort after all listed ones, keeping input order); the
/// head wins and the rest become alternatives. None when nothing usable.
pub fn resolve_by_priority(
    candidates: Vec<Candidate>,
    order: &[SourceKind],
) -> Option<FieldProvenance> {
    let mut usable: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| !is_blank_value(&c.value))
        .map(|c| Candidate {
            value: c.value.trim().to_string(),
            source: c.source,
        })
        .collect();
    if usable.is_empty() {
        return None;
    }
    let rank = |s: SourceKind| order.iter().position(|o| *o == s).unwrap_or(order.len());
    usable.sort_by_key(|c| rank(c.source));
    let winner = usable.remove(0);
    Some(FieldProvenance {
        confidence: confidence_for(winner.source),
        value: winner.value,
        source: winner.source,
        alternatives: usable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_wins() {
        let resolved = resolve_by_priority(
            vec![
                Candidate::new("Fintech", SourceKind::Extraction),
                Candidate::new("Financial Services", SourceKind::Questionnaire),
                Candidate::new("FinTech", SourceKind::Enrichment),
            ],
            DEFAULT_PRIORITY,
        )
        .unwrap();
        assert_eq!(resolved.value, "Financial Services");
        assert_eq!(resolved.source, SourceKind::Questionnaire);
        assert_eq!(resolved.alternatives.len(), 2);
        assert_eq!(resolved.confidence, ConfidenceTier::High);
    }

    #[test]
    fn test_blank_candidates_dropped() {
        let resolved = resolve_by_priority(
            vec![
                Candidate::new("  ", SourceKind::Questionnaire),
                Candidate::new("n/a", SourceKind::Enrichment),
                Candidate::new("Acme Robotics", SourceKind::Extraction),
            ],
            DEFAULT_PRIORITY,
        )
        .unwrap();
        assert_eq!(resolved.value, "Acme Robotics");
        assert_eq!(resolved.source, SourceKind::Extraction);
        assert!(resolved.alternatives.is_empty());
    }

    #[test]
    fn test_stable_within_same_source() {
        // Two candidates from the same source keep input order.
        let resolved = resolve_by_priority(
            vec![
                Candidate::new("first", SourceKind::Extraction),
                Candidate::new("second", SourceKind::Extraction),
            ],
            DEFAULT_PRIORITY,
        )
        .unwrap();
        assert_eq!(resolved.value, "first");
        assert_eq!(resolved.alternatives[0].value, "second");
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_by_priority(vec![], DEFAULT_PRIORITY).is_none());
    }

    #[test]
    fn test_custom_order_overrides_default() {
        let name_order = &[
            SourceKind::Extraction,
            SourceKind::ExtractionMeta,
            SourceKind::Enrichment,
        ];
        let resolved = resolve_by_priority(
            vec![
                Candidate::new("Acme Inc", SourceKind::Enrichment),
                Candidate::new("Acme", SourceKind::Extraction),
            ],
            name_order,
        )
        .unwrap();
        assert_eq!(resolved.value, "Acme");
    }
}
