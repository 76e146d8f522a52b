use crate::canonical::CanonicalCompanyProfile;
use crate::error::ProfileResult;
use crate::insights::bullets_similar;
use crate::normalize::{semantically_equivalent, NormKind};
use crate::overlap::texts_share_sentence;
use serde::{Deserialize, Serialize};

const MAX_INSIGHT_ITEMS: usize = 3;
const MAX_SUMMARY_CHARS: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub check_id: String,
    pub severity: String, // BLOCKER|ADVISORY
    pub result: String,   // PASS|FAIL
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub overall: String, // PASS|FAIL
    pub checks: Vec<CheckResult>,
}

impl ValidationSummary {
    pub fn result_for_check(&self, check_id: &str) -> (String, String) {
        for c in &self.checks {
            if c.check_id == check_id {
                return (c.result.clone(), c.message.clone());
            }
        }
        (
            "FAIL".to_string(),
            format!("missing check result for {}", check_id),
        )
    }
}

/// Runs the merge-pipeline invariants against a profile, as a standalone
/// check over serialized output. Blocker failures fail the summary;
/// advisory failures are reported without flipping `overall`.
pub struct ProfileValidator;

impl Default for ProfileValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileValidator {
    pub fn new() -> Self {
        ProfileValidator
    }

    pub fn validate_json(&self, raw: &str) -> ProfileResult<ValidationSummary> {
        let profile: CanonicalCompanyProfile = serde_json::from_str(raw)?;
        Ok(self.validate(&profile))
    }

    pub fn validate(&self, profile: &CanonicalCompanyProfile) -> ValidationSummary {
        let mut checks = Vec::new();

        checks.push(blocker(
            "company_name_present",
            !profile.company_name.trim().is_empty(),
            "company_name must not be empty",
        ));

        let insights = &profile.ai_insights_structured;
        checks.push(blocker(
            "insight_list_caps",
            insights.key_strengths.len() <= MAX_INSIGHT_ITEMS
                && insights.top_risks.len() <= MAX_INSIGHT_ITEMS
                && insights.suggested_next_actions.len() <= MAX_INSIGHT_ITEMS,
            "structured insight lists cap at 3 items",
        ));

        let action_overlaps_strength = insights.suggested_next_actions.iter().any(|action| {
            insights
                .key_strengths
                .iter()
                .any(|strength| bullets_similar(action, strength))
        });
        checks.push(blocker(
            "action_strength_exclusion",
            !action_overlaps_strength,
            "no suggested action may repeat a key strength",
        ));

        checks.push(blocker(
            "keywords_unique",
            list_is_unique(&profile.keywords),
            "keywords must be pairwise semantically distinct",
        ));
        checks.push(blocker(
            "industries_unique",
            list_is_unique(&profile.industries),
            "industries must be pairwise semantically distinct",
        ));

        checks.push(blocker(
            "summary_length",
            insights
                .summary
                .as_ref()
                .map(|s| s.chars().count() <= MAX_SUMMARY_CHARS)
                .unwrap_or(true),
            "insight summary caps at 500 chars",
        ));

        // Advisory: when every sentence of a side duplicated the other, the
        // remover keeps that side's original text intact, so a residual
        // shared sentence can be legitimate.
        checks.push(check(
            "overview_ai_overlap",
            "ADVISORY",
            profile.overview_deduped == profile.ai_insights_deduped
                || !texts_share_sentence(&profile.overview_deduped, &profile.ai_insights_deduped),
            "overview and AI-insight text should not share a sentence",
        ));

        let overall = if checks
            .iter()
            .all(|c| c.result == "PASS" || c.severity != "BLOCKER")
        {
            "PASS"
        } else {
            "FAIL"
        };
        ValidationSummary {
            overall: overall.to_string(),
            checks,
        }
    }
}

fn blocker(check_id: &str, passed: bool, message: &str) -> CheckResult {
    check(check_id, "BLOCKER", passed, message)
}

fn check(check_id: &str, severity: &str, passed: bool, message: &str) -> CheckResult {
    CheckResult {
        check_id: check_id.to_string(),
        severity: severity.to_string(),
        result: if passed { "PASS" } else { "FAIL" }.to_string(),
        message: message.to_string(),
    }
}

fn list_is_unique(items: &[String]) -> bool {
    for (i, a) in items.iter().enumerate() {
        for b in items.iter().skip(i + 1) {
            if semantically_equivalent(a, b, NormKind::Taxonomy) {
                return false;
            }
        }
    }
    true
}
