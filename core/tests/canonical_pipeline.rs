use profile_core::canonical::{build_canonical_profile, ProfileMode};
use profile_core::insights::bullets_similar;
use profile_core::normalize::{normalize_location, semantically_equivalent, NormKind};
use profile_core::sources::RawSources;
use profile_core::validator::ProfileValidator;
use serde_json::json;

fn full_sources() -> RawSources {
    RawSources {
        extraction: Some(json!({
            "initial_details": {
                "name": "PayFlow",
                "industry": "Fintech",
                "hq_city": "Austin",
                "hq_state": "TX",
                "hq_country": "USA",
                "founded_year": 2022,
                "one_line_summary": "We build payment APIs for fintechs. Our team has 10 years of experience.",
                "problem_statement": "Payment integrations take months for small fintechs",
                "solution_summary": "One API that abstracts a dozen processors",
                "traction_summary": "Processing two million dollars monthly"
            },
            "financial_data": {
                "funding_stage": "Seed",
                "total_funding_usd": "2.5M"
            },
            "ai_analysis": {
                "summary": "Strong early traction in a competitive segment.",
                "insights": "Our team has ten years of experience in payments.\n- Deep integrations moat across processors\n- Churn risk among self-serve merchants\n- Competitive pressure from bundled incumbents\n- Should prioritize enterprise partnerships\n- Consider expanding into Latin American rails"
            },
            "meta": {"company_name": "PayFlow Inc"}
        })),
        enrichment: Some(json!({
            "name": "PayFlow Technologies",
            "website_url": "https://www.payflow.dev",
            "industry": "Financial Services",
            "city": "Austin",
            "state": "Texas",
            "country": "United States",
            "estimated_num_employees": 14,
            "keywords": ["payments", "payment", "fintech", "api platform"],
            "technologies": ["fintech"]
        })),
        questionnaire: Some(json!({
            "problem": "Payment integrations take months for small fintechs",
            "solution": "A single API that abstracts a dozen processors",
            "unique_value_proposition": "Fastest integration in the segment",
            "why_now": "Processor consolidation opened a window for aggregators",
            "traction": "Two hundred merchants live and growing",
            "industry": "Payments Infrastructure",
            "keywords": ["Payments", "infrastructure"]
        })),
    }
}

#[test]
fn builds_are_idempotent() {
    let sources = full_sources();
    let a = build_canonical_profile(&sources);
    let b = build_canonical_profile(&sources);
    assert_eq!(a, b);
    // Deep-equal through serialization too.
    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}

#[test]
fn empty_input_yields_fallback_profile() {
    let profile = build_canonical_profile(&RawSources::default());
    assert_eq!(profile.company_name, "Your startup");
    assert_eq!(profile.mode, ProfileMode::Fallback);
    assert!(profile.keywords.is_empty());
    assert!(profile.industries.is_empty());
    assert_eq!(profile.overview_deduped, "");
    assert!(profile.ai_insights_structured.summary.is_none());
}

#[test]
fn insight_lists_are_capped_and_exclusive() {
    let profile = build_canonical_profile(&full_sources());
    let insights = &profile.ai_insights_structured;
    assert!(insights.key_strengths.len() <= 3);
    assert!(insights.top_risks.len() <= 3);
    assert!(insights.suggested_next_actions.len() <= 3);
    for action in &insights.suggested_next_actions {
        for strength in &insights.key_strengths {
            assert!(
                !bullets_similar(action, strength),
                "action {:?} repeats strength {:?}",
                action,
                strength
            );
        }
    }
}

#[test]
fn tag_lists_have_no_semantic_duplicates() {
    let profile = build_canonical_profile(&full_sources());
    for (i, a) in profile.keywords.iter().enumerate() {
        for b in profile.keywords.iter().skip(i + 1) {
            assert!(
                !semantically_equivalent(a, b, NormKind::Taxonomy),
                "{:?} duplicates {:?}",
                a,
                b
            );
        }
    }
    // "payments" / "payment" / "Payments" collapsed to the first-seen form.
    assert!(profile.keywords.iter().any(|k| k == "Payments"));
    assert!(!profile.keywords.iter().any(|k| k == "payment"));
}

#[test]
fn shared_sentence_survives_exactly_once() {
    let sources = RawSources {
        extraction: Some(json!({
            "initial_details": {
                "one_line_summary": "We build payment APIs for fintechs. Our team has 10 years of experience."
            },
            "ai_analysis": {
                "insights": "Our team has ten years of experience in payments."
            }
        })),
        ..Default::default()
    };
    let profile = build_canonical_profile(&sources);
    let in_overview = profile.overview_deduped.contains("10 years");
    let in_ai = profile.ai_insights_deduped.contains("ten years");
    assert!(
        in_overview ^ in_ai,
        "overview: {:?} / ai: {:?}",
        profile.overview_deduped,
        profile.ai_insights_deduped
    );
    // The one-sided sentence always survives.
    assert!(profile.overview_deduped.contains("payment APIs"));
}

#[test]
fn location_spellings_converge() {
    let expected = normalize_location("United States");
    assert_eq!(normalize_location("U.S.A."), expected);
    assert_eq!(normalize_location("usa"), expected);
}

#[test]
fn built_profile_satisfies_validator() {
    let profile = build_canonical_profile(&full_sources());
    let summary = ProfileValidator::new().validate(&profile);
    assert_eq!(summary.overall, "PASS", "checks: {:?}", summary.checks);
}

#[test]
fn malformed_sources_never_panic() {
    let sources = RawSources {
        extraction: Some(json!("just a string")),
        enrichment: Some(json!([1, 2, 3])),
        questionnaire: Some(json!({"problem": 42, "keywords": "not a list"})),
    };
    let profile = build_canonical_profile(&sources);
    assert_eq!(profile.mode, ProfileMode::Canonical);
    assert_eq!(profile.company_name, "Your startup");
}
