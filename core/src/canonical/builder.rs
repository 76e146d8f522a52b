use super::model::{
    CanonicalCompanyProfile, ProfileMode, DEFAULT_COMPANY_NAME,
};
use crate::dedupe::dedupe_across_sources;
use crate::insights::{build_structured_insights, BulletClassifier, KeywordClassifier};
use crate::normalize::extract_domain;
use crate::normalize::NormKind;
use crate::overlap::{remove_fragments_covered_by, remove_overlapping_fragments};
use crate::resolve::{resolve_by_priority, Candidate, FieldProvenance, SourceKind, DEFAULT_PRIORITY};
use crate::sources::{EnrichmentDoc, ExtractionDoc, QuestionnaireDoc, RawSources};
use std::collections::BTreeMap;

// Company name is the one field where the extracted deck beats the
// enrichment API: decks name the company on page one.
const NAME_PRIORITY: &[SourceKind] = &[
    SourceKind::Extraction,
    SourceKind::ExtractionMeta,
    SourceKind::Enrichment,
];

// Funding facts stated in the company's own documents beat the enrichment
// API's estimates.
const FUNDING_PRIORITY: &[SourceKind] = &[SourceKind::Extraction, SourceKind::Enrichment];

/// Build the canonical profile with the default keyword classifier.
pub fn build_canonical_profile(sources: &RawSources) -> CanonicalCompanyProfile {
    build_canonical_profile_with(sources, &KeywordClassifier::default())
}

/// Pure merge of the three raw source documents into one view model.
/// Malformed or absent data degrades to defaults; this never fails.
pub fn build_canonical_profile_with(
    sources: &RawSources,
    classifier: &dyn BulletClassifier,
) -> CanonicalCompanyProfile {
    let extraction = sources
        .extraction
        .as_ref()
        .map(ExtractionDoc::from_value)
        .unwrap_or_default();
    let enrichment = sources
        .enrichment
        .as_ref()
        .map(EnrichmentDoc::from_value)
        .unwrap_or_default();
    let questionnaire = sources
        .questionnaire
        .as_ref()
        .map(QuestionnaireDoc::from_value)
        .unwrap_or_default();

    let mut provenance: BTreeMap<String, FieldProvenance> = BTreeMap::new();

    let company_name = resolve_field(
        &mut provenance,
        "company_name",
        vec![
            opt_candidate(&extraction.initial.name, SourceKind::Extraction),
            opt_candidate(&extraction.meta_company_name, SourceKind::ExtractionMeta),
            opt_candidate(&extraction.chart_startup_name, SourceKind::ExtractionMeta),
            opt_candidate(&enrichment.name, SourceKind::Enrichment),
        ],
        NAME_PRIORITY,
    )
    .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string());

    let website_url = resolve_field(
        &mut provenance,
        "website_url",
        vec![
            opt_candidate(&enrichment.website_url, SourceKind::Enrichment),
            opt_candidate(&extraction.initial.website_url, SourceKind::Extraction),
        ],
        DEFAULT_PRIORITY,
    );
    let domain = website_url
        .as_deref()
        .and_then(extract_domain)
        .or_else(|| enrichment.primary_domain.clone());

    let linkedin_url = resolve_field(
        &mut provenance,
        "linkedin_url",
        vec![
            opt_candidate(&enrichment.linkedin_url, SourceKind::Enrichment),
            opt_candidate(&extraction.initial.linkedin_url, SourceKind::Extraction),
        ],
        DEFAULT_PRIORITY,
    );

    let location = resolve_field(
        &mut provenance,
        "location",
        vec![
            compose_location(&[&questionnaire.hq_city, &questionnaire.hq_country])
                .map(|v| Candidate::new(v, SourceKind::Questionnaire)),
            compose_location(&[&enrichment.city, &enrichment.state, &enrichment.country])
                .map(|v| Candidate::new(v, SourceKind::Enrichment)),
            compose_location(&[
                &extraction.initial.hq_city,
                &extraction.initial.hq_state,
                &extraction.initial.hq_country,
            ])
            .map(|v| Candidate::new(v, SourceKind::Extraction)),
        ],
        DEFAULT_PRIORITY,
    );

    let industry = resolve_field(
        &mut provenance,
        "industry",
        vec![
            opt_candidate(&questionnaire.industry, SourceKind::Questionnaire),
            opt_candidate(&enrichment.industry, SourceKind::Enrichment),
            opt_candidate(&extraction.initial.industry, SourceKind::Extraction),
        ],
        DEFAULT_PRIORITY,
    );

    let entity_type = resolve_field(
        &mut provenance,
        "entity_type",
        vec![
            opt_candidate(&questionnaire.entity_type, SourceKind::Questionnaire),
            opt_candidate(&extraction.initial.entity_type, SourceKind::Extraction),
        ],
        DEFAULT_PRIORITY,
    );

    let product_stage = resolve_field(
        &mut provenance,
        "product_stage",
        vec![
            opt_candidate(&questionnaire.product_status, SourceKind::Questionnaire),
            opt_candidate(&extraction.initial.product_stage, SourceKind::Extraction),
        ],
        DEFAULT_PRIORITY,
    );

    let business_model = resolve_field(
        &mut provenance,
        "business_model",
        vec![
            opt_candidate(&questionnaire.revenue_model, SourceKind::Questionnaire),
            opt_candidate(&extraction.initial.business_model, SourceKind::Extraction),
        ],
        DEFAULT_PRIORITY,
    );

    let target_market = resolve_field(
        &mut provenance,
        "target_market",
        vec![
            opt_candidate(&questionnaire.target_market, SourceKind::Questionnaire),
            opt_candidate(&extraction.initial.target_market, SourceKind::Extraction),
        ],
        DEFAULT_PRIORITY,
    );

    let funding_stage = resolve_field(
        &mut provenance,
        "funding_stage",
        vec![
            opt_candidate(&extraction.financial.funding_stage, SourceKind::Extraction),
            opt_candidate(
                &enrichment.latest_funding_round_type,
                SourceKind::Enrichment,
            ),
        ],
        FUNDING_PRIORITY,
    );

    // Tag lists: every source contributes, first-seen variant wins.
    let mut all_keywords: Vec<String> = Vec::new();
    all_keywords.extend(questionnaire.keywords.iter().cloned());
    all_keywords.extend(enrichment.keywords.iter().cloned());
    all_keywords.extend(enrichment.technologies.iter().cloned());
    let keywords = dedupe_across_sources(&all_keywords, NormKind::Taxonomy);

    let mut all_industries: Vec<String> = Vec::new();
    for candidate in [
        &questionnaire.industry,
        &enrichment.industry,
        &extraction.initial.industry,
        &extraction.initial.sub_industry,
    ] {
        if let Some(v) = candidate {
            all_industries.push(v.clone());
        }
    }
    let industries = dedupe_across_sources(&all_industries, NormKind::Taxonomy);

    // Business narrative: questionnaire answers win over extracted summaries.
    let problem = first_text(&[&questionnaire.problem, &extraction.initial.problem_statement]);
    let solution = first_text(&[&questionnaire.solution, &extraction.initial.solution_summary]);
    let unique_value_proposition = first_text(&[&questionnaire.unique_value_proposition]);
    let why_now = first_text(&[&questionnaire.why_now]);
    let traction = first_text(&[&questionnaire.traction, &extraction.initial.traction_summary]);

    // Free-text overlap removal: overview vs AI commentary first, then strip
    // overview sentences already told by a narrative field.
    let overview_raw = first_text(&[
        &enrichment.long_description,
        &enrichment.short_description,
        &extraction.initial.one_line_summary,
    ]);
    let ai_raw = extraction.ai.insights.clone().unwrap_or_default();
    let (overview_pass, ai_insights_deduped) =
        remove_overlapping_fragments(&overview_raw, &ai_raw);
    let narrative_refs: Vec<&str> = [
        &problem,
        &solution,
        &unique_value_proposition,
        &why_now,
        &traction,
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .map(String::as_str)
    .collect();
    let overview_deduped = remove_fragments_covered_by(&overview_pass, &narrative_refs);

    let ai_insights_structured = build_structured_insights(
        extraction.ai.summary.as_deref(),
        extraction.ai.insights.as_deref(),
        classifier,
    );

    let mode = if sources.is_empty() {
        ProfileMode::Fallback
    } else {
        ProfileMode::Canonical
    };

    CanonicalCompanyProfile {
        company_name,
        website_url,
        domain,
        linkedin_url,
        location,
        industry,
        sub_industry: extraction.initial.sub_industry.clone(),
        entity_type,
        product_stage,
        business_model,
        target_market,
        founded_year: enrichment
            .founded_year
            .or(extraction.initial.founded_year),
        employee_count: enrichment
            .estimated_num_employees
            .or(extraction.initial.team_size),
        funding_stage,
        total_funding_usd: extraction
            .financial
            .total_funding_usd
            .or(enrichment.total_funding),
        last_round_type: extraction
            .financial
            .last_round_type
            .clone()
            .or_else(|| enrichment.latest_funding_round_type.clone()),
        keywords,
        industries,
        problem,
        solution,
        unique_value_proposition,
        why_now,
        traction,
        overview_deduped,
        ai_insights_deduped,
        ai_insights_structured,
        provenance,
        mode,
    }
}

fn opt_candidate(value: &Option<String>, source: SourceKind) -> Option<Candidate> {
    value.as_ref().map(|v| Candidate::new(v.clone(), source))
}

fn resolve_field(
    provenance: &mut BTreeMap<String, FieldProvenance>,
    field: &str,
    candidates: Vec<Option<Candidate>>,
    order: &[SourceKind],
) -> Option<String> {
    let resolved = resolve_by_priority(candidates.into_iter().flatten().collect(), order)?;
    let value = resolved.value.clone();
    provenance.insert(field.to_string(), resolved);
    Some(value)
}

fn compose_location(parts: &[&Option<String>]) -> Option<String> {
    let present: Vec<&str> = parts
        .iter()
        .filter_map(|p| p.as_deref())
        .collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(", "))
    }
}

fn first_text(chain: &[&Option<String>]) -> String {
    chain
        .iter()
        .find_map(|v| v.as_deref())
        .unwrap_or_default()
        .to_string()
}
