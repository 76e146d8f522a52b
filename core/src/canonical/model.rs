use crate::insights::StructuredInsights;
use crate::resolve::FieldProvenance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bumped whenever merge semantics change; part of the cache key so stale
/// entries from an older pipeline never serve.
pub const PIPELINE_VERSION: &str = "v2";

pub const DEFAULT_COMPANY_NAME: &str = "Your startup";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileMode {
    /// Merged from at least one present source document.
    Canonical,
    /// All sources absent; the profile is the all-defaults shell.
    Fallback,
}

/// The single deduplicated view model merged from the raw sources. Always
/// fully populated when serialized: absent scalars are `null`, absent lists
/// `[]`, absent text `""`, never a missing key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalCompanyProfile {
    pub company_name: String,
    pub website_url: Option<String>,
    pub domain: Option<String>,
    pub linkedin_url: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub entity_type: Option<String>,
    pub product_stage: Option<String>,
    pub business_model: Option<String>,
    pub target_market: Option<String>,
    pub founded_year: Option<i64>,
    pub employee_count: Option<i64>,
    pub funding_stage: Option<String>,
    pub total_funding_usd: Option<u64>,
    pub last_round_type: Option<String>,

    pub keywords: Vec<String>,
    pub industries: Vec<String>,

    pub problem: String,
    pub solution: String,
    pub unique_value_proposition: String,
    pub why_now: String,
    pub traction: String,

    pub overview_deduped: String,
    pub ai_insights_deduped: String,
    pub ai_insights_structured: StructuredInsights,

    pub provenance: BTreeMap<String, FieldProvenance>,
    pub mode: ProfileMode,
}

impl Default for CanonicalCompanyProfile {
    fn default() -> Self {
        CanonicalCompanyProfile {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            website_url: None,
            domain: None,
            linkedin_url: None,
            location: None,
            industry: None,
            sub_industry: None,
            entity_type: None,
            product_stage: None,
            business_model: None,
            target_market: None,
            founded_year: None,
            employee_count: None,
            funding_stage: None,
            total_funding_usd: None,
            last_round_type: None,
            keywords: Vec::new(),
            industries: Vec::new(),
            problem: String::new(),
            solution: String::new(),
            unique_value_proposition: String::new(),
            why_now: String::new(),
            traction: String::new(),
            overview_deduped: String::new(),
            ai_insights_deduped: String::new(),
            ai_insights_structured: StructuredInsights::default(),
            provenance: BTreeMap::new(),
            mode: ProfileMode::Fallback,
        }
    }
}
