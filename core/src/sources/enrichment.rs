use super::{i64_field, list_field, str_field, usd_field};
use serde_json::Value;

/// Typed view of the third-party organization-enrichment payload (Apollo
/// organization shape, also produced by the research fallback).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentDoc {
    pub name: Option<String>,
    pub website_url: Option<String>,
    pub primary_domain: Option<String>,
    pub linkedin_url: Option<String>,
    pub industry: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub founded_year: Option<i64>,
    pub estimated_num_employees: Option<i64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub total_funding: Option<u64>,
    pub latest_funding_round_type: Option<String>,
    pub keywords: Vec<String>,
    pub technologies: Vec<String>,
}

impl EnrichmentDoc {
    pub fn from_value(v: &Value) -> Self {
        // Some callers wrap the payload in {"organization": {...}}.
        let org = v.get("organization").filter(|o| o.is_object()).unwrap_or(v);
        EnrichmentDoc {
            name: str_field(org, "name"),
            website_url: str_field(org, "website_url"),
            primary_domain: str_field(org, "primary_domain"),
            linkedin_url: str_field(org, "linkedin_url"),
            industry: str_field(org, "industry"),
            short_description: str_field(org, "short_description"),
            long_description: str_field(org, "long_description"),
            founded_year: i64_field(org, "founded_year"),
            estimated_num_employees: i64_field(org, "estimated_num_employees"),
            city: str_field(org, "city"),
            state: str_field(org, "state"),
            country: str_field(org, "country"),
            total_funding: usd_field(org, "total_funding"),
            latest_funding_round_type: str_field(org, "latest_funding_round_type"),
            keywords: list_field(org, "keywords"),
            technologies: list_field(org, "technologies"),
        }
    }
}
