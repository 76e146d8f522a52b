use super::{i64_field, list_field, section, str_field, usd_field};
use serde_json::Value;

/// "initial_details" section of the document-extraction output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitialDetails {
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub entity_type: Option<String>,
    pub website_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub founded_year: Option<i64>,
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub hq_city: Option<String>,
    pub hq_state: Option<String>,
    pub hq_country: Option<String>,
    pub team_size: Option<i64>,
    pub business_model: Option<String>,
    pub target_market: Option<String>,
    pub product_stage: Option<String>,
    pub one_line_summary: Option<String>,
    pub problem_statement: Option<String>,
    pub solution_summary: Option<String>,
    pub traction_summary: Option<String>,
}

/// "financial_data" section of the document-extraction output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialData {
    pub funding_stage: Option<String>,
    pub total_funding_usd: Option<u64>,
    pub last_round_type: Option<String>,
    pub last_round_amount_usd: Option<u64>,
    pub last_round_date: Option<String>,
    pub valuation_usd: Option<u64>,
    pub mrr_usd: Option<u64>,
    pub arr_usd: Option<u64>,
    pub runway_months: Option<i64>,
    pub paying_customers: Option<i64>,
}

/// AI commentary attached to an extraction run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiAnalysis {
    pub summary: Option<String>,
    pub insights: Option<String>,
}

/// Typed view of the extraction document. Every field defaults to absent;
/// parsing never fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionDoc {
    pub initial: InitialDetails,
    pub financial: FinancialData,
    pub ai: AiAnalysis,
    pub chart_startup_name: Option<String>,
    pub meta_company_name: Option<String>,
}

impl ExtractionDoc {
    pub fn from_value(v: &Value) -> Self {
        let initial = section(v, "initial_details")
            .map(parse_initial)
            .unwrap_or_default();
        let financial = section(v, "financial_data")
            .map(parse_financial)
            .unwrap_or_default();
        let ai = parse_ai(v);

        let chart_startup_name = section(v, "charts")
            .or_else(|| section(v, "chart_pack"))
            .and_then(|c| str_field(c, "startup_name"));
        let meta_company_name = section(v, "meta")
            .or_else(|| section(v, "extraction_meta"))
            .and_then(|m| str_field(m, "company_name"));

        ExtractionDoc {
            initial,
            financial,
            ai,
            chart_startup_name,
            meta_company_name,
        }
    }
}

fn parse_initial(s: &Value) -> InitialDetails {
    InitialDetails {
        name: str_field(s, "name"),
        legal_name: str_field(s, "legal_name"),
        entity_type: str_field(s, "entity_type"),
        website_url: str_field(s, "website_url"),
        linkedin_url: str_field(s, "linkedin_url"),
        founded_year: i64_field(s, "founded_year"),
        industry: str_field(s, "industry"),
        sub_industry: str_field(s, "sub_industry"),
        hq_city: str_field(s, "hq_city"),
        hq_state: str_field(s, "hq_state"),
        hq_country: str_field(s, "hq_country"),
        team_size: i64_field(s, "team_size"),
        business_model: str_field(s, "business_model"),
        target_market: str_field(s, "target_market"),
        product_stage: str_field(s, "product_stage"),
        one_line_summary: str_field(s, "one_line_summary"),
        problem_statement: str_field(s, "problem_statement"),
        solution_summary: str_field(s, "solution_summary"),
        traction_summary: str_field(s, "traction_summary"),
    }
}

fn parse_financial(s: &Value) -> FinancialData {
    FinancialData {
        funding_stage: str_field(s, "funding_stage"),
        total_funding_usd: usd_field(s, "total_funding_usd"),
        last_round_type: str_field(s, "last_round_type"),
        last_round_amount_usd: usd_field(s, "last_round_amount_usd"),
        last_round_date: str_field(s, "last_round_date"),
        valuation_usd: usd_field(s, "valuation_usd"),
        mrr_usd: usd_field(s, "mrr_usd"),
        arr_usd: usd_field(s, "arr_usd"),
        runway_months: i64_field(s, "runway_months"),
        paying_customers: i64_field(s, "paying_customers"),
    }
}

fn parse_ai(v: &Value) -> AiAnalysis {
    if let Some(s) = section(v, "ai_analysis") {
        let insights = str_field(s, "insights").or_else(|| {
            let lines = list_field(s, "insights");
            if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            }
        });
        return AiAnalysis {
            summary: str_field(s, "summary"),
            insights,
        };
    }
    AiAnalysis {
        summary: str_field(v, "ai_summary"),
        insights: str_field(v, "ai_insights"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_document() {
        let v = json!({
            "initial_details": {
                "name": "Acme Robotics",
                "founded_year": "2021",
                "hq_city": "Berlin",
                "hq_country": "Germany",
                "team_size": 12,
                "one_line_summary": "Robots for mid-size warehouses"
            },
            "financial_data": {
                "funding_stage": "Seed",
                "total_funding_usd": "1.5M"
            },
            "ai_analysis": {
                "summary": "Credible team in a crowded space.",
                "insights": ["- Strong technical moat", "- Churn risk in pilot accounts"]
            },
            "charts": {"startup_name": "Acme"},
            "meta": {"company_name": "Acme Robotics GmbH"}
        });
        let doc = ExtractionDoc::from_value(&v);
        assert_eq!(doc.initial.name.as_deref(), Some("Acme Robotics"));
        assert_eq!(doc.initial.founded_year, Some(2021));
        assert_eq!(doc.initial.team_size, Some(12));
        assert_eq!(doc.financial.total_funding_usd, Some(1_500_000));
        assert_eq!(doc.chart_startup_name.as_deref(), Some("Acme"));
        assert_eq!(doc.meta_company_name.as_deref(), Some("Acme Robotics GmbH"));
        assert!(doc.ai.insights.as_deref().unwrap().contains("Churn risk"));
    }

    #[test]
    fn test_empty_document() {
        let doc = ExtractionDoc::from_value(&json!({}));
        assert_eq!(doc, ExtractionDoc::default());
    }

    #[test]
    fn test_wrong_shapes_degrade_to_absent() {
        let v = json!({
            "initial_details": "not an object",
            "financial_data": {"total_funding_usd": {"nested": true}},
            "ai_analysis": {"insights": true}
        });
        let doc = ExtractionDoc::from_value(&v);
        assert!(doc.initial.name.is_none());
        assert!(doc.financial.total_funding_usd.is_none());
        assert!(doc.ai.insights.is_none());
    }
}
