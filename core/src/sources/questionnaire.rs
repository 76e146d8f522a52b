use super::{list_field, str_field};
use serde_json::Value;

/// Typed view of the onboarding questionnaire answers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionnaireDoc {
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub unique_value_proposition: Option<String>,
    pub why_now: Option<String>,
    pub traction: Option<String>,
    pub industry: Option<String>,
    pub target_market: Option<String>,
    pub entity_type: Option<String>,
    pub product_status: Option<String>,
    pub revenue_model: Option<String>,
    pub hq_city: Option<String>,
    pub hq_country: Option<String>,
    pub keywords: Vec<String>,
}

fn first_of(v: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| str_field(v, k))
}

impl QuestionnaireDoc {
    pub fn from_value(v: &Value) -> Self {
        QuestionnaireDoc {
            problem: first_of(v, &["problem", "problem_statement"]),
            solution: first_of(v, &["solution", "solution_summary"]),
            unique_value_proposition: first_of(v, &["unique_value_proposition", "uvp"]),
            why_now: str_field(v, "why_now"),
            traction: first_of(v, &["traction", "traction_summary"]),
            industry: str_field(v, "industry"),
            target_market: str_field(v, "target_market"),
            entity_type: str_field(v, "entity_type"),
            product_status: first_of(v, &["product_status", "product_stage"]),
            revenue_model: str_field(v, "revenue_model"),
            hq_city: first_of(v, &["hq_city", "city"]),
            hq_country: first_of(v, &["hq_country", "country"]),
            keywords: list_field(v, "keywords"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_keys() {
        let v = json!({
            "problem": "Warehouse picking is slow and error-prone",
            "solution": "Autonomous picking robots with no rails",
            "unique_value_proposition": "Deploys in a day, no floor changes",
            "why_now": "Hardware costs dropped 10x in five years",
            "traction": "Three paid pilots with mid-size 3PLs",
            "industry": "Robotics",
            "entity_type": "C-Corp",
            "keywords": ["robotics", "logistics"]
        });
        let doc = QuestionnaireDoc::from_value(&v);
        assert_eq!(doc.problem.as_deref(), Some("Warehouse picking is slow and error-prone"));
        assert_eq!(doc.unique_value_proposition.as_deref(), Some("Deploys in a day, no floor changes"));
        assert_eq!(doc.keywords, vec!["robotics", "logistics"]);
    }

    #[test]
    fn test_alias_keys() {
        let v = json!({"uvp": "Cheapest per pick", "city": "Berlin", "product_stage": "beta"});
        let doc = QuestionnaireDoc::from_value(&v);
        assert_eq!(doc.unique_value_proposition.as_deref(), Some("Cheapest per pick"));
        assert_eq!(doc.hq_city.as_deref(), Some("Berlin"));
        assert_eq!(doc.product_status.as_deref(), Some("beta"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(QuestionnaireDoc::from_value(&json!({})), QuestionnaireDoc::default());
    }
}
