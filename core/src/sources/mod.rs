pub mod enrichment;
pub mod extraction;
pub mod questionnaire;

pub use enrichment::EnrichmentDoc;
pub use extraction::ExtractionDoc;
pub use questionnaire::QuestionnaireDoc;

use crate::error::{ProfileError, ProfileResult};
use crate::normalize::{is_blank_value, parse_usd_amount};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The three loosely-typed documents the pipeline merges. Field presence is
/// never guaranteed; each is parsed once into a typed intermediate document
/// before the builder touches it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawSources {
    #[serde(default)]
    pub extraction: Option<Value>,
    #[serde(default, alias = "apollo")]
    pub enrichment: Option<Value>,
    #[serde(default)]
    pub questionnaire: Option<Value>,
}

impl RawSources {
    pub fn is_empty(&self) -> bool {
        self.extraction.is_none() && self.enrichment.is_none() && self.questionnaire.is_none()
    }

    /// Parse the combined `{extraction, apollo|enrichment, questionnaire}`
    /// envelope. Unknown keys are ignored; the envelope itself must be an
    /// object.
    pub fn from_json_str(raw: &str) -> ProfileResult<Self> {
        let v: Value = serde_json::from_str(raw)?;
        if !v.is_object() {
            return Err(ProfileError::InvalidInput(
                "sources envelope must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(v)?)
    }
}

/// Non-blank string field. Numbers are accepted and stringified so sources
/// that serialize years or counts as numbers still read.
pub(crate) fn str_field(v: &Value, key: &str) -> Option<String> {
    match v.get(key)? {
        Value::String(s) if !is_blank_value(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Integer field, accepting numeric strings.
pub(crate) fn i64_field(v: &Value, key: &str) -> Option<i64> {
    match v.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) if !is_blank_value(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Dollar-amount field: plain numbers pass through, strings go through the
/// free-text amount parser ("$1.5M", "2 million", ...).
pub(crate) fn usd_field(v: &Value, key: &str) -> Option<u64> {
    match v.get(key)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.round() as u64)),
        Value::String(s) => parse_usd_amount(s),
        _ => None,
    }
}

/// String-array field with blanks dropped. Non-arrays read as empty.
pub(crate) fn list_field(v: &Value, key: &str) -> Vec<String> {
    v.get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .filter(|s| !is_blank_value(s))
                .map(|s| s.trim().to_string())
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn section<'a>(v: &'a Value, key: &str) -> Option<&'a Value> {
    v.get(key).filter(|s| s.is_object())
}
