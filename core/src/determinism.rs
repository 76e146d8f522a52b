use crate::error::ProfileResult;
use crate::sources::RawSources;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Canonical JSON bytes: keys sorted lexicographically at every level,
/// compact encoding. Used only for content hashing, never as a wire format.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> ProfileResult<Vec<u8>> {
    let v = serde_json::to_value(value)?;
    let normalized = normalize_value(v);
    let s = serde_json::to_string(&normalized)?;
    Ok(s.into_bytes())
}

fn normalize_value(v: Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut btm: BTreeMap<String, Value> = BTreeMap::new();
            for (k, vv) in map {
                btm.insert(k, normalize_value(vv));
            }
            // serde_json::Map preserves insertion order; rebuild sorted.
            let mut out = serde_json::Map::new();
            for (k, vv) in btm {
                out.insert(k, vv);
            }
            Value::Object(out)
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(normalize_value).collect()),
        other => other,
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Content hash of the three raw source documents in a fixed envelope.
/// Identical sources hash identically regardless of key order.
pub fn sources_hash(sources: &RawSources) -> ProfileResult<String> {
    let envelope = serde_json::json!({
        "extraction": sources.extraction,
        "enrichment": sources.enrichment,
        "questionnaire": sources.questionnaire,
    });
    let bytes = to_canonical_bytes(&envelope)?;
    Ok(sha256_hex(&bytes))
}
