pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::canonical::{build_canonical_profile, CanonicalCompanyProfile, PIPELINE_VERSION};
use crate::determinism::sources_hash;
use crate::error::ProfileResult;
use crate::sources::RawSources;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const CACHE_TTL_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheEntry {
    pub profile: CanonicalCompanyProfile,
    pub expires_at_ms: u64,
}

pub fn now_epoch_ms() -> u64 {
    let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
    (nanos / 1_000_000) as u64
}

/// Cache key: entity, content hash of all three sources, pipeline version.
/// Any input or semantics change lands on a different key.
pub fn cache_key(entity_id: &str, sources: &RawSources) -> ProfileResult<String> {
    let hash = sources_hash(sources)?;
    Ok(format!(
        "canonical_profile::{}::{}::{}",
        entity_id, hash, PIPELINE_VERSION
    ))
}

/// Best-effort cache read. Expired entries, corrupt JSON, and store errors
/// all read as a miss; the failure is logged, never surfaced.
pub fn get_cached_profile(
    store: &dyn KeyValueStore,
    entity_id: &str,
    sources: &RawSources,
    now_ms: u64,
) -> Option<CanonicalCompanyProfile> {
    let key = match cache_key(entity_id, sources) {
        Ok(k) => k,
        Err(e) => {
            warn!("profile cache key failed: {}", e);
            return None;
        }
    };
    let raw = match store.get(&key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("profile cache read failed: {}", e);
            return None;
        }
    };
    let entry: CacheEntry = match serde_json::from_str(&raw) {
        Ok(entry) => entry,
        Err(e) => {
            warn!("profile cache entry corrupt: {}", e);
            return None;
        }
    };
    if now_ms >= entry.expires_at_ms {
        return None;
    }
    Some(entry.profile)
}

/// Best-effort cache write. Always overwrites; failures are logged and
/// swallowed.
pub fn set_cached_profile(
    store: &dyn KeyValueStore,
    entity_id: &str,
    sources: &RawSources,
    profile: &CanonicalCompanyProfile,
    now_ms: u64,
) {
    let key = match cache_key(entity_id, sources) {
        Ok(k) => k,
        Err(e) => {
            warn!("profile cache key failed: {}", e);
            return;
        }
    };
    let entry = CacheEntry {
        profile: profile.clone(),
        expires_at_ms: now_ms + CACHE_TTL_MS,
    };
    let raw = match serde_json::to_string(&entry) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("profile cache entry serialize failed: {}", e);
            return;
        }
    };
    if let Err(e) = store.set(&key, &raw) {
        warn!("profile cache write failed: {}", e);
    }
}

/// Serve from cache when fresh, otherwise rebuild and repopulate. The cache
/// is a performance layer only; rebuilding is always safe.
pub fn build_with_cache(
    store: &dyn KeyValueStore,
    entity_id: &str,
    sources: &RawSources,
    now_ms: u64,
) -> CanonicalCompanyProfile {
    if let Some(profile) = get_cached_profile(store, entity_id, sources, now_ms) {
        return profile;
    }
    let profile = build_canonical_profile(sources);
    set_cached_profile(store, entity_id, sources, &profile, now_ms);
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_sources() -> RawSources {
        RawSources {
            extraction: Some(json!({"initial_details": {"name": "Acme Robotics"}})),
            ..Default::default()
        }
    }

    #[test]
    fn test_roundtrip_within_ttl() {
        let store = MemoryStore::new();
        let sources = sample_sources();
        let profile = build_canonical_profile(&sources);
        set_cached_profile(&store, "org_1", &sources, &profile, 1_000);
        let hit = get_cached_profile(&store, "org_1", &sources, 2_000);
        assert_eq!(hit, Some(profile));
    }

    #[test]
    fn test_expiry_after_24_hours() {
        let store = MemoryStore::new();
        let sources = sample_sources();
        let profile = build_canonical_profile(&sources);
        let t0 = 1_000u64;
        set_cached_profile(&store, "org_1", &sources, &profile, t0);
        assert!(get_cached_profile(&store, "org_1", &sources, t0 + CACHE_TTL_MS - 1).is_some());
        assert!(get_cached_profile(&store, "org_1", &sources, t0 + CACHE_TTL_MS).is_none());
    }

    #[test]
    fn test_changed_sources_miss() {
        let store = MemoryStore::new();
        let sources = sample_sources();
        let profile = build_canonical_profile(&sources);
        set_cached_profile(&store, "org_1", &sources, &profile, 1_000);

        let changed = RawSources {
            extraction: Some(json!({"initial_details": {"name": "Apex Robotics"}})),
            ..Default::default()
        };
        assert!(get_cached_profile(&store, "org_1", &changed, 2_000).is_none());
    }

    #[test]
    fn test_different_entity_miss() {
        let store = MemoryStore::new();
        let sources = sample_sources();
        let profile = build_canonical_profile(&sources);
        set_cached_profile(&store, "org_1", &sources, &profile, 1_000);
        assert!(get_cached_profile(&store, "org_2", &sources, 2_000).is_none());
    }

    #[test]
    fn test_corrupt_entry_reads_as_miss() {
        let store = MemoryStore::new();
        let sources = sample_sources();
        let key = cache_key("org_1", &sources).unwrap();
        store.set(&key, "{not json").unwrap();
        assert!(get_cached_profile(&store, "org_1", &sources, 1_000).is_none());
    }

    #[test]
    fn test_build_with_cache_populates() {
        let store = MemoryStore::new();
        let sources = sample_sources();
        let first = build_with_cache(&store, "org_1", &sources, 1_000);
        let key = cache_key("org_1", &sources).unwrap();
        assert!(store.get(&key).unwrap().is_some());
        let second = build_with_cache(&store, "org_1", &sources, 2_000);
        assert_eq!(first, second);
    }
}
