//! Best-effort activity cache over the injected key-value store.
//!
//! Corruption is equivalent to a miss: a slot that fails to parse is removed
//! so it cannot fail again on the next cycle. Write failures are swallowed —
//! caching must never block the status flow.

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::activity::models::CacheEntry;
use crate::store::KvStore;

/// The versioned cache slot, e.g. `gh_activity_cache_v1`.
pub fn cache_key(version: &str) -> String {
    format!("gh_activity_cache_{version}")
}

/// Reads the cached entry. Missing key, malformed content, and any storage
/// fault all come back as `None`; the malformed slot is proactively cleared.
pub async fn read_cache(store: &dyn KvStore, key: &str) -> Option<CacheEntry> {
    let raw = store.get(key).await?;
    match serde_json::from_str::<CacheEntry>(&raw) {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("discarding corrupt activity cache slot '{key}': {e}");
            store.remove(key).await;
            None
        }
    }
}

/// Persists an entry; failure is logged and swallowed.
pub async fn write_cache(store: &dyn KvStore, key: &str, entry: &CacheEntry) {
    let raw = match serde_json::to_string(entry) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("activity cache serialization failed (skipping write): {e}");
            return;
        }
    };
    if let Err(e) = store.set(key, &raw).await {
        warn!("activity cache write failed (ignored): {e:#}");
    }
}

/// An entry is fresh while `now - stored_at <= window`.
pub fn is_fresh(entry: &CacheEntry, now: DateTime<Utc>, window: Duration) -> bool {
    now.signed_duration_since(entry.stored_at) <= window
}
