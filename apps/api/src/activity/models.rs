use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The classification input: the most recent push extracted from a user's
/// public event feed. All fields absent means "fetch succeeded, no push found".
/// Immutable once built; lives only for the render cycle (and inside `CacheEntry`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub push_at: Option<DateTime<Utc>>,
    pub push_repo: Option<String>,
    pub push_commit_msg: Option<String>,
}

/// Persisted cache wrapper. Usable only while `now - stored_at` is within the
/// configured freshness window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub stored_at: DateTime<Utc>,
    pub data: ActivityRecord,
}

/// Derived status, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    /// Push within the coding window.
    Active,
    /// Push known but outside the window.
    Inactive,
    /// Fetch succeeded, no push event found.
    Unknown,
    /// Fetch failed or timed out.
    Unavailable,
}

/// What the caller renders: label, user-facing message, relative time and
/// the "last shipped" summary when a push is known.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub status: ActivityStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pushed_ago: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_shipped: Option<String>,
    /// True when served from the freshness cache rather than a live fetch.
    pub cached: bool,
}
