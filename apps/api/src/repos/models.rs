use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static fallback identity for a showcased repository. Hand-curated and
/// immutable; the catalog is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoDescriptor {
    pub owner: String,
    pub name: String,
    pub description: String,
    pub language: String,
}

/// Live metadata as returned by `/repos/{owner}/{name}`.
///
/// Every field is optional so a partial upstream payload still merges
/// field-by-field instead of failing wholesale.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepoInfo {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fork: bool,
}

/// One render-ready repo entry: descriptor fields overridden by whatever live
/// data arrived. Fresh value per render cycle, nothing shared across cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRepo {
    pub display_name: String,
    pub url: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// True when live metadata backed this entry.
    pub live: bool,
}
