use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Durations that the near-duplicate site variants disagreed on (coding window,
/// cache key version) are configuration here, not constants.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub login whose public activity is polled. Also the "home" owner
    /// for repo display names.
    pub github_user: String,
    /// Hours after a push during which the user counts as "currently coding".
    pub coding_window_hours: u32,
    /// Minutes a cached activity record stays fresh.
    pub cache_freshness_minutes: u32,
    /// Version suffix of the activity cache slot (bump to invalidate old slots).
    pub cache_version: String,
    /// Hard per-request timeout for GitHub API calls, in seconds.
    pub request_timeout_secs: u64,
    /// Global settle timeout for the parallel repo fan-out, in seconds.
    pub repo_fanout_timeout_secs: u64,
    /// Directory backing the file-based key-value cache.
    pub cache_dir: String,
    /// Optional path to a JSON repo catalog overriding the built-in one.
    pub repo_catalog: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            github_user: require_env("GITHUB_USER")?,
            coding_window_hours: parse_env("CODING_WINDOW_HOURS", 6)?,
            cache_freshness_minutes: parse_env("CACHE_FRESHNESS_MINUTES", 5)?,
            cache_version: std::env::var("CACHE_VERSION").unwrap_or_else(|_| "v1".to_string()),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 10)?,
            repo_fanout_timeout_secs: parse_env("REPO_FANOUT_TIMEOUT_SECS", 8)?,
            cache_dir: std::env::var("CACHE_DIR").unwrap_or_else(|_| ".devpulse-cache".to_string()),
            repo_catalog: std::env::var("REPO_CATALOG").ok(),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("'{key}' must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
