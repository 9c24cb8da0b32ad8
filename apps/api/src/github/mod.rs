/// GitHub client — the single point of entry for all GitHub API calls in DevPulse.
///
/// ARCHITECTURAL RULE: No other module may call the GitHub API directly.
/// All upstream reads MUST go through this module.
///
/// Every request carries the hard timeout configured at construction; when it
/// fires, reqwest cancels the in-flight request and the caller sees
/// `GithubError::Timeout`. No retries — degraded data beats rate-limit pain.
use reqwest::{header, Client};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::activity::models::ActivityRecord;
use crate::repos::models::RepoInfo;

const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
/// Public events pagination matches the upstream default window the widgets used.
const EVENTS_PAGE_SIZE: u32 = 30;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("GitHub API error (status {status})")]
    Api { status: u16 },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for GithubError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GithubError::Timeout
        } else {
            GithubError::Http(e)
        }
    }
}

/// A public event as returned by `/users/{user}/events/public`.
/// Only the fields the activity signal needs; everything else is ignored.
#[derive(Debug, Deserialize)]
struct Event {
    #[serde(rename = "type")]
    kind: String,
    created_at: Option<chrono::DateTime<chrono::Utc>>,
    repo: Option<EventRepo>,
    payload: Option<EventPayload>,
}

#[derive(Debug, Deserialize)]
struct EventRepo {
    name: String,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    commits: Vec<EventCommit>,
}

#[derive(Debug, Deserialize)]
struct EventCommit {
    message: String,
}

/// The single GitHub client shared by the activity pipeline and the repo fan-out.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(timeout: std::time::Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(concat!("devpulse-api/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: GITHUB_API_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(timeout: std::time::Duration, base_url: impl Into<String>) -> Self {
        let mut client = Self::new(timeout);
        client.base_url = base_url.into();
        client
    }

    /// Fetches the user's public events and extracts the most recent push.
    ///
    /// The upstream list is newest-first; the first `PushEvent` wins and no
    /// sort is performed. An event list with no push is NOT an error — it
    /// yields a record with all push fields absent ("Unknown" downstream).
    pub async fn fetch_recent_push(&self, user: &str) -> Result<ActivityRecord, GithubError> {
        let url = format!(
            "{}/users/{user}/events/public?per_page={EVENTS_PAGE_SIZE}",
            self.base_url
        );
        let body = self.get_ok(&url).await?;
        let events: Vec<Event> = serde_json::from_str(&body)?;

        let record = first_push(&events);
        debug!(
            "fetched {} public events for {user}, push found: {}",
            events.len(),
            record.push_at.is_some()
        );
        Ok(record)
    }

    /// Fetches live metadata for a single repository.
    pub async fn fetch_repo(&self, owner: &str, name: &str) -> Result<RepoInfo, GithubError> {
        let url = format!("{}/repos/{owner}/{name}", self.base_url);
        let body = self.get_ok(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// One GET with the GitHub media type; non-2xx maps to `Api { status }`.
    async fn get_ok(&self, url: &str) -> Result<String, GithubError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Scans an already-ordered event list for the first push event.
fn first_push(events: &[Event]) -> ActivityRecord {
    let push = events
        .iter()
        .find(|e| e.kind == "PushEvent" && e.created_at.is_some());

    match push {
        Some(event) => ActivityRecord {
            push_at: event.created_at,
            push_repo: event.repo.as_ref().map(|r| r.name.clone()),
            push_commit_msg: event
                .payload
                .as_ref()
                .and_then(|p| p.commits.first())
                .map(|c| c.message.clone()),
        },
        None => ActivityRecord::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_events(json: &str) -> Vec<Event> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_push_extracts_fields() {
        let events = parse_events(
            r#"[
                {"type": "WatchEvent", "created_at": "2026-08-26T12:00:00Z"},
                {"type": "PushEvent", "created_at": "2026-08-26T11:30:00Z",
                 "repo": {"name": "arhan/portfolio-site"},
                 "payload": {"commits": [{"message": "fix hero layout"}, {"message": "older"}]}},
                {"type": "PushEvent", "created_at": "2026-08-25T09:00:00Z",
                 "repo": {"name": "arhan/accent-lab"}}
            ]"#,
        );
        let record = first_push(&events);
        assert_eq!(record.push_repo.as_deref(), Some("arhan/portfolio-site"));
        assert_eq!(record.push_commit_msg.as_deref(), Some("fix hero layout"));
        assert!(record.push_at.is_some());
    }

    #[test]
    fn test_first_push_skips_non_push_events() {
        let events = parse_events(
            r#"[
                {"type": "IssuesEvent", "created_at": "2026-08-26T12:00:00Z"},
                {"type": "ForkEvent", "created_at": "2026-08-26T11:00:00Z"}
            ]"#,
        );
        let record = first_push(&events);
        assert!(record.push_at.is_none());
        assert!(record.push_repo.is_none());
        assert!(record.push_commit_msg.is_none());
    }

    #[test]
    fn test_first_push_empty_list() {
        assert_eq!(first_push(&[]), ActivityRecord::default());
    }

    #[test]
    fn test_first_push_requires_timestamp() {
        // A push event without created_at cannot be classified; skip it.
        let events = parse_events(
            r#"[
                {"type": "PushEvent"},
                {"type": "PushEvent", "created_at": "2026-08-26T10:00:00Z",
                 "repo": {"name": "arhan/generator"}}
            ]"#,
        );
        let record = first_push(&events);
        assert_eq!(record.push_repo.as_deref(), Some("arhan/generator"));
    }

    #[test]
    fn test_first_push_tolerates_missing_payload() {
        let events = parse_events(
            r#"[{"type": "PushEvent", "created_at": "2026-08-26T10:00:00Z"}]"#,
        );
        let record = first_push(&events);
        assert!(record.push_at.is_some());
        assert!(record.push_repo.is_none());
        assert!(record.push_commit_msg.is_none());
    }
}
