//! Pure classification of an activity record against the coding window,
//! plus the human-readable strings the caller renders. Nothing here suspends
//! or touches I/O.

use chrono::{DateTime, Duration, Utc};

use crate::activity::models::{ActivityRecord, ActivityStatus};

/// Maps a record to a status label.
///
/// `Active` iff a push exists within the coding window of `now` (boundary
/// inclusive). `Unavailable` is never produced here — that label belongs to
/// the orchestrator when the fetch itself fails.
pub fn classify(record: &ActivityRecord, now: DateTime<Utc>, coding_window: Duration) -> ActivityStatus {
    match record.push_at {
        Some(push_at) if now.signed_duration_since(push_at) <= coding_window => {
            ActivityStatus::Active
        }
        Some(_) => ActivityStatus::Inactive,
        None => ActivityStatus::Unknown,
    }
}

/// Relative time string: `"{n}m ago"` under an hour, `"{n}h ago"` under 48
/// hours, else `"{n}d ago"`. Minutes are floored at 1 so a just-now push never
/// reads "0m ago".
pub fn format_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let ms = now.signed_duration_since(then).num_milliseconds();
    let mins = ((ms as f64) / 60_000.0).round().max(1.0) as i64;
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hrs = ((mins as f64) / 60.0).round() as i64;
    if hrs < 48 {
        return format!("{hrs}h ago");
    }
    let days = ((hrs as f64) / 24.0).round() as i64;
    format!("{days}d ago")
}

/// "Last shipped" summary: repo name plus the first commit message when it
/// survives whitespace normalization. No push, no summary.
pub fn summarize(record: &ActivityRecord) -> Option<String> {
    record.push_at?;

    let repo = normalize_ws(record.push_repo.as_deref().unwrap_or(""));
    let left = if repo.is_empty() {
        "Last shipped:".to_string()
    } else {
        format!("Last shipped: {repo}")
    };

    let msg = normalize_ws(record.push_commit_msg.as_deref().unwrap_or(""));
    if msg.is_empty() {
        Some(left)
    } else {
        Some(format!("{left} — “{msg}”"))
    }
}

/// The fixed user-facing message per status, matching the widget copy.
pub fn status_message(status: ActivityStatus, ago: Option<&str>) -> String {
    match (status, ago) {
        (ActivityStatus::Active, Some(ago)) => format!("Currently coding (pushed {ago})"),
        (ActivityStatus::Active, None) => "Currently coding".to_string(),
        (ActivityStatus::Inactive, Some(ago)) => format!("Not coding right now (last push {ago})"),
        (ActivityStatus::Inactive, None) => "Not coding right now".to_string(),
        (ActivityStatus::Unknown, _) => "No recent push events found.".to_string(),
        (ActivityStatus::Unavailable, _) => {
            "Activity signal unavailable (offline / rate limit).".to_string()
        }
    }
}

/// Collapses whitespace runs to a single space and trims the ends.
fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
