use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::activity::cache::{cache_key, is_fresh, read_cache, write_cache};
use crate::activity::classify::{classify, format_ago, status_message, summarize};
use crate::activity::models::{ActivityRecord, ActivityStatus, CacheEntry, StatusReport};
use crate::errors::AppError;
use crate::state::AppState;

/// The source variants disagreed on the coding window (1h vs 6h), so callers
/// may override the configured default per request.
const MAX_WINDOW_HOURS: u32 = 168;

#[derive(Deserialize)]
pub struct ActivityQuery {
    pub window_hours: Option<u32>,
}

/// GET /api/v1/activity
///
/// Cache-or-fetch orchestration: a fresh cache entry is classified as-is;
/// otherwise one bounded fetch runs. On success the cache is updated; on
/// timeout or upstream error the cache is left untouched and the report
/// degrades to `Unavailable`. No automatic retry — the next poll is the retry.
pub async fn handle_activity(
    State(state): State<AppState>,
    Query(params): Query<ActivityQuery>,
) -> Result<Json<StatusReport>, AppError> {
    let window_hours = params.window_hours.unwrap_or(state.config.coding_window_hours);
    if window_hours == 0 || window_hours > MAX_WINDOW_HOURS {
        return Err(AppError::Validation(format!(
            "window_hours must be between 1 and {MAX_WINDOW_HOURS}"
        )));
    }
    let coding_window = Duration::hours(i64::from(window_hours));

    let now = Utc::now();
    let key = cache_key(&state.config.cache_version);
    let freshness = Duration::minutes(i64::from(state.config.cache_freshness_minutes));

    if let Some(entry) = read_cache(state.store.as_ref(), &key).await {
        if is_fresh(&entry, now, freshness) {
            debug!("serving activity status from cache slot '{key}'");
            return Ok(Json(build_report(&entry.data, now, coding_window, true)));
        }
    }

    match state.github.fetch_recent_push(&state.config.github_user).await {
        Ok(record) => {
            let entry = CacheEntry {
                stored_at: now,
                data: record.clone(),
            };
            write_cache(state.store.as_ref(), &key, &entry).await;
            Ok(Json(build_report(&record, now, coding_window, false)))
        }
        Err(e) => {
            warn!("activity fetch failed: {e}");
            Ok(Json(unavailable_report()))
        }
    }
}

fn build_report(
    record: &ActivityRecord,
    now: DateTime<Utc>,
    coding_window: Duration,
    cached: bool,
) -> StatusReport {
    let status = classify(record, now, coding_window);
    let ago = record.push_at.map(|push_at| format_ago(push_at, now));
    StatusReport {
        status,
        message: status_message(status, ago.as_deref()),
        pushed_ago: ago,
        last_shipped: summarize(record),
        cached,
    }
}

fn unavailable_report() -> StatusReport {
    StatusReport {
        status: ActivityStatus::Unavailable,
        message: status_message(ActivityStatus::Unavailable, None),
        pushed_ago: None,
        last_shipped: None,
        cached: false,
    }
}
