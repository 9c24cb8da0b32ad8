use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::repos::merge::{merge, merge_all};
use crate::repos::models::{MergedRepo, RepoInfo};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RepoListResponse {
    pub repos: Vec<MergedRepo>,
    pub live_count: usize,
    /// The widget hint line, verbatim.
    pub note: String,
}

/// GET /api/v1/repos
///
/// Fans out one live fetch per catalog entry; waits for all to settle or the
/// global fan-out timeout, whichever comes first. Stragglers are abandoned and
/// their entries render from descriptors. Output order is catalog order.
pub async fn handle_repos(State(state): State<AppState>) -> Json<RepoListResponse> {
    let catalog = state.catalog.clone();
    let fanout_timeout = std::time::Duration::from_secs(state.config.repo_fanout_timeout_secs);

    let mut tasks = JoinSet::new();
    for (idx, descriptor) in catalog.iter().enumerate() {
        let github = state.github.clone();
        let owner = descriptor.owner.clone();
        let name = descriptor.name.clone();
        tasks.spawn(async move { (idx, github.fetch_repo(&owner, &name).await) });
    }

    let mut live: Vec<Option<RepoInfo>> = vec![None; catalog.len()];

    let deadline = tokio::time::sleep(fanout_timeout);
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            _ = &mut deadline => {
                warn!("repo fan-out timed out after {fanout_timeout:?}; rendering settled results");
                break;
            }
            joined = tasks.join_next() => match joined {
                None => break, // all settled
                Some(Ok((idx, Ok(info)))) => live[idx] = Some(info),
                Some(Ok((idx, Err(e)))) => {
                    // One repo's failure never affects the others.
                    warn!(
                        "live fetch failed for {}/{}: {e}",
                        catalog[idx].owner, catalog[idx].name
                    );
                }
                Some(Err(e)) => warn!("repo fetch task failed: {e}"),
            }
        }
    }
    // Dropping the set aborts stragglers; their late results are discarded.
    drop(tasks);

    let live_count = live.iter().filter(|l| l.is_some()).count();
    debug!("repo fan-out settled: {live_count}/{} live", catalog.len());

    let repos = merge_all(&catalog, &live, &state.config.github_user);
    let note = if live_count == 0 {
        "Could not load GitHub repos (rate limit or offline).".to_string()
    } else {
        "Loaded from GitHub (public repos).".to_string()
    };

    Json(RepoListResponse {
        repos,
        live_count,
        note,
    })
}

/// GET /api/v1/repos/:owner/:name
///
/// Single-repo view; the catalog is authoritative, so an unknown pair is 404
/// rather than a passthrough to GitHub.
pub async fn handle_repo(
    State(state): State<AppState>,
    Path((owner, name)): Path<(String, String)>,
) -> Result<Json<MergedRepo>, AppError> {
    let descriptor = state
        .catalog
        .iter()
        .find(|d| d.owner.eq_ignore_ascii_case(&owner) && d.name.eq_ignore_ascii_case(&name))
        .ok_or_else(|| AppError::NotFound(format!("{owner}/{name} is not in the repo catalog")))?;

    let live = match state.github.fetch_repo(&descriptor.owner, &descriptor.name).await {
        Ok(info) => Some(info),
        Err(e) => {
            warn!("live fetch failed for {owner}/{name}: {e}");
            None
        }
    };

    Ok(Json(merge(descriptor, &state.config.github_user, live.as_ref())))
}
