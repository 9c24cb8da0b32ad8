use std::sync::Arc;

use crate::config::Config;
use crate::github::GithubClient;
use crate::repos::models::RepoDescriptor;
use crate::store::KvStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub github: GithubClient,
    /// Activity cache backing store. `FileStore` in production, `MemoryStore`
    /// in tests — the pipeline never knows the difference.
    pub store: Arc<dyn KvStore>,
    /// The ordered, hand-curated repo catalog. Render order follows this list.
    pub catalog: Arc<Vec<RepoDescriptor>>,
    pub config: Config,
}
