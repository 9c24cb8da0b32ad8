mod activity;
mod config;
mod errors;
mod github;
mod repos;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::github::GithubClient;
use crate::repos::catalog::{default_catalog, load_catalog};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{FileStore, KvStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_name, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DevPulse API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize GitHub client with the hard per-request timeout
    let github = GithubClient::new(Duration::from_secs(config.request_timeout_secs));
    info!(
        "GitHub client initialized (user: {}, timeout: {}s)",
        config.github_user, config.request_timeout_secs
    );

    // Initialize the file-backed activity cache store
    let store: Arc<dyn KvStore> = Arc::new(FileStore::new(&config.cache_dir));
    info!("Cache store initialized at {}", config.cache_dir);

    // Load the repo catalog (built-in unless overridden)
    let catalog = match &config.repo_catalog {
        Some(path) => load_catalog(path)?,
        None => default_catalog(&config.github_user),
    };
    info!("Repo catalog ready: {} entries", catalog.len());

    // Build app state
    let state = AppState {
        github,
        store,
        catalog: Arc::new(catalog),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
