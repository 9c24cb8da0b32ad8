pub mod health;

use axum::{routing::get, Router};

use crate::activity;
use crate::repos;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/activity", get(activity::handlers::handle_activity))
        .route("/api/v1/repos", get(repos::handlers::handle_repos))
        .route(
            "/api/v1/repos/:owner/:name",
            get(repos::handlers::handle_repo),
        )
        .with_state(state)
}
