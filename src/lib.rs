pub mod config;
pub mod error;
pub mod notify;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::notify::Notifier;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config, notifier: Arc<dyn Notifier>) -> Router {
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { config, notifier });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
