use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::tools;

/// Create the router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/tools", get(tools::list_tools))
        .route("/tools/{name}", post(tools::invoke_tool))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
