//! Router configuration for the Tasklist service.
//!
//! Builds the complete Axum router with all endpoints. The router is built
//! once against the injected state, so both store backends share the exact
//! same routing code.

use crate::handlers::health::health_check;
use crate::handlers::todos::{create_todo, delete_todo, list_todos, toggle_todo, update_todo};
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the complete Axum router.
///
/// Configures all routes under `/api`:
/// - Health check
/// - Todo CRUD and toggle endpoints
///
/// plus request tracing and permissive CORS (the front end is served from
/// another origin).
///
/// # Arguments
///
/// - `state`: Application state to share with handlers
///
/// # Returns
///
/// Configured Axum router ready to serve requests.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/todos", get(list_todos))
        .route("/todos", post(create_todo))
        .route("/todos/:id", put(update_todo))
        .route("/todos/:id", delete(delete_todo))
        .route("/todos/:id/toggle", patch(toggle_todo));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
