//! Axum router — maps the page's routes to handlers.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{abstract_toggle, analyze, page, search};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(page::index))
        .route("/search", post(search::search_submit))
        .route("/papers/analyze", post(analyze::analyze_submit))
        .route("/papers/abstract", post(abstract_toggle::toggle_submit))

        // Liveness
        .route("/healthz", get(page::healthz))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
