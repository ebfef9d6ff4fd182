//! Axum application builder.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::{page, paginated};
use crate::state::AppState;

/// Create the Axum application with all routes.
///
/// Only `/` and `/paginated` are registered; every other path falls through
/// to the plain-text 404.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/paginated", get(paginated::get_paginated))
        .fallback(page::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
