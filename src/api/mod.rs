//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::HeaderState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<HeaderState>) -> Router {
    Router::new()
        .route("/header", get(header_handler))
        .route("/countdown", get(countdown_handler))
        .route("/locale", get(get_locale_handler).post(set_locale_handler))
        .route("/page", put(page_title_handler))
        .route("/session", put(set_session_handler).delete(clear_session_handler))
        .route("/remount", post(remount_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
