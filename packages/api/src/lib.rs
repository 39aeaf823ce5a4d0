//! Flowmap API - HTTP surface over the BPMN structural parser.
//!
//! One POST endpoint accepts a textual BPMN payload and returns either the
//! structural model, a client error for malformed/empty input, or a server
//! error for anything the core does not anticipate. The liveness probe and
//! CORS policy live here too; the core parser knows nothing about them.

pub mod config;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with CORS and request tracing.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/parse-bpmn", post(handlers::parse_bpmn))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
