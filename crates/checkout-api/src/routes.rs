//! # Routes
//!
//! Axum router configuration for the checkout API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - GET  / - Health check
/// - POST /create-payment - Create a payment order
/// - OPTIONS /create-payment - CORS preflight (204)
/// - any other method on /create-payment - 405
///
/// The permissive cross-origin headers are attached to every response, not
/// just those with an `Origin` header: the browser-hosted caller must be
/// able to read success and error bodies alike, so a preflight-negotiating
/// CORS middleware is not enough here.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .route(
            "/create-payment",
            post(handlers::create_payment)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        // Middleware
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization"),
        ))
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
