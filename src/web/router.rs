//! Router configuration for Web API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_reply, create_thread, delete_reply, delete_thread, get_replies, get_threads,
    report_reply, report_thread, AppState,
};
use super::middleware::{create_cors_layer, security_headers};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    // One route per resource; the board name is a path segment and the
    // method selects the operation.
    let api_routes = Router::new()
        .route(
            "/threads/:board",
            post(create_thread)
                .get(get_threads)
                .put(report_thread)
                .delete(delete_thread),
        )
        .route(
            "/replies/:board",
            post(create_reply)
                .get(get_replies)
                .put(report_reply)
                .delete(delete_reply),
        );

    // Build the main router with middleware
    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(security_headers)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }
}
