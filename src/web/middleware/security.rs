//! Security headers middleware.

use axum::{
    body::Body,
    http::{header::HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Security headers middleware.
///
/// Adds the following headers to all responses:
/// - Content-Security-Policy: frame-ancestors 'self'
/// - Referrer-Policy: same-origin
/// - X-Content-Type-Options: nosniff
///
/// Note: Strict-Transport-Security should be set at the reverse proxy level
/// as it requires HTTPS.
pub async fn security_headers(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    // Only allow framing by our own pages
    headers.insert(
        "Content-Security-Policy",
        HeaderValue::from_static("frame-ancestors 'self'"),
    );

    // Only send the referrer for our own pages
    headers.insert("Referrer-Policy", HeaderValue::from_static("same-origin"));

    // Prevent MIME type sniffing
    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );

    // Cache control for API responses
    if !headers.contains_key("Cache-Control") {
        headers.insert(
            "Cache-Control",
            HeaderValue::from_static("no-store, max-age=0"),
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use tower::util::ServiceExt;

    async fn dummy_handler() -> &'static str {
        "OK"
    }

    #[tokio::test]
    async fn test_security_headers_added() {
        use axum::middleware;

        let app = Router::new()
            .route("/", get(dummy_handler))
            .layer(middleware::from_fn(security_headers));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(
            headers.get("Content-Security-Policy").unwrap(),
            "frame-ancestors 'self'"
        );
        assert_eq!(headers.get("Referrer-Policy").unwrap(), "same-origin");
        assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
        assert_eq!(headers.get("Cache-Control").unwrap(), "no-store, max-age=0");
    }
}
