use axum::{extract::Request, middleware::Next, response::Response};
use http::header::{self, HeaderValue};
use std::time::Instant;

/// Value stamped into `Access-Control-Allow-Origin` on every response.
pub const ALLOW_ORIGIN: &str = "*";

/// Value stamped into `Access-Control-Allow-Methods` on every response.
pub const ALLOW_METHODS: &str = "GET";

/// Value stamped into `Cache-Control` on every response.
pub const CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate";

/// Stamp the development headers onto every response, whatever its status.
///
/// The wildcard CORS pair lets worker scripts fetch cross-origin, and the
/// Cache-Control directive keeps the browser from reusing a stale copy of
/// anything between edits. Existing values are replaced, not appended.
pub async fn dev_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL),
    );

    response
}

/// Access log middleware - one line per completed request
pub async fn access_log_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request"
    );

    response
}
