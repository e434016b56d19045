use crate::middleware::{access_log_middleware, dev_headers_middleware};
use axum::{middleware, Router};
use std::path::Path;
use tower_http::services::ServeDir;

/// Create the application router.
///
/// Every request falls through to the static file service rooted at `root`,
/// which resolves paths with the usual semantics: directories serve their
/// `index.html`, files stream with a content-type inferred from their
/// extension, unknown paths get a 404, and traversal outside the root is
/// rejected by the service itself. The header middleware wraps the whole
/// router, so the fixed development headers land on every response the
/// service can produce.
pub fn create_router(root: &Path) -> Router {
    let serve_dir = ServeDir::new(root).append_index_html_on_directories(true);

    Router::new()
        .fallback_service(serve_dir)
        .layer(middleware::from_fn(dev_headers_middleware))
        .layer(middleware::from_fn(access_log_middleware))
}
