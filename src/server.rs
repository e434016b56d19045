//! Server startup and shutdown logic.
//!
//! This module contains the `run_server` function which handles:
//! - Router creation over the served root
//! - Listener binding
//! - The startup console contract and best-effort browser launch
//! - Serving with graceful shutdown on an interrupt signal

use crate::browser;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Run the file server with the given configuration.
///
/// Binds the listener, prints the startup banner, launches the browser at
/// the entry page, and serves until an interrupt signal is received.
///
/// # Arguments
///
/// * `config` - The immutable application configuration
///
/// # Errors
///
/// This function will return an error if:
/// - The listening socket cannot be acquired (fatal, never retried)
/// - The serve loop itself fails
pub async fn run_server(config: Config) -> AppResult<()> {
    info!(
        root = %config.root.display(),
        port = config.port,
        "starting devserve"
    );

    let app = routes::create_router(&config.root);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;

    println!("Serving at http://localhost:{}", config.port);
    println!("Press Ctrl+C to stop the server");

    if !config.root.join(&config.default_page).is_file() {
        warn!(
            page = %config.default_page,
            "entry page not found in served directory; the opened tab will 404"
        );
    }
    browser::open_in_background(config.landing_url());

    serve(listener, app, shutdown_signal()).await?;

    println!("Server stopped.");
    Ok(())
}

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// Split out of [`run_server`] so the accept loop takes its termination
/// trigger as a plain future: production passes the interrupt signal,
/// callers that need a scripted stop pass their own. The listener is owned
/// by the serve call and released on every exit path.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Internal(format!("server error: {}", e)))
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails. This is intentional because
/// signal handler failures are unrecoverable system-level errors that indicate
/// the OS cannot deliver shutdown signals, making graceful shutdown impossible.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}
