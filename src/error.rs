use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// Main application error type.
///
/// Only process-level failures live here. Per-request failures (unknown
/// paths, unsupported methods) are answered by the static file service as
/// plain HTTP status codes and never abort the server.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to bind to {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("server error: {0}")]
    Internal(String),
}

/// Result type alias for AppResult
pub type AppResult<T> = Result<T, AppError>;
