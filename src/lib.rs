//! devserve - a zero-configuration static file server for local development.
//!
//! Serves the directory containing the running executable on a fixed port,
//! stamps permissive CORS and cache-disabling headers on every response,
//! and opens the default browser at the entry page. Meant for hacking on
//! browser-side code that fetches its own resources (worker scripts, wasm,
//! models) and must never see a stale cached copy.

pub mod browser;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use routes::create_router;
pub use server::{run_server, serve};
