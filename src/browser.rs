use anyhow::Context;
use tracing::warn;

/// Open `url` in the system default browser without blocking the caller.
///
/// Best-effort by contract: launch failures (no browser installed, headless
/// box, sandbox) are logged and swallowed so the server keeps serving
/// either way. The launcher can block until the spawned process exits, so
/// it runs on the blocking thread pool.
pub fn open_in_background(url: String) {
    tokio::task::spawn_blocking(move || {
        let launched =
            open::that(&url).with_context(|| format!("failed to open browser at {}", url));

        if let Err(e) = launched {
            warn!("{:#}; open the page manually", e);
        }
    });
}
