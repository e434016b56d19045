use crate::error::{AppError, AppResult};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the listener binds. Fixed at compile time; there are no flags or
/// environment overrides.
pub const PORT: u16 = 8000;

/// Page the browser is pointed at once the listener is up, relative to the
/// served root. Its absence never affects serving, only the opened tab.
pub const DEFAULT_PAGE: &str = "index.html";

/// Immutable process-wide configuration, established once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on (all interfaces)
    pub port: u16,

    /// Directory files are served from
    pub root: PathBuf,

    /// Entry page opened in the browser, a bare file name under `root`
    pub default_page: String,
}

impl Config {
    /// Build the configuration for the running executable: fixed port and
    /// entry page, files served from the directory the binary lives in.
    pub fn from_exe_dir() -> AppResult<Self> {
        let exe = env::current_exe()
            .map_err(|e| AppError::Configuration(format!("cannot locate executable: {}", e)))?;
        let root = exe.parent().map(PathBuf::from).ok_or_else(|| {
            AppError::Configuration("executable has no parent directory".to_string())
        })?;

        let config = Config {
            port: PORT,
            root,
            default_page: DEFAULT_PAGE.to_string(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Address the listener binds: all interfaces, fixed port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// URL the browser is opened at after the listener is bound.
    pub fn landing_url(&self) -> String {
        format!("http://localhost:{}/{}", self.port, self.default_page)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        if !self.root.is_dir() {
            return Err(AppError::Configuration(format!(
                "served root {} is not a directory",
                self.root.display()
            )));
        }

        if self.default_page.is_empty() || self.default_page.contains('/') {
            return Err(AppError::Configuration(
                "default page must be a bare file name".to_string(),
            ));
        }

        Ok(())
    }
}
