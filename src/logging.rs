//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so logs go to a file under the platform cache dir.
//! The filter is read from `BATCOMPUTER_LOG` and defaults to `info`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::APP_DIR;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "BATCOMPUTER_LOG";

/// Default log file location (`<cache_dir>/batcomputer/batcomputer.log`).
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("batcomputer.log"))
}

/// Build the filter from `BATCOMPUTER_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Build a subscriber writing to `log_file`.
pub fn build_subscriber(log_file: File, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

/// Install the global subscriber writing to `log_path`.
///
/// Returns false if the log file could not be created or a subscriber is
/// already installed; the program keeps running without logs.
pub fn init(log_path: &Path) -> bool {
    if let Some(parent) = log_path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let Ok(log_file) = File::create(log_path) else {
        return false;
    };
    tracing::subscriber::set_global_default(build_subscriber(log_file, env_filter())).is_ok()
}
