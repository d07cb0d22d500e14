//! Tracing/logging initialization.
//!
//! JSON lines with timestamps, filtered via `RUST_LOG` (default `info`).

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to open log file {path:?}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stdout. Safe to call multiple times (subsequent calls are no-ops).
pub fn init_stdout() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Append to a log file. A global subscriber that is already installed wins.
pub fn init_file(path: &Path) -> Result<(), InitError> {
    let _ = file_subscriber(path)?.try_init();
    Ok(())
}

/// JSON-lines subscriber writing to `path`. The file is created if missing
/// and opened in append mode, so earlier lines survive a restart.
pub fn file_subscriber(path: &Path) -> Result<impl ::tracing::Subscriber + Send + Sync + 'static, InitError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| InitError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish())
}
