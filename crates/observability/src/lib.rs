//! Tracing and logging setup shared by binaries and tests.

use std::path::Path;

/// Initialize process-wide logging to stdout.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_stdout();
}

/// Initialize process-wide logging appended to `path`.
///
/// The file is created if missing and never truncated.
pub fn init_with_log_file(path: impl AsRef<Path>) -> Result<(), tracing::InitError> {
    tracing::init_file(path.as_ref())
}

/// Subscriber configuration (filters, formatting, sinks).
pub mod tracing;
