//! Logging setup on top of `tracing`.
//!
//! Events go to a daily rolling file through a non-blocking writer so the
//! terminal UI is never written over and rendering never waits on disk.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "artable=info,warn";

/// Prefix of the rotated log files (`artable.log.YYYY-MM-DD`).
const LOG_FILE_PREFIX: &str = "artable.log";

/// Install the global subscriber writing under the platform data directory.
///
/// | Platform | Directory |
/// |----------|-----------|
/// | Linux    | `~/.local/share/artable/logs/` |
/// | macOS    | `~/Library/Application Support/artable/logs/` |
/// | Windows  | `%LOCALAPPDATA%\artable\logs\` |
///
/// The returned guard flushes buffered events when dropped; keep it alive
/// until the program exits.
pub fn init() -> anyhow::Result<WorkerGuard> {
    let dir = log_directory().context("Could not determine local data directory")?;
    init_in(&dir)
}

/// Install the global subscriber writing into `dir`.
pub fn init_in(dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %dir.display(),
        "artable starting up"
    );
    Ok(guard)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Directory the log files are written to, if the platform has one.
pub fn log_directory() -> Option<PathBuf> {
    dirs::data_local_dir().map(|base| base.join("artable").join("logs"))
}

/// Record the end of the session.
pub fn shutdown() {
    tracing::info!("artable shutting down");
}
