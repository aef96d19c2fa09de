//! File-only tracing bootstrap.
//!
//! The TUI owns the terminal, so nothing may write to stdout/stderr while
//! the loop runs; all diagnostics go to a log file (tail it from another
//! terminal).

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize logging into `<dir>/screenplay.log`.
///
/// With no override the platform data-local directory is used (e.g.
/// `~/.local/share/screenplay/logs` on Linux).
pub fn init(dir_override: Option<&Path>) -> Result<()> {
    let log_dir = match dir_override {
        Some(dir) => dir.to_path_buf(),
        None => default_log_dir(),
    };
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "screenplay.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // The writer guard must live as long as the process; there is no
    // orderly shutdown path out of the main loop.
    std::mem::forget(guard);

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    Ok(())
}

fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "screenplay")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("."))
}
