//! Diagnostic logging to disk.
//!
//! The TUI owns stdout, so `tracing` output goes to a daily-rotated file
//! named `tabshell.log.<date>` in the configured log directory (default:
//! the platform data dir, e.g. `~/.local/share/tabshell/logs/`).
//! `TABSHELL_LOG` overrides the configured level using `EnvFilter` syntax.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV_VAR: &str = "TABSHELL_LOG";
const LOG_FILE_PREFIX: &str = "tabshell.log";

/// Build the level filter: the env var wins, then the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::try_new(format!("tabshell={}", config.level))
            .unwrap_or_else(|_| EnvFilter::new("tabshell=info"))
    })
}

/// Daily-rotated file writer. Lines are buffered until the guard drains
/// them, so the guard has to be dropped, not leaked, on every exit path.
fn file_writer(log_dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

fn subscriber(
    config: &LoggingConfig,
    writer: NonBlocking,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
}

/// Install the global subscriber. The returned guard flushes buffered lines
/// on drop and must live until shutdown. Returns `None` if logging is off.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = config.resolved_log_dir();
    let (writer, guard) = file_writer(&log_dir)?;

    subscriber(config, writer)
        .try_init()
        .with_context(|| "Failed to install log subscriber")?;

    tracing::info!(dir = %log_dir.display(), level = %config.level, "logging initialised");
    Ok(Some(guard))
}
