use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::settings;

const LOG_FILE: &str = "scroller.log";

/// Install a file-backed tracing subscriber under `<config_dir>/logs`.
///
/// The terminal is owned by the UI, so nothing is logged when there is no
/// config directory. Keep the returned guard alive until exit so buffered
/// lines are flushed.
pub fn init(config_dir: Option<&Path>, verbose: bool) -> Result<Option<WorkerGuard>> {
    let Some(config_dir) = config_dir else {
        return Ok(None);
    };
    let dir = settings::log_dir(config_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    if verbose {
        eprintln!("Logging to {}", log_path(config_dir).display());
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    Ok(Some(guard))
}

pub fn log_path(config_dir: &Path) -> PathBuf {
    settings::log_dir(config_dir).join(LOG_FILE)
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "scroller=debug"
        } else {
            "scroller=info"
        })
    })
}
