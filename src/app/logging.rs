//! File logging
//!
//! The terminal belongs to the TUI, so log records go to a file only.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "RENVIEW_LOG";

/// Default log file (`<data dir>/renview/renview.log`)
pub fn log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("renview").join("renview.log"))
}

/// Install the file logger; keep the guard alive until exit
pub fn init(log_path: &Path) -> anyhow::Result<WorkerGuard> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()?;

    Ok(guard)
}

/// Like [`init`] at the default path, but never fails: without a log file
/// the app simply runs unlogged
pub fn init_default() -> Option<WorkerGuard> {
    let path = log_path()?;
    match init(&path) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled ({}): {e:#}", path.display());
            None
        }
    }
}
