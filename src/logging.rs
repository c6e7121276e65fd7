use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `debug` or `spendtui::store=trace`.
pub(crate) const LOG_ENV: &str = "SPENDTUI_LOG";

const DEFAULT_FILTER: &str = "info";

/// Route tracing output to an append-only file. The screen owns the
/// terminal, so nothing is written to stderr.
pub(crate) fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;

    Ok(())
}
