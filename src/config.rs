use anyhow::{Context, Result};
use std::path::PathBuf;

/// Overrides the platform data directory when set and non-empty.
pub(crate) const DATA_DIR_ENV: &str = "SPENDTUI_DATA_DIR";

const DB_FILE: &str = "spendtui.db";
const LOG_FILE: &str = "spendtui.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve(data_dir)
    }

    pub(crate) fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => directories::ProjectDirs::from("com", "spendtui", "SpendTUI")
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
                .data_dir()
                .to_path_buf(),
        };
        Ok(Self { data_dir })
    }

    pub(crate) fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                self.data_dir.display()
            )
        })
    }

    pub(crate) fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
