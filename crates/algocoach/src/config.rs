//! Settings discovery.

use std::path::{Path, PathBuf};

use algocoach_settings::{SETTINGS_FILE_NAME, Settings};
use anyhow::{Context, Result};
use tracing::debug;

/// Settings file to load, if any.
///
/// An explicit path (`--config` or `ALGOCOACH_CONFIG`) always wins and must
/// exist. Otherwise `algocoach.toml` in `cwd` is used when present.
pub fn resolve_settings_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = cwd.join(SETTINGS_FILE_NAME);
    local.is_file().then_some(local)
}

pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    match resolve_settings_path(explicit, &cwd) {
        Some(path) => Settings::from_file(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => {
            debug!("no settings file, using defaults");
            Ok(Settings::default())
        }
    }
}
