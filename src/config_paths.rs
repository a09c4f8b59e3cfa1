//! Where the sheet keeps its config and logs
//!
//! Unix/macOS: `$XDG_CONFIG_HOME/bottom-sheet/`, else `~/.config/bottom-sheet/`.
//! Windows: `%APPDATA%\bottom-sheet\`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "bottom-sheet";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Pick the base directory from an explicit XDG root or the home directory
///
/// An empty `XDG_CONFIG_HOME` counts as unset.
pub fn resolve_config_dir(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|xdg| !xdg.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| home.map(|home| home.join(".config")))
        .map(|root| root.join(APP_DIR))
}

pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        return dirs::config_dir().map(|appdata| appdata.join(APP_DIR));
    }
    let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    resolve_config_dir(xdg.as_deref(), dirs::home_dir().as_deref())
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let dir = logs_dir().context("No config directory available")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}
