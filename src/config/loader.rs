//! Settings file discovery and loading.
//!
//! The settings file is optional. When no path is given explicitly, the
//! loader looks for `dotfacts/config.yml` under the user's config directory
//! and falls back to defaults if it is absent or cannot be loaded. Only an
//! explicitly requested file is allowed to fail the run.

use crate::config::schema::Settings;
use crate::error::{DotfactsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings location: `$XDG_CONFIG_HOME/dotfacts/config.yml`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dotfacts").join("config.yml"))
}

/// Load settings from an explicit path, or from the default location.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path doesn't exist.
/// Returns `ConfigParseError` if an explicit file is invalid YAML.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => load_settings_file(path),
        None => Ok(default_settings_path()
            .map(|path| load_default_settings(&path))
            .unwrap_or_default()),
    }
}

/// Load the settings file at the default location.
///
/// Never fails: a missing, unreadable or invalid file yields the defaults.
pub fn load_default_settings(path: &Path) -> Settings {
    if !path.is_file() {
        tracing::debug!("No settings file found, using defaults");
        return Settings::default();
    }
    load_settings_file(path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring settings file: {}", e);
        Settings::default()
    })
}

/// Load a single settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DotfactsError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DotfactsError::Io(e)
        }
    })?;

    tracing::debug!("Loaded settings from {}", path.display());
    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| DotfactsError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
