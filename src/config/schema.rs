//! Settings file schema.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Data volume holding fallback tool installs when nothing else is set.
pub const DEFAULT_DATA_DIR: &str = "/data";

/// Contents of `config.yml`.
///
/// ```yaml
/// data_dir: /data
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Root of the data volume where fallback installs live.
    pub data_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Settings {
    /// Pick the data volume root, letting an explicit override win.
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.data_dir.clone())
    }
}
