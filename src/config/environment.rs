//! Snapshot of the machine environment that fact checks read.
//!
//! Every probe goes through a [`ProbeEnvironment`] instead of reading the
//! process environment directly, so tests can point the probe at a fake
//! home, data volume and search path.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{DotfactsError, Result};

/// Home directory, data volume root and executable search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeEnvironment {
    home: PathBuf,
    data_dir: PathBuf,
    search_path: Vec<PathBuf>,
}

impl ProbeEnvironment {
    /// Build an environment from explicit parts.
    pub fn new(home: PathBuf, data_dir: PathBuf, search_path: Vec<PathBuf>) -> Self {
        Self {
            home,
            data_dir,
            search_path,
        }
    }

    /// Capture the current process environment.
    pub fn from_process(data_dir: PathBuf) -> Result<Self> {
        Self::from_env_fn(data_dir, |key| std::env::var_os(key))
    }

    /// Capture the environment through a custom variable lookup.
    ///
    /// `HOME` is honored when set and non-empty; otherwise the platform
    /// home directory is used.
    pub fn from_env_fn<F>(data_dir: PathBuf, env_fn: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let home = env_fn("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or(DotfactsError::HomeDirUnavailable)?;

        let search_path = env_fn("PATH")
            .map(|p| split_search_path(&p))
            .unwrap_or_default();

        Ok(Self::new(home, data_dir, search_path))
    }

    /// The user's home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Root of the data volume holding fallback installs.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directories searched for executables, in order.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }
}

/// Split a `PATH`-style value using the platform separator.
///
/// Empty entries are dropped rather than treated as the current directory.
pub fn split_search_path(value: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}
