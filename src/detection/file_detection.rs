//! File-based detection.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DotfactsError, Result};

/// Expand a leading `~` or `~/` to `home`.
///
/// Any other path, including `~user/...`, is returned unchanged.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// Check whether a user-relative path exists.
///
/// Existence only: files and directories both count, symlinks are followed.
pub fn path_exists(path: &str, home: &Path) -> bool {
    entry_exists(&expand_home(path, home))
}

/// Check whether an already-resolved path exists, following symlinks.
pub fn entry_exists(path: &Path) -> bool {
    let exists = path.exists();
    tracing::debug!("path {} exists: {}", path.display(), exists);
    exists
}

/// Check whether a file contains `needle` as a literal, case-sensitive
/// substring.
///
/// A missing file is `Ok(false)`. Any other read failure is returned as
/// [`DotfactsError::ConfigRead`] with the IO error untouched.
pub fn file_contains(path: &Path, needle: &str) -> Result<bool> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).contains(needle)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(DotfactsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
