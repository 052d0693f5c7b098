//! Executable lookup on the search path.
//!
//! This is a direct scan of `PATH` entries. No shell is spawned, so the
//! name is never interpreted: `rg; rm -rf ~` is just a file name that
//! doesn't exist.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve an executable by iterating over search path entries.
///
/// Returns the first candidate that is a regular file and executable.
/// Names that are empty or contain a path separator never resolve.
pub fn resolve_executable(name: &str, search_path: &[PathBuf]) -> Option<PathBuf> {
    if !is_plain_name(name) {
        tracing::debug!("Refusing to resolve non-plain executable name {:?}", name);
        return None;
    }

    search_path
        .iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Check whether an executable is on the search path.
pub fn executable_exists(name: &str, search_path: &[PathBuf]) -> bool {
    let resolved = resolve_executable(name, search_path);
    match &resolved {
        Some(path) => tracing::debug!("executable {} found at {}", name, path.display()),
        None => tracing::debug!("executable {} not found", name),
    }
    resolved.is_some()
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}
