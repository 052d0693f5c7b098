//! Facts composed from the primitive existence checks.

/// Tool can be used: on the search path, or installed at its fallback location.
pub fn usable(on_search_path: bool, fallback_exists: bool) -> bool {
    on_search_path || fallback_exists
}

/// A fallback install is present but the user-local symlink to it is not.
pub fn needs_link(install_exists: bool, link_exists: bool) -> bool {
    install_exists && !link_exists
}

/// An environment directory is present but its executable doesn't resolve.
pub fn needs_path_entry(env_dir_exists: bool, on_search_path: bool) -> bool {
    env_dir_exists && !on_search_path
}
