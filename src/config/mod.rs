//! Configuration for the fact probe.
//!
//! - Settings schema in [`schema`]
//! - Settings file discovery and loading in [`loader`]
//! - The environment snapshot checks run against in [`environment`]
//!
//! # Example
//!
//! ```
//! use dotfacts::config::{parse_settings, ProbeEnvironment};
//! use std::path::{Path, PathBuf};
//!
//! let settings = parse_settings("data_dir: /mnt/data", Path::new("config.yml")).unwrap();
//! let env = ProbeEnvironment::new(
//!     PathBuf::from("/home/alice"),
//!     settings.resolve_data_dir(None),
//!     vec![PathBuf::from("/usr/bin")],
//! );
//! assert_eq!(env.data_dir(), Path::new("/mnt/data"));
//! ```
//!
//! # Data directory precedence
//!
//! 1. `data_dir` module argument or `--data-dir` / `DOTFACTS_DATA_DIR`
//! 2. `data_dir` in the settings file
//! 3. `/data`

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::{split_search_path, ProbeEnvironment};
pub use loader::{
    default_settings_path, load_default_settings, load_settings, load_settings_file, parse_settings,
};
pub use schema::{Settings, DEFAULT_DATA_DIR};
