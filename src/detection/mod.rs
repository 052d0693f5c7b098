//! Tool and dotfile detection.
//!
//! Every check is a plain existence test against a [`ProbeEnvironment`]:
//! an executable on the search path, a path under the home directory or
//! data volume, or a substring in a small config file. Absence is a normal
//! `false`, never an error.
//!
//! # Example
//!
//! ```
//! use dotfacts::config::ProbeEnvironment;
//! use dotfacts::detection::FactProbe;
//! use tempfile::TempDir;
//!
//! let home = TempDir::new().unwrap();
//! let env = ProbeEnvironment::new(home.path().to_path_buf(), "/nonexistent".into(), vec![]);
//! let facts = FactProbe::new(&env).run().unwrap();
//! assert_eq!(facts.get("dotfiles"), Some(false));
//! ```
//!
//! [`ProbeEnvironment`]: crate::config::ProbeEnvironment

pub mod checklist;
pub mod command_detection;
pub mod derived;
pub mod file_detection;
pub mod runner;
pub mod types;

pub use checklist::{fact_keys, CHECKLIST};
pub use command_detection::{executable_exists, resolve_executable};
pub use file_detection::{entry_exists, expand_home, file_contains, path_exists};
pub use runner::FactProbe;
pub use types::{Check, FactDef, FactSet, Location};
