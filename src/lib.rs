//! dotfacts - Dotfiles fact probe and instance watchdog.
//!
//! Two small, independent automation tools share this crate:
//!
//! - a fact probe that reports which developer tools and dotfile markers
//!   exist on the current machine, as an Ansible binary module;
//! - a watchdog that checks whether an EC2 instance is still running and
//!   sends an SNS notification if it is.
//!
//! # Modules
//!
//! - [`ansible`] - Ansible module protocol for the fact probe
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file and probe environment
//! - [`detection`] - Executable, path and file-content checks
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Tracing subscriber setup
//! - [`ui`] - Terminal output
//! - [`watchdog`] - EC2 state check and SNS notification
//!
//! # Example
//!
//! ```
//! use dotfacts::detection::{executable_exists, expand_home};
//! use std::path::Path;
//!
//! assert!(!executable_exists("definitely-not-installed-12345", &[]));
//! assert_eq!(
//!     expand_home("~/.condarc", Path::new("/home/alice")),
//!     Path::new("/home/alice/.condarc")
//! );
//! ```

pub mod ansible;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod logging;
pub mod ui;
pub mod watchdog;

pub use error::{DotfactsError, Result};
