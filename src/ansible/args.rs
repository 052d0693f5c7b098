//! Module arguments passed in by Ansible.
//!
//! Binary modules receive the path of a JSON file holding the task's
//! parameters plus Ansible's internal `_ansible_*` keys. This module takes
//! no required parameters; only check mode and an optional data directory
//! are read, everything else is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DotfactsError, Result};

/// Parsed module arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleArgs {
    /// Set by Ansible when the play runs with `--check`.
    #[serde(rename = "_ansible_check_mode", default)]
    pub check_mode: bool,

    /// Overrides the data volume root for fallback install checks.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl ModuleArgs {
    /// Read arguments from the file Ansible passes as the first argument.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DotfactsError::ModuleArgsError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Parse arguments from JSON text. An empty file means no arguments.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(content).map_err(|e| DotfactsError::ModuleArgsError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
