//! Ansible binary-module protocol for the fact probe.
//!
//! Ansible runs the module with one argument, the path of a JSON args
//! file, and reads exactly one JSON document from stdout:
//!
//! - success: `{"changed": false, "ansible_facts": {...}}`
//! - check mode: `{"changed": false}`
//! - failure: `{"changed": false, "failed": true, "msg": "..."}` and exit 1
//!
//! # Example
//!
//! ```
//! use dotfacts::ansible::{run_module, ModuleArgs};
//!
//! let args = ModuleArgs { check_mode: true, ..Default::default() };
//! let result = run_module(&args, |_| unreachable!("check mode gathers nothing")).unwrap();
//! assert!(result.ansible_facts.is_none());
//! ```

pub mod args;
pub mod result;

pub use args::ModuleArgs;
pub use result::ModuleResult;

use std::path::{Path, PathBuf};

use crate::config::{load_settings, ProbeEnvironment};
use crate::detection::FactProbe;
use crate::error::Result;

/// Gather facts according to module arguments.
///
/// `load_env` is only called outside check mode, so a check-mode run
/// touches neither the filesystem nor the search path. It receives the
/// data directory override from the module arguments, if any.
pub fn run_module<F>(args: &ModuleArgs, load_env: F) -> Result<ModuleResult>
where
    F: FnOnce(Option<&Path>) -> Result<ProbeEnvironment>,
{
    if args.check_mode {
        tracing::debug!("Check mode: skipping fact gathering");
        return Ok(ModuleResult::unchanged());
    }

    let env = load_env(args.data_dir.as_deref())?;
    tracing::debug!(
        "Probing home={} data_dir={} ({} search path entries)",
        env.home().display(),
        env.data_dir().display(),
        env.search_path().len()
    );

    let facts = FactProbe::new(&env).run()?;
    Ok(ModuleResult::with_facts(facts))
}

/// Inputs for one module run, from the command line or Ansible.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// JSON args file written by Ansible.
    pub args_file: Option<PathBuf>,

    /// Force check mode regardless of the args file.
    pub check_mode: bool,

    /// Data directory used when the args file doesn't set one.
    pub data_dir: Option<PathBuf>,

    /// Explicit settings file instead of the default location.
    pub settings_file: Option<PathBuf>,
}

impl Invocation {
    /// Merge the args file with command-line overrides.
    pub fn module_args(&self) -> Result<ModuleArgs> {
        let mut args = match &self.args_file {
            Some(path) => ModuleArgs::from_file(path)?,
            None => ModuleArgs::default(),
        };
        args.check_mode |= self.check_mode;
        if args.data_dir.is_none() {
            args.data_dir = self.data_dir.clone();
        }
        Ok(args)
    }
}

/// Run the module against the real machine.
///
/// Errors never escape: they become a failed [`ModuleResult`] so Ansible
/// always receives a JSON document.
pub fn execute(invocation: &Invocation) -> ModuleResult {
    match try_execute(invocation) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Fact gathering failed: {}", e);
            ModuleResult::failure(e.to_string())
        }
    }
}

fn try_execute(invocation: &Invocation) -> Result<ModuleResult> {
    let args = invocation.module_args()?;
    run_module(&args, |data_dir| {
        let settings = load_settings(invocation.settings_file.as_deref())?;
        ProbeEnvironment::from_process(settings.resolve_data_dir(data_dir))
    })
}
