//! Fact evaluation.

use crate::config::ProbeEnvironment;
use crate::error::Result;

use super::checklist::CHECKLIST;
use super::command_detection::executable_exists;
use super::derived::{needs_link, needs_path_entry, usable};
use super::file_detection::{entry_exists, file_contains};
use super::types::{Check, FactDef, FactSet, Location};

/// Evaluates checks against one environment snapshot.
///
/// Nothing is cached: every call to [`FactProbe::run`] touches the
/// filesystem again.
pub struct FactProbe<'a> {
    env: &'a ProbeEnvironment,
}

impl<'a> FactProbe<'a> {
    /// Create a probe over the given environment.
    pub fn new(env: &'a ProbeEnvironment) -> Self {
        Self { env }
    }

    /// Evaluate the full checklist.
    pub fn run(&self) -> Result<FactSet> {
        self.run_checks(CHECKLIST)
    }

    /// Evaluate an arbitrary list of checks, in order.
    ///
    /// Stops at the first error; absence is never an error.
    pub fn run_checks(&self, defs: &[FactDef]) -> Result<FactSet> {
        let mut facts = FactSet::new();
        for def in defs {
            let value = self.evaluate(&def.check)?;
            tracing::debug!("fact {} = {}", def.key, value);
            facts.insert(def.key, value);
        }
        Ok(facts)
    }

    /// Evaluate a single check.
    pub fn evaluate(&self, check: &Check) -> Result<bool> {
        let value = match *check {
            Check::Executable(name) => self.on_search_path(name),
            Check::Path(location) => self.exists(location),
            Check::FileContains { file, needle } => {
                file_contains(&file.resolve(self.env), needle)?
            }
            Check::Usable {
                executable,
                fallback,
            } => usable(self.on_search_path(executable), self.exists(fallback)),
            Check::NeedsLink { install, link } => {
                needs_link(self.exists(install), self.exists(link))
            }
            Check::NeedsPathEntry {
                env_dir,
                executable,
            } => needs_path_entry(self.exists(env_dir), self.on_search_path(executable)),
        };
        Ok(value)
    }

    fn on_search_path(&self, name: &str) -> bool {
        executable_exists(name, self.env.search_path())
    }

    fn exists(&self, location: Location) -> bool {
        entry_exists(&location.resolve(self.env))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::checklist::fact_keys;
    use crate::error::DotfactsError;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct Sandbox {
        _temp: TempDir,
        home: PathBuf,
        data: PathBuf,
        bin: PathBuf,
    }

    impl Sandbox {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let home = temp.path().join("home");
            let data = temp.path().join("data");
            let bin = temp.path().join("bin");
            for dir in [&home, &data, &bin] {
                fs::create_dir_all(dir).unwrap();
            }
            Self {
                _temp: temp,
                home,
                data,
                bin,
            }
        }

        fn env(&self) -> ProbeEnvironment {
            ProbeEnvironment::new(self.home.clone(), self.data.clone(), vec![self.bin.clone()])
        }

        fn binary(&self, name: &str) {
            create_fake_binary(&self.bin.join(name));
        }

        fn touch(&self, path: &Path) {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, "").unwrap();
        }
    }

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn empty_machine_reports_every_key_false() {
        let sandbox = Sandbox::new();
        let env = sandbox.env();

        let facts = FactProbe::new(&env).run().unwrap();

        assert_eq!(facts.keys().collect::<Vec<_>>(), fact_keys().collect::<Vec<_>>());
        assert!(facts.iter().all(|(_, v)| !v));
    }

    #[test]
    fn executables_and_paths_are_reported() {
        let sandbox = Sandbox::new();
        sandbox.binary("rg");
        sandbox.binary("nvim");
        sandbox.touch(&sandbox.home.join(".config/nvim/init.lua"));
        fs::create_dir_all(sandbox.home.join(".local/share/nvim/lazy")).unwrap();
        let env = sandbox.env();

        let facts = FactProbe::new(&env).run().unwrap();

        assert_eq!(facts.get("rg"), Some(true));
        assert_eq!(facts.get("nvim"), Some(true));
        assert_eq!(facts.get("fd"), Some(false));
        assert_eq!(facts.get("dotfiles"), Some(true));
        assert_eq!(facts.get("lazy"), Some(true));
        assert_eq!(facts.get("mason"), Some(false));
    }

    #[test]
    fn home_and_data_locations_resolve_against_their_roots() {
        let sandbox = Sandbox::new();
        fs::create_dir_all(sandbox.data.join("nodejs/bin")).unwrap();
        sandbox.touch(&sandbox.home.join(".local/bin/nvim"));
        let env = sandbox.env();
        let probe = FactProbe::new(&env);

        assert!(probe.evaluate(&Check::Path(Location::Data("nodejs/bin"))).unwrap());
        assert!(probe.evaluate(&Check::Path(Location::Home("~/.local/bin/nvim"))).unwrap());
        assert!(!probe.evaluate(&Check::Path(Location::Data(".local/bin/nvim"))).unwrap());
        assert!(!probe.evaluate(&Check::Path(Location::Home("~/nodejs/bin"))).unwrap());
    }

    #[test]
    fn bioconda_requires_substring_in_condarc() {
        let sandbox = Sandbox::new();
        let env = sandbox.env();
        let probe = FactProbe::new(&env);
        let check = Check::FileContains {
            file: Location::Home("~/.condarc"),
            needle: "bioconda",
        };

        assert!(!probe.evaluate(&check).unwrap());

        fs::write(sandbox.home.join(".condarc"), "channels:\n  - conda-forge\n").unwrap();
        assert!(!probe.evaluate(&check).unwrap());

        fs::write(sandbox.home.join(".condarc"), "channels:\n  - bioconda\n").unwrap();
        assert!(probe.evaluate(&check).unwrap());
    }

    #[test]
    fn unreadable_condarc_propagates() {
        let sandbox = Sandbox::new();
        fs::create_dir_all(sandbox.home.join(".condarc")).unwrap();
        let env = sandbox.env();

        let result = FactProbe::new(&env).run();
        assert!(matches!(result, Err(DotfactsError::ConfigRead { .. })));
    }

    #[test]
    fn conda_usable_from_fallback_install() {
        let sandbox = Sandbox::new();
        create_fake_binary(&sandbox.data.join("miniforge3/bin/conda"));
        let env = sandbox.env();

        let facts = FactProbe::new(&env).run().unwrap();

        assert_eq!(facts.get("conda"), Some(false));
        assert_eq!(facts.get("conda-usable"), Some(true));
        assert_eq!(facts.get("conda-needs-path"), Some(true));
    }

    #[test]
    fn conda_on_path_needs_no_entry() {
        let sandbox = Sandbox::new();
        sandbox.binary("conda");
        fs::create_dir_all(sandbox.data.join("miniforge3/bin")).unwrap();
        let env = sandbox.env();

        let facts = FactProbe::new(&env).run().unwrap();

        assert_eq!(facts.get("conda-usable"), Some(true));
        assert_eq!(facts.get("conda-needs-path"), Some(false));
    }

    #[test]
    fn nvim_needs_link_combinations() {
        let check = Check::NeedsLink {
            install: Location::Data("nvim-linux-x86_64/bin/nvim"),
            link: Location::Home("~/.local/bin/nvim"),
        };

        // neither
        let sandbox = Sandbox::new();
        let env = sandbox.env();
        assert!(!FactProbe::new(&env).evaluate(&check).unwrap());

        // link only
        sandbox.touch(&sandbox.home.join(".local/bin/nvim"));
        assert!(!FactProbe::new(&env).evaluate(&check).unwrap());

        // both
        create_fake_binary(&sandbox.data.join("nvim-linux-x86_64/bin/nvim"));
        assert!(!FactProbe::new(&env).evaluate(&check).unwrap());

        // install only
        fs::remove_file(sandbox.home.join(".local/bin/nvim")).unwrap();
        assert!(FactProbe::new(&env).evaluate(&check).unwrap());
    }

    #[test]
    fn npm_needs_path_entry() {
        let sandbox = Sandbox::new();
        fs::create_dir_all(sandbox.data.join("nodejs/bin")).unwrap();
        let env = sandbox.env();

        let facts = FactProbe::new(&env).run().unwrap();
        assert_eq!(facts.get("npm-needs-path"), Some(true));

        sandbox.binary("npm");
        let facts = FactProbe::new(&env).run().unwrap();
        assert_eq!(facts.get("npm-needs-path"), Some(false));
    }

    #[test]
    fn run_checks_keeps_given_order() {
        let sandbox = Sandbox::new();
        let env = sandbox.env();
        let defs = [
            FactDef::new("b", Check::Executable("b")),
            FactDef::new("a", Check::Path(Location::Home("~"))),
        ];

        let facts = FactProbe::new(&env).run_checks(&defs).unwrap();

        assert_eq!(facts.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(facts.get("a"), Some(true));
    }
}
