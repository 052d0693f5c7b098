//! Check definitions and the fact set they produce.

use std::path::PathBuf;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::ProbeEnvironment;

use super::file_detection::expand_home;

/// Where a checked path lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A user-relative path such as `~/.condarc`.
    Home(&'static str),

    /// A path relative to the data volume root.
    Data(&'static str),
}

impl Location {
    /// Resolve to an absolute path for the given environment.
    pub fn resolve(&self, env: &ProbeEnvironment) -> PathBuf {
        match self {
            Location::Home(path) => expand_home(path, env.home()),
            Location::Data(path) => env.data_dir().join(path),
        }
    }
}

/// A single entry of the fact checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Executable is resolvable on the search path.
    Executable(&'static str),

    /// Path exists.
    Path(Location),

    /// File exists and contains the substring.
    FileContains {
        file: Location,
        needle: &'static str,
    },

    /// Executable is on the search path, or a fallback install exists.
    Usable {
        executable: &'static str,
        fallback: Location,
    },

    /// A fallback install exists but the user-local symlink to it does not.
    NeedsLink { install: Location, link: Location },

    /// An environment directory exists but its executable is not on the
    /// search path.
    NeedsPathEntry {
        env_dir: Location,
        executable: &'static str,
    },
}

/// A named check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactDef {
    /// Fact key reported to Ansible.
    pub key: &'static str,

    /// How the value is computed.
    pub check: Check,
}

impl FactDef {
    pub const fn new(key: &'static str, check: Check) -> Self {
        Self { key, check }
    }
}

/// Ordered mapping of fact keys to values.
///
/// Serializes as a JSON object whose keys appear in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactSet {
    facts: Vec<(String, bool)>,
}

impl FactSet {
    /// Create an empty fact set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fact. A repeated key overwrites the earlier value in place.
    pub fn insert(&mut self, key: &str, value: bool) {
        match self.facts.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.facts.push((key.to_string(), value)),
        }
    }

    /// Look up a fact by key.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.facts.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    /// Iterate over facts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.facts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Fact keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.facts.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl Serialize for FactSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.facts.len()))?;
        for (key, value) in &self.facts {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
