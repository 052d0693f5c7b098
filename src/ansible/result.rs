//! The JSON document a module prints for Ansible.

use serde::Serialize;

use crate::detection::FactSet;

/// Result of one module invocation.
///
/// ```json
/// {"changed": false, "ansible_facts": {"rg": true, "fd": false}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleResult {
    /// This module never changes the machine.
    pub changed: bool,

    /// Gathered facts; absent in check mode and on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_facts: Option<FactSet>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ModuleResult {
    /// Successful run carrying facts.
    pub fn with_facts(facts: FactSet) -> Self {
        Self {
            changed: false,
            ansible_facts: Some(facts),
            failed: false,
            msg: None,
        }
    }

    /// Check-mode run: nothing gathered.
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            ansible_facts: None,
            failed: false,
            msg: None,
        }
    }

    /// Failed run.
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            changed: false,
            ansible_facts: None,
            failed: true,
            msg: Some(msg.into()),
        }
    }

    /// Process exit code Ansible expects for this result.
    pub fn exit_code(&self) -> u8 {
        if self.failed {
            1
        } else {
            0
        }
    }

    /// Serialize to a single-line JSON document.
    pub fn to_json(&self) -> String {
        // FactSet and primitive fields can't fail to serialize.
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"failed": true}"#.to_string())
    }

    /// Serialize to indented JSON for humans.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_json())
    }
}
