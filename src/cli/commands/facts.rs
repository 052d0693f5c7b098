//! Facts command implementation.
//!
//! The `dotfacts facts` command runs the fact probe and prints the Ansible
//! module result.

use std::path::PathBuf;

use crate::ansible::{self, Invocation};
use crate::cli::args::FactsArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The facts command implementation.
pub struct FactsCommand {
    settings_file: Option<PathBuf>,
    args: FactsArgs,
}

impl FactsCommand {
    /// Create a new facts command.
    pub fn new(settings_file: Option<PathBuf>, args: FactsArgs) -> Self {
        Self {
            settings_file,
            args,
        }
    }

    fn invocation(&self) -> Invocation {
        Invocation {
            args_file: self.args.args_file.clone(),
            check_mode: self.args.check,
            data_dir: self.args.data_dir.clone(),
            settings_file: self.settings_file.clone(),
        }
    }
}

impl Command for FactsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = ansible::execute(&self.invocation());

        let document = if self.args.pretty {
            result.to_json_pretty()
        } else {
            result.to_json()
        };
        ui.emit(&document);

        if let Some(msg) = result.msg.as_deref().filter(|_| result.failed) {
            ui.error(&format!("Error: {}", msg));
            return Ok(CommandResult::failure(i32::from(result.exit_code())));
        }

        if let Some(facts) = &result.ansible_facts {
            let present = facts.iter().filter(|(_, v)| *v).count();
            ui.success(&format!("{} of {} facts true", present, facts.len()));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn check_flag_emits_unchanged() {
        let cmd = FactsCommand::new(
            None,
            FactsArgs {
                check: true,
                ..Default::default()
            },
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.emitted(), &[r#"{"changed":false}"#.to_string()]);
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn check_mode_from_args_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("args");
        fs::write(&path, r#"{"_ansible_check_mode": true}"#).unwrap();
        let cmd = FactsCommand::new(
            None,
            FactsArgs {
                args_file: Some(path),
                ..Default::default()
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.emitted(), &[r#"{"changed":false}"#.to_string()]);
    }

    #[test]
    fn missing_settings_file_fails_with_document() {
        let temp = TempDir::new().unwrap();
        let cmd = FactsCommand::new(Some(temp.path().join("missing.yml")), FactsArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        let doc: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert_eq!(doc["failed"], true);
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn pretty_output_is_indented() {
        let cmd = FactsCommand::new(
            None,
            FactsArgs {
                check: true,
                pretty: true,
                ..Default::default()
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.emitted(), &["{\n  \"changed\": false\n}".to_string()]);
    }
}
