//! Ansible binary module: gathers dotfile and tool facts.
//!
//! Install into a playbook's `library/` directory. Ansible calls it with
//! the path of a JSON arguments file and reads one JSON document from
//! stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use dotfacts::ansible::{self, Invocation};
use dotfacts::logging::init_tracing;

fn main() -> ExitCode {
    // Anything below warn would be noise in Ansible's stderr capture.
    init_tracing(false, "warn");

    let invocation = Invocation {
        args_file: std::env::args_os().nth(1).map(PathBuf::from),
        data_dir: std::env::var_os("DOTFACTS_DATA_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from),
        settings_file: std::env::var_os("DOTFACTS_CONFIG")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from),
        ..Default::default()
    };

    let result = ansible::execute(&invocation);
    println!("{}", result.to_json());
    ExitCode::from(result.exit_code())
}
