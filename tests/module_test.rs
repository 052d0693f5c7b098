//! Integration tests for the `dotfile_facts` Ansible module binary.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn module(temp: &TempDir) -> Command {
    let home = temp.path().join("home");
    fs::create_dir_all(&home).unwrap();

    let mut cmd = Command::new(cargo_bin("dotfile_facts"));
    cmd.env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("PATH", temp.path().join("bin"))
        .env("DOTFACTS_DATA_DIR", temp.path().join("data"))
        .env_remove("DOTFACTS_CONFIG");
    cmd
}

#[test]
fn check_mode_args_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let args = temp.path().join("args");
    fs::write(&args, r#"{"_ansible_check_mode": true, "_ansible_diff": false}"#)?;

    module(&temp)
        .arg(&args)
        .assert()
        .success()
        .stdout(predicate::eq("{\"changed\":false}\n"));
    Ok(())
}

#[test]
fn gathers_facts_without_args() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("home/.local/share/nvim/mason"))?;

    let output = module(&temp).output()?;
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(doc["changed"], false);
    assert_eq!(doc["ansible_facts"]["mason"], true);
    assert_eq!(doc["ansible_facts"]["lazy"], false);
    assert_eq!(doc["ansible_facts"]["bioconda"], false);
    assert!(doc.get("failed").is_none());
    Ok(())
}

#[test]
fn invalid_default_settings_file_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config_dir = temp.path().join("home/.config/dotfacts");
    fs::create_dir_all(&config_dir)?;
    fs::write(config_dir.join("config.yml"), "data_dirr: /nowhere\n")?;

    let output = module(&temp).output()?;
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(doc.get("failed").is_none());
    assert_eq!(doc["ansible_facts"]["rg"], false);
    Ok(())
}

#[test]
fn facts_keep_checklist_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = module(&temp).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    let vd = stdout.find("\"vd\"").unwrap();
    let dotfiles = stdout.find("\"dotfiles\"").unwrap();
    let lazy = stdout.find("\"lazy\"").unwrap();
    assert!(vd < dotfiles && dotfiles < lazy);
    Ok(())
}

#[test]
fn data_dir_module_argument() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let volume = temp.path().join("volume");
    fs::create_dir_all(volume.join("nodejs/bin"))?;
    let args = temp.path().join("args");
    fs::write(
        &args,
        serde_json::json!({ "data_dir": volume }).to_string(),
    )?;

    let output = module(&temp).arg(&args).output()?;
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(doc["ansible_facts"]["npm-needs-path"], true);
    Ok(())
}

#[test]
fn malformed_args_fail_with_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let args = temp.path().join("args");
    fs::write(&args, "{not json")?;

    module(&temp)
        .arg(&args)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"failed\":true"))
        .stdout(predicate::str::contains("Invalid module arguments"));
    Ok(())
}
