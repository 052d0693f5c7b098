//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dotfacts - Dotfiles fact probe and instance watchdog.
#[derive(Debug, Parser)]
#[command(name = "dotfacts")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides default ~/.config/dotfacts/config.yml)
    #[arg(short, long, global = true, env = "DOTFACTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only print documents and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Gather dotfile and tool facts as an Ansible module result
    Facts(FactsArgs),

    /// Check an EC2 instance and notify if it is still running
    Watchdog(WatchdogArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `facts` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FactsArgs {
    /// JSON module arguments file, as written by Ansible
    #[arg(long)]
    pub args_file: Option<PathBuf>,

    /// Check mode: gather nothing, report no change
    #[arg(long)]
    pub check: bool,

    /// Data volume holding fallback installs
    #[arg(long, env = "DOTFACTS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `watchdog` command.
#[derive(Debug, Clone, clap::Args)]
pub struct WatchdogArgs {
    /// Instance to check
    #[arg(long, env = "INSTANCE_ID")]
    pub instance_id: String,

    /// SNS topic to notify
    #[arg(long, env = "SNS_TOPIC_ARN")]
    pub topic_arn: String,

    /// AWS region (defaults to the SDK provider chain)
    #[arg(long)]
    pub region: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
