//! CLI argument definitions.
//!
//! rigup is an explicit-flag CLI: step selection only happens through
//! `--steps`, and bare positional arguments are rejected by clap.

use clap::Parser;
use std::path::PathBuf;

/// rigup - Layered machine provisioning step runner.
#[derive(Debug, Parser)]
#[command(name = "rigup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Steps root directory
    #[arg(long, env = "RIGUP_ROOT", default_value = "steps", value_name = "DIR")]
    pub root: PathBuf,

    /// Print resolved steps (name, path) without executing anything
    #[arg(long, conflicts_with_all = ["steps", "dry_run"])]
    pub list: bool,

    /// Output --list as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Run only the given steps, in the given order
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub steps: Option<Vec<String>>,

    /// Override the detected device id
    #[arg(long, env = "RIGUP_DEVICE", value_name = "ID")]
    pub device: Option<String>,

    /// Path to the shared run log (default: rigup-<timestamp>.log in the temp dir)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print planned invocations without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging (diagnostics go to stderr, never list output)
    #[arg(long)]
    pub debug: bool,
}
