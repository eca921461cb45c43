//! Run command implementation.
//!
//! The default command: build the registry, construct the plan (full or
//! `--steps` selection), and execute it fail-fast.

use std::path::PathBuf;

use console::style;

use crate::cli::args::Cli;
use crate::detection::{sudo_handle, Facts};
use crate::error::Result;
use crate::logfile::RunLog;
use crate::steps::{dry_run, plan_all, plan_selected, run, FsScanner, RunContext, StepRegistry};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    root: PathBuf,
    facts: Facts,
    selection: Option<Vec<String>>,
    log_file: Option<PathBuf>,
    debug: bool,
    dry: bool,
}

impl RunCommand {
    /// Create a new run command from the parsed CLI.
    pub fn new(cli: &Cli, facts: Facts) -> Self {
        Self {
            root: cli.root.clone(),
            facts,
            selection: cli.steps.clone(),
            log_file: cli.log_file.clone(),
            debug: cli.debug,
            dry: cli.dry_run,
        }
    }

    fn build_plan(&self, registry: &StepRegistry) -> Result<Vec<String>> {
        match &self.selection {
            Some(names) => plan_selected(names),
            None => Ok(plan_all(registry)),
        }
    }
}

impl Command for RunCommand {
    fn execute(&self) -> Result<CommandResult> {
        let registry = StepRegistry::build(&self.root, &self.facts, &FsScanner)?;
        let plan = self.build_plan(&registry)?;

        if plan.is_empty() {
            println!("Nothing to do: no steps in {}", self.root.display());
            return Ok(CommandResult::success());
        }

        if self.dry {
            let report = dry_run(&plan, &registry)?;
            println!(
                "{} {} step(s) planned (dry run, nothing executed)",
                style("✓").green(),
                report.executed.len()
            );
            return Ok(CommandResult::success());
        }

        let log_path = self
            .log_file
            .clone()
            .unwrap_or_else(RunLog::default_path);
        let mut log = RunLog::open(&log_path)?;
        log.header(&self.facts, plan.len())?;

        let context = RunContext::new(
            self.facts.clone(),
            self.debug,
            sudo_handle(),
            log_path.clone(),
        );

        println!(
            "Provisioning {} ({} step(s), log: {})",
            self.facts.device_id,
            plan.len(),
            style(log_path.display()).dim()
        );

        let report = run(&plan, &registry, &context, &mut log)?;

        for name in &report.executed {
            println!("  {} {}", style("✓").green(), name);
        }
        println!("{} Provisioning complete", style("✓").green());

        Ok(CommandResult::success())
    }
}
