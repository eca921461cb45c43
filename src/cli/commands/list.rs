//! List command implementation.
//!
//! Prints the resolved registry without executing anything. The default
//! output is machine-parseable `<name>\t<relative path>` lines; `--json`
//! switches to a JSON array of `{name, path, tier}` objects. Entries are
//! printed in plan order so the output is stable across runs.

use std::path::{Path, PathBuf};

use crate::detection::Facts;
use crate::error::Result;
use crate::steps::{plan_all, FsScanner, StepRegistry};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    root: PathBuf,
    facts: Facts,
    json: bool,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(root: &Path, facts: Facts, json: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            facts,
            json,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        let registry = StepRegistry::build(&self.root, &self.facts, &FsScanner)?;
        let order = plan_all(&registry);

        if self.json {
            let entries: Vec<_> = order
                .iter()
                .filter_map(|name| registry.get(name))
                .collect();
            let rendered =
                serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            println!("{rendered}");
        } else {
            for name in &order {
                if let Some(step) = registry.get(name) {
                    println!("{}\t{}", step.name, step.path.display());
                }
            }
        }

        Ok(CommandResult::success())
    }
}
