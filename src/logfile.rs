//! Append-only run log.
//!
//! One text file per run, shared between the engine and every step (via
//! `RIGUP_LOG_FILE`). The engine writes a run header before any step
//! executes and start/end delimiters around each invocation; steps may
//! append arbitrary text of their own. Line-oriented and human-readable;
//! the engine never reads it back.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::detection::Facts;
use crate::error::Result;

/// Handle to the shared run log.
pub struct RunLog {
    path: PathBuf,
    file: File,
}

impl RunLog {
    /// Open (creating if needed) the log for appending.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Default log path: `rigup-<timestamp>.log` under the system temp dir.
    pub fn default_path() -> PathBuf {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        std::env::temp_dir().join(format!("rigup-{stamp}.log"))
    }

    /// Path this log writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the run header. Called once, before any step executes.
    pub fn header(&mut self, facts: &Facts, planned: usize) -> Result<()> {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(self.file, "==== rigup run {now} ====")?;
        writeln!(self.file, "# {}", facts.summary())?;
        writeln!(self.file, "# planned steps: {planned}")?;
        Ok(())
    }

    /// Delimiter before a step's output.
    pub fn step_start(&mut self, name: &str, path: &Path) -> Result<()> {
        writeln!(self.file, "---- start {name} ({}) ----", path.display())?;
        Ok(())
    }

    /// Delimiter after a step finished successfully.
    pub fn step_end(&mut self, name: &str) -> Result<()> {
        writeln!(self.file, "---- end {name} ----")?;
        Ok(())
    }

    /// Failure record, written before the engine exits.
    pub fn failure(&mut self, message: &str) -> Result<()> {
        writeln!(self.file, "!!!! {message}")?;
        Ok(())
    }
}
