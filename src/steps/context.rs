//! Per-run execution context.

use std::path::{Path, PathBuf};

use crate::detection::Facts;

/// Values passed into every invoked step.
///
/// Constructed once per run from classifier facts plus CLI flags, then
/// cloned per step with the current step name set. A step can never
/// mutate the parent run's copy.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub facts: Facts,

    /// Diagnostic logging enabled; forwarded to steps, never changes
    /// control flow.
    pub debug: bool,

    /// Privilege escalation handle ("sudo" or empty).
    pub sudo: String,

    /// Path to the shared append-only run log.
    pub log_file: PathBuf,

    /// Logical name of the step currently being invoked; empty between
    /// steps.
    pub current_step: String,
}

impl RunContext {
    /// Build the run-scoped context.
    pub fn new(facts: Facts, debug: bool, sudo: String, log_file: PathBuf) -> Self {
        Self {
            facts,
            debug,
            sudo,
            log_file,
            current_step: String::new(),
        }
    }

    /// Clone for one step invocation.
    pub fn for_step(&self, name: &str) -> Self {
        let mut ctx = self.clone();
        ctx.current_step = name.to_string();
        ctx
    }

    /// Materialize the child environment contract.
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("RIGUP_STEP", self.current_step.clone()),
            ("RIGUP_PLATFORM", self.facts.platform.clone()),
            ("RIGUP_DISTRO", self.facts.distribution.clone()),
            ("RIGUP_ARCH", self.facts.architecture.clone()),
            ("RIGUP_DEVICE", self.facts.device_id.clone()),
            ("RIGUP_PKG_MANAGER", self.facts.package_manager.to_string()),
            ("RIGUP_DEBUG", if self.debug { "1" } else { "0" }.to_string()),
            ("RIGUP_SUDO", self.sudo.clone()),
            (
                "RIGUP_LOG_FILE",
                self.log_file.to_string_lossy().into_owned(),
            ),
        ]
    }

    /// The shared run log path.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}
