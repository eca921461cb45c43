//! Step execution engine.
//!
//! Runs a plan against the registry: resolve each logical name, invoke the
//! implementation as an isolated child process with the environment
//! contract, and abort the whole run on the first unknown name or
//! non-success exit. Strictly sequential; exactly one child at a time, no
//! timeouts, no retries, no rollback of already-applied steps.

use std::process::Command;

use crate::error::{Result, RigupError};
use crate::logfile::RunLog;
use crate::steps::context::RunContext;
use crate::steps::registry::StepRegistry;

/// Outcome of a fully successful run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Logical names in execution order, one entry per invocation.
    pub executed: Vec<String>,
}

/// Execute the plan, fail-fast.
///
/// On failure the error names the offending step; earlier steps stay
/// applied. The failure is also recorded to the run log before returning.
pub fn run(
    plan: &[String],
    registry: &StepRegistry,
    context: &RunContext,
    log: &mut RunLog,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    for name in plan {
        let step = registry.get(name).ok_or_else(|| {
            let err = RigupError::StepNotFound { name: name.clone() };
            let _ = log.failure(&err.to_string());
            err
        })?;

        let step_ctx = context.for_step(name);
        let step_path = registry.absolute_path(step);

        log.step_start(name, &step.path)?;
        tracing::info!(step = %name, file = %step.path.display(), "starting step");

        let status = Command::new("bash")
            .arg(&step_path)
            .envs(step_ctx.env_vars())
            .status()
            .map_err(|e| {
                let err = RigupError::SpawnFailed {
                    name: name.clone(),
                    message: e.to_string(),
                };
                let _ = log.failure(&err.to_string());
                err
            })?;

        if !status.success() {
            let err = RigupError::StepFailed {
                name: name.clone(),
                code: status.code(),
            };
            log.failure(&err.to_string())?;
            return Err(err);
        }

        log.step_end(name)?;
        tracing::info!(step = %name, "finished step");
        report.executed.push(name.clone());
    }

    Ok(report)
}

/// Print the invocations a run would make, without executing anything.
pub fn dry_run(plan: &[String], registry: &StepRegistry) -> Result<RunReport> {
    let mut report = RunReport::default();

    for name in plan {
        let step = registry
            .get(name)
            .ok_or_else(|| RigupError::StepNotFound { name: name.clone() })?;

        println!("would run: {} ({})", name, step.path.display());
        report.executed.push(name.clone());
    }

    Ok(report)
}
