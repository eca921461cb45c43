//! Execution planning.
//!
//! An execution plan is an ordered list of logical step names. Two
//! construction modes: everything in the registry sorted by the resolved
//! file's basename, or an explicit caller-ordered selection.

use crate::error::{Result, RigupError};
use crate::steps::registry::StepRegistry;

/// Plan every step in the registry.
///
/// Ordering is ascending byte-lexicographic on the resolved file's
/// basename. The naming convention zero-pads numeric prefixes, so this
/// coincides with numeric order and is stable across machines even when
/// different tiers contribute the physical file.
pub fn plan_all(registry: &StepRegistry) -> Vec<String> {
    let mut steps: Vec<(&str, &str)> = registry
        .iter()
        .map(|step| (step.file_name.as_str(), step.name.as_str()))
        .collect();

    steps.sort();
    steps.into_iter().map(|(_, name)| name.to_string()).collect()
}

/// Plan an explicit selection of step names.
///
/// Caller order is preserved exactly; no deduplication, no filtering.
/// Unknown names are not rejected here; they fail as `StepNotFound` when
/// the runner reaches them. An empty selection is an input error.
pub fn plan_selected(names: &[String]) -> Result<Vec<String>> {
    if names.is_empty() {
        return Err(RigupError::EmptySelection);
    }

    Ok(names.to_vec())
}
