//! Step resolution and execution.
//!
//! The core engine:
//!
//! - [`scope_chain`] - Ordered scope directories for the current facts
//! - [`StepRegistry`] - Logical-name → implementation mapping with tier
//!   override precedence
//! - [`plan_all`] / [`plan_selected`] - Execution plan construction
//! - [`run`] - Sequential fail-fast execution of a plan
//! - [`RunContext`] - The environment contract handed to each step

pub mod context;
pub mod plan;
pub mod registry;
pub mod runner;
pub mod scope;

pub use context::RunContext;
pub use plan::{plan_all, plan_selected};
pub use registry::{logical_name, ResolvedStep, StepRegistry};
pub use runner::{dry_run, run, RunReport};
pub use scope::{scope_chain, DirScanner, FsScanner, ScopeDir, ScopeTier};
