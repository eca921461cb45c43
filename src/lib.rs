//! rigup - Layered machine provisioning step runner.
//!
//! rigup provisions a machine by running a sequence of idempotent step
//! scripts, choosing which implementation of each step applies through a
//! layered override scheme: generic → platform → platform+distro →
//! platform+architecture → specific device. The most specific scope that
//! defines a logical step name wins.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and dispatching
//! - [`detection`] - Machine classification into immutable facts
//! - [`error`] - Error types and result aliases
//! - [`logfile`] - Append-only per-run audit log
//! - [`steps`] - Scope enumeration, registry resolution, planning, and
//!   fail-fast execution
//!
//! # Example
//!
//! ```no_run
//! use rigup::detection::Facts;
//! use rigup::steps::{plan_all, FsScanner, StepRegistry};
//! use std::path::Path;
//!
//! let facts = Facts::classify(None);
//! let registry = StepRegistry::build(Path::new("steps"), &facts, &FsScanner).unwrap();
//! for name in plan_all(&registry) {
//!     println!("{name}");
//! }
//! ```

pub mod cli;
pub mod detection;
pub mod error;
pub mod logfile;
pub mod steps;

pub use error::{Result, RigupError};
