//! Error types for rigup operations.
//!
//! This module defines [`RigupError`], the primary error type used throughout
//! the engine, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RigupError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RigupError::Other`) for unexpected errors
//! - Every error aborts the remaining plan immediately; there is no retry
//!   or partial-failure bypass

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rigup operations.
#[derive(Debug, Error)]
pub enum RigupError {
    /// The steps root directory does not exist. Fatal before anything runs.
    #[error("Steps root not found: {path}")]
    MissingStepsRoot { path: PathBuf },

    /// A requested logical step name is not in the registry.
    #[error("Step not found: {name}")]
    StepNotFound { name: String },

    /// A step process exited with a non-success status.
    #[error("Step '{name}' failed with exit code {code:?}")]
    StepFailed { name: String, code: Option<i32> },

    /// `--steps` was given with no step names.
    #[error("No step names given; pass at least one name to --steps")]
    EmptySelection,

    /// The step process could not be spawned at all.
    #[error("Failed to invoke step '{name}': {message}")]
    SpawnFailed { name: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rigup operations.
pub type Result<T> = std::result::Result<T, RigupError>;
