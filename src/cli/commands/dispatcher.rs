//! Command dispatching.
//!
//! - [`Command`] trait for command implementations
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the flag surface to a command

use crate::cli::args::Cli;
use crate::detection::Facts;
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, returning success/failure and an exit code.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches the parsed CLI to its command implementation.
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Classify the machine and run the selected command.
    pub fn dispatch(cli: &Cli) -> Result<CommandResult> {
        let facts = Facts::classify(cli.device.as_deref());
        tracing::debug!("classified machine: {}", facts.summary());

        if cli.list {
            let cmd = super::list::ListCommand::new(&cli.root, facts, cli.json);
            cmd.execute()
        } else {
            let cmd = super::run::RunCommand::new(cli, facts);
            cmd.execute()
        }
    }
}
