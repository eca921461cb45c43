//! Command implementations.

pub mod dispatcher;
pub mod list;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use list::ListCommand;
pub use run::RunCommand;
