pub mod commands;
pub mod context;
pub mod error;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
pub mod shell;

pub use context::{CliMode, ShellContext};
pub use error::{CliError, CommandError, CommandResult, LoopControl};
pub use shell::run_cli;
