//! Command-line interface.
//!
//! [`run_cli_command`] is called before the terminal is touched. It handles
//! the informational flags and tells `main` whether to start the TUI.

pub mod args;

pub use args::{parse_args, usage, CliCommand};

use crate::error::VizError;

/// Current version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a non-TUI command.
///
/// Returns `None` for [`CliCommand::Run`], `Some(Ok(()))` after printing
/// help or version, and `Some(Err(_))` for an unrecognized argument.
pub fn run_cli_command(command: CliCommand) -> Option<Result<(), VizError>> {
    match command {
        CliCommand::Help => {
            print!("{}", usage());
            Some(Ok(()))
        }
        CliCommand::Version => {
            println!("memviz {}", VERSION);
            Some(Ok(()))
        }
        CliCommand::Unknown(arg) => Some(Err(VizError::config(
            "argument",
            format!("unrecognized argument '{}' (try --help)", arg),
        ))),
        CliCommand::Run => None,
    }
}
