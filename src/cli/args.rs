//! Command-line argument parsing.
//!
//! memviz takes no options beyond help and version. Configuration comes
//! from the environment (see [`crate::startup::config`]).

/// What `main` should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print usage and exit
    Help,
    /// Print the version and exit
    Version,
    /// Run the visualizer (default)
    Run,
    /// An argument we do not understand
    Unknown(String),
}

/// Parse arguments, skipping the program name. Only the first argument is
/// looked at.
///
/// ```
/// use memviz::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["memviz".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(mut args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    if let Some(arg) = args.nth(1) {
        return match arg.as_str() {
            "--help" | "-h" => CliCommand::Help,
            "--version" | "-V" => CliCommand::Version,
            _ => CliCommand::Unknown(arg),
        };
    }
    CliCommand::Run
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "memviz {}\n\
         Interactive memory allocation visualizer\n\
         \n\
         USAGE:\n    memviz [--help | --version]\n\
         \n\
         CONTROLS:\n    \
         Click Allocate, then a block, type a size (10-100) and press Enter\n    \
         Click Free, then an allocated block\n    \
         Click Clear All to reset every block\n    \
         Esc or Ctrl+C quits\n\
         \n\
         ENVIRONMENT:\n    \
         MEMVIZ_TICK_MS    animation tick in milliseconds (1-1000, default 16)\n    \
         MEMVIZ_GLYPHS     glyph set: unicode or ascii\n    \
         MEMVIZ_LOG_FILE   log file path\n    \
         MEMVIZ_LOG        log filter (RUST_LOG syntax, default info)\n",
        env!("CARGO_PKG_VERSION")
    )
}
