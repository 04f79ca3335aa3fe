//! CLI module for netpulse.
//!
//! Handles the flags that are answered without starting the TUI
//! (`--version`, `--help`, malformed arguments) and collects the
//! configuration overrides for a normal run.
//!
//! ```ignore
//! use netpulse::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, CliOverrides};
pub use version::{version_string, VERSION};

/// Exit code for invalid command-line usage.
pub const EXIT_USAGE: i32 = 2;

/// Run a CLI-only command.
///
/// Returns `None` for [`CliCommand::Run`] (start the monitor), otherwise the
/// process exit code after printing the requested output.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_string());
            Some(0)
        }
        CliCommand::Help => {
            print!("{}", usage());
            Some(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("netpulse: {}\n", message);
            eprint!("{}", usage());
            Some(EXIT_USAGE)
        }
        CliCommand::Run(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_none() {
        let result = run_cli_command(&CliCommand::Run(CliOverrides::default()));
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_exits_with_usage_code() {
        let result = run_cli_command(&CliCommand::Invalid("missing value".to_string()));
        assert_eq!(result, Some(EXIT_USAGE));
    }
}
