//! Command-line argument parsing for netpulse.

/// Values given on the command line that override the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub interval_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub quiet: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Arguments could not be understood
    Invalid(String),
    /// Run the monitor (default)
    Run(CliOverrides),
}

/// Usage text printed by `--help` and on invalid arguments.
pub fn usage() -> String {
    format!(
        "Usage: netpulse [OPTIONS]\n\
         \n\
         Options:\n  \
           --url <URL>         Probe target (default: {})\n  \
           --interval <MS>     Milliseconds between probes (default: {})\n  \
           --timeout <MS>      Per-probe timeout in milliseconds (default: {})\n  \
           -q, --quiet         Do not log a line before every probe\n  \
           -V, --version       Print version\n  \
           -h, --help          Print this help\n\
         \n\
         Keys: l toggles the log panel, q / Esc / Ctrl+C quits.\n",
        crate::config::DEFAULT_URL,
        crate::config::DEFAULT_INTERVAL.as_millis(),
        crate::config::DEFAULT_TIMEOUT.as_millis(),
    )
}

/// Parse command-line arguments and return the appropriate command.
///
/// Options take their value from the next argument or after `=`
/// (`--interval 250`, `--interval=250`). Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use netpulse::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["netpulse".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--quiet" | "-q" => overrides.quiet = true,
            "--url" | "--interval" | "--timeout" => {
                let Some(value) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid(format!("{} requires a value", flag));
                };
                match flag.as_str() {
                    "--url" => overrides.url = Some(value),
                    "--interval" => match parse_millis(&flag, &value) {
                        Ok(ms) => overrides.interval_ms = Some(ms),
                        Err(message) => return CliCommand::Invalid(message),
                    },
                    _ => match parse_millis(&flag, &value) {
                        Ok(ms) => overrides.timeout_ms = Some(ms),
                        Err(message) => return CliCommand::Invalid(message),
                    },
                }
            }
            _ => {}
        }
    }

    CliCommand::Run(overrides)
}

fn parse_millis(flag: &str, value: &str) -> Result<u64, String> {
    match value.parse::<u64>() {
        Ok(0) => Err(format!("{} must be greater than zero", flag)),
        Ok(ms) => Ok(ms),
        Err(_) => Err(format!("{} expects milliseconds, got '{}'", flag, value)),
    }
}
