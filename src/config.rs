//! Monitor configuration.
//!
//! Defaults reproduce the classic behaviour: a HEAD request to Google's
//! `generate_204` endpoint every 500 ms with a 1 s timeout. Environment
//! variables and command-line flags may override them, in that order.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `NETPULSE_URL` | probe target |
//! | `NETPULSE_INTERVAL_MS` | sleep between cycles |
//! | `NETPULSE_TIMEOUT_MS` | hard per-probe timeout |
//! | `NETPULSE_LOG_LINES` | log panel history length |
//! | `NETPULSE_QUIET` | suppress the per-cycle "Checking" line |

use std::time::Duration;

use crate::cli::CliOverrides;
use crate::error::{MonitorError, MonitorResult};

pub const DEFAULT_URL: &str = "http://clients3.google.com/generate_204";
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);
pub const DEFAULT_LOG_CAPACITY: usize = 1000;

pub const ENV_URL: &str = "NETPULSE_URL";
pub const ENV_INTERVAL_MS: &str = "NETPULSE_INTERVAL_MS";
pub const ENV_TIMEOUT_MS: &str = "NETPULSE_TIMEOUT_MS";
pub const ENV_LOG_LINES: &str = "NETPULSE_LOG_LINES";
pub const ENV_QUIET: &str = "NETPULSE_QUIET";

/// Configuration for the probe, the polling loop and the log panel.
///
/// # Example
///
/// ```
/// use netpulse::config::MonitorConfig;
/// use std::time::Duration;
///
/// let config = MonitorConfig::default()
///     .with_interval(Duration::from_secs(2))
///     .with_log_checks(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Probe target. Not validated here: a malformed URL is
    /// reported by the probe on every cycle.
    pub url: String,
    /// Sleep between the end of one cycle and the start of the next
    pub interval: Duration,
    /// Hard per-probe timeout
    pub timeout: Duration,
    /// Maximum number of lines kept by the log panel
    pub log_capacity: usize,
    /// Log a "Checking ..." line before every probe
    pub log_checks: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            interval: DEFAULT_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
            log_capacity: DEFAULT_LOG_CAPACITY,
            log_checks: true,
        }
    }
}

impl MonitorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    pub fn with_log_checks(mut self, log_checks: bool) -> Self {
        self.log_checks = log_checks;
        self
    }

    /// Defaults overridden by `NETPULSE_*` environment variables.
    pub fn from_env() -> MonitorResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> MonitorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_URL).filter(|v| !v.trim().is_empty()) {
            config.url = url.trim().to_string();
        }
        if let Some(ms) = parse_number(ENV_INTERVAL_MS, lookup(ENV_INTERVAL_MS))? {
            config.interval = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_number(ENV_TIMEOUT_MS, lookup(ENV_TIMEOUT_MS))? {
            config.timeout = Duration::from_millis(ms);
        }
        if let Some(lines) = parse_number(ENV_LOG_LINES, lookup(ENV_LOG_LINES))? {
            config.log_capacity = usize::try_from(lines)
                .map_err(|_| MonitorError::invalid_config(format!("{} is too large", ENV_LOG_LINES)))?;
        }
        if let Some(quiet) = lookup(ENV_QUIET) {
            config.log_checks = !is_truthy(&quiet);
        }

        Ok(config)
    }

    /// Apply command-line flags on top of this configuration.
    pub fn with_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(url) = &overrides.url {
            self.url = url.clone();
        }
        if let Some(ms) = overrides.interval_ms {
            self.interval = Duration::from_millis(ms);
        }
        if let Some(ms) = overrides.timeout_ms {
            self.timeout = Duration::from_millis(ms);
        }
        if overrides.quiet {
            self.log_checks = false;
        }
        self
    }

    /// Reject values the loop cannot run with.
    pub fn validate(&self) -> MonitorResult<()> {
        if self.url.trim().is_empty() {
            return Err(MonitorError::invalid_config("probe URL must not be empty"));
        }
        if self.interval.is_zero() {
            return Err(MonitorError::invalid_config("interval must be greater than zero"));
        }
        if self.timeout.is_zero() {
            return Err(MonitorError::invalid_config("timeout must be greater than zero"));
        }
        if self.log_capacity == 0 {
            return Err(MonitorError::invalid_config("log capacity must be greater than zero"));
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: Option<String>) -> MonitorResult<Option<u64>> {
    match value {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<u64>().map(Some).map_err(|_| {
            MonitorError::invalid_config(format!("{} must be a whole number, got '{}'", key, raw))
        }),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
