//! Diagnostic logging.
//!
//! The terminal belongs to the UI, so diagnostics never go to stdout or
//! stderr. A `tracing` subscriber is installed only when `NETPULSE_LOG`
//! holds a filter directive (`info`, `netpulse=debug`, ...), and it writes
//! plain text to `NETPULSE_LOG_FILE`, or `netpulse.log` in the temp dir.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::error::{MonitorError, MonitorResult};

pub const ENV_LOG: &str = "NETPULSE_LOG";
pub const ENV_LOG_FILE: &str = "NETPULSE_LOG_FILE";
pub const DEFAULT_LOG_FILE: &str = "netpulse.log";

/// Where diagnostics go, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    pub filter: String,
    pub path: PathBuf,
}

impl LogTarget {
    /// `None` when `NETPULSE_LOG` is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = lookup(ENV_LOG)?.trim().to_string();
        if filter.is_empty() {
            return None;
        }
        let path = lookup(ENV_LOG_FILE)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE));
        Some(Self { filter, path })
    }
}

/// Install the file subscriber if requested.
///
/// Returns whether a subscriber was installed.
pub fn init_tracing() -> MonitorResult<bool> {
    match LogTarget::from_lookup(|key| std::env::var(key).ok()) {
        Some(target) => install(&target).map(|()| true),
        None => Ok(false),
    }
}

fn install(target: &LogTarget) -> MonitorResult<()> {
    let filter = EnvFilter::try_new(&target.filter)
        .map_err(|e| MonitorError::Logging(format!("invalid {} filter: {}", ENV_LOG, e)))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&target.path)
        .map_err(|e| {
            MonitorError::Logging(format!("cannot open {}: {}", target.path.display(), e))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| MonitorError::Logging(e.to_string()))?;

    tracing::info!(target: "netpulse::monitor", path = %target.path.display(), "Diagnostics enabled");
    Ok(())
}
