//! Error handling for netpulse.
//!
//! Two kinds of failure exist and they are handled very differently:
//!
//! - **Probe errors** ([`ProbeError`]) are expected. DNS failures, refused
//!   connections, timeouts and non-2xx responses are data: they drive the
//!   connectivity state to `false` and are narrated in the log panel. They
//!   never leave the polling loop.
//! - **Monitor errors** ([`MonitorError`]) are startup failures (bad
//!   configuration, HTTP client construction, terminal initialization).
//!   They are surfaced to the operator and end the process with a
//!   non-zero exit code.
//!
//! | Variant | Source | Effect |
//! |---------|--------|--------|
//! | `ProbeError::InvalidRequest` | malformed target URL | FATAL-labeled log line, cycle skipped |
//! | other `ProbeError` | network | `connected = false`, warning line |
//! | `MonitorError::*` | startup | process exits |

mod monitor_error;
mod network;
mod result;

pub use monitor_error::MonitorError;
pub use network::ProbeError;
pub use result::MonitorResult;
