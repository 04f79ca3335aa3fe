//! Result type alias for netpulse startup operations.

use super::monitor_error::MonitorError;

/// Type alias for Results using MonitorError.
pub type MonitorResult<T> = Result<T, MonitorError>;
