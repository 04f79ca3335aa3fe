//! Monitor events and their narration.
//!
//! - [`MonitorEvent`] - what happened (probe attempt, outcome, edge, UI notice)
//! - [`Severity`] - how loud it is; maps to one color hint
//! - [`EventReporter`] - formats an event into a log line and forwards it
//! - [`LogSink`] - where lines go; [`ChannelLogSink`] feeds the UI task

mod reporter;
mod types;

pub use reporter::{format_line, ChannelLogSink, EventReporter, LogSink, TIMESTAMP_FORMAT};
pub use types::{format_latency, MonitorEvent, Severity, TransitionKind};
