//! Formatting and forwarding of monitor events.
//!
//! [`EventReporter`] turns a [`MonitorEvent`] into one timestamped,
//! color-marked line and hands it to a [`LogSink`]. The same event is also
//! emitted through `tracing` for diagnostics.

use chrono::{DateTime, Local};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::types::{MonitorEvent, Severity};
use crate::markup;

/// Timestamp prefix of every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Destination for formatted log lines.
///
/// Implementations must not block: the polling loop calls `append` on its
/// hot path. Concurrent callers must each see their line stored intact.
pub trait LogSink: Send + Sync {
    fn append(&self, line: String);
}

/// Sink backed by an unbounded channel drained by the UI task.
///
/// Sending never blocks. Once the receiver is gone lines are dropped.
#[derive(Debug, Clone)]
pub struct ChannelLogSink {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelLogSink {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl LogSink for ChannelLogSink {
    fn append(&self, line: String) {
        if self.tx.send(line).is_err() {
            tracing::trace!(target: "netpulse::monitor", "Log channel closed, dropping line");
        }
    }
}

/// Formats events and forwards them to the sink. Cheap to clone.
#[derive(Clone)]
pub struct EventReporter {
    sink: Arc<dyn LogSink>,
}

impl std::fmt::Debug for EventReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventReporter").finish_non_exhaustive()
    }
}

impl EventReporter {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Format and forward one event, stamped with the current local time.
    pub fn report(&self, event: &MonitorEvent) {
        self.report_at(event, Local::now());
    }

    /// Format and forward one event with an explicit timestamp.
    pub fn report_at(&self, event: &MonitorEvent, at: DateTime<Local>) {
        trace_event(event);
        self.sink.append(format_line(event, at));
    }
}

/// `YYYY/MM/DD HH:MM:SS <colored message>`
pub fn format_line(event: &MonitorEvent, at: DateTime<Local>) -> String {
    format!(
        "{} {}",
        at.format(TIMESTAMP_FORMAT),
        markup::colorize(event.severity().color(), &event.message())
    )
}

fn trace_event(event: &MonitorEvent) {
    let message = event.message();
    let kind = event.kind();

    match event.severity() {
        Severity::Info | Severity::Success | Severity::Notice => {
            tracing::info!(target: "netpulse::monitor", event_type = kind, "{}", message);
        }
        Severity::Warning => {
            tracing::warn!(target: "netpulse::monitor", event_type = kind, "{}", message);
        }
        Severity::Error => {
            tracing::error!(target: "netpulse::monitor", event_type = kind, "{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::RecordingLogSink;
    use crate::events::TransitionKind;
    use chrono::TimeZone;
    use std::time::Duration;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single().unwrap()
    }

    #[test]
    fn test_format_line_plain() {
        let line = format_line(
            &MonitorEvent::Checking {
                url: "http://example.com/".to_string(),
            },
            fixed_time(),
        );
        assert_eq!(line, "2024/01/02 03:04:05 Checking http://example.com/...");
    }

    #[test]
    fn test_format_line_colored() {
        let success = format_line(
            &MonitorEvent::ProbeSucceeded {
                status: 204,
                latency: Duration::from_millis(12),
            },
            fixed_time(),
        );
        assert_eq!(success, "2024/01/02 03:04:05 [green]Success: Status 204 in 12ms.[-]");

        let lost = format_line(
            &MonitorEvent::Transition(TransitionKind::Lost),
            fixed_time(),
        );
        assert_eq!(lost, "2024/01/02 03:04:05 [yellow]Internet connection lost.[-]");
    }

    #[test]
    fn test_report_forwards_one_line() {
        let sink = RecordingLogSink::new();
        let reporter = EventReporter::new(Arc::new(sink.clone()));

        reporter.report(&MonitorEvent::RequestInvalid {
            error: "bad url".to_string(),
        });

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[red]FATAL: Could not create request: bad url[-]"));
    }

    #[tokio::test]
    async fn test_channel_sink_delivers_in_order() {
        let (sink, mut rx) = ChannelLogSink::channel();
        sink.append("first".to_string());
        sink.append("second".to_string());

        assert_eq!(rx.recv().await.as_deref(), Some("first"));
        assert_eq!(rx.recv().await.as_deref(), Some("second"));
    }

    #[test]
    fn test_channel_sink_after_receiver_dropped() {
        let (sink, rx) = ChannelLogSink::channel();
        drop(rx);
        // Must not panic or block.
        sink.append("lost".to_string());
    }
}
