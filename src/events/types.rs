//! Event and severity types narrated by the monitor.

use std::time::Duration;

use crate::markup::NamedColor;

/// Severity of a log line. Each severity maps to one color hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine progress ("Checking ...")
    Info,
    /// A probe succeeded
    Success,
    /// A probe failed (expected, non-fatal)
    Warning,
    /// The request could not even be built
    Error,
    /// State transitions and UI notices
    Notice,
}

impl Severity {
    pub fn color(self) -> Option<NamedColor> {
        match self {
            Severity::Info => None,
            Severity::Success => Some(NamedColor::Green),
            Severity::Warning | Severity::Error => Some(NamedColor::Red),
            Severity::Notice => Some(NamedColor::Yellow),
        }
    }
}

/// Direction of a connectivity edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Established,
    Lost,
}

impl TransitionKind {
    /// Edge between two consecutive committed values; `None` for a level.
    pub fn detect(previous: bool, current: bool) -> Option<Self> {
        match (previous, current) {
            (false, true) => Some(TransitionKind::Established),
            (true, false) => Some(TransitionKind::Lost),
            _ => None,
        }
    }
}

/// Everything the monitor reports to the log sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// A probe is about to be sent
    Checking { url: String },
    /// A probe got a 2xx answer
    ProbeSucceeded { status: u16, latency: Duration },
    /// A probe failed for a network reason
    ProbeFailed { error: String, latency: Duration },
    /// The probe request could not be constructed
    RequestInvalid { error: String },
    /// Connectivity changed between cycles. The log line's timestamp
    /// records when.
    Transition(TransitionKind),
    /// The operator opened the log panel
    LogPanelShown,
}

impl MonitorEvent {
    pub fn severity(&self) -> Severity {
        match self {
            MonitorEvent::Checking { .. } => Severity::Info,
            MonitorEvent::ProbeSucceeded { .. } => Severity::Success,
            MonitorEvent::ProbeFailed { .. } => Severity::Warning,
            MonitorEvent::RequestInvalid { .. } => Severity::Error,
            MonitorEvent::Transition(_) | MonitorEvent::LogPanelShown => Severity::Notice,
        }
    }

    /// Human-readable text, without color markup or timestamp.
    pub fn message(&self) -> String {
        match self {
            MonitorEvent::Checking { url } => format!("Checking {}...", url),
            MonitorEvent::ProbeSucceeded { status, latency } => {
                format!("Success: Status {} in {}.", status, format_latency(*latency))
            }
            MonitorEvent::ProbeFailed { error, latency } => {
                format!("Failure: {} (took {})", error, format_latency(*latency))
            }
            MonitorEvent::RequestInvalid { error } => {
                format!("FATAL: Could not create request: {}", error)
            }
            MonitorEvent::Transition(kind) => match kind {
                TransitionKind::Established => "Internet connection established.".to_string(),
                TransitionKind::Lost => "Internet connection lost.".to_string(),
            },
            MonitorEvent::LogPanelShown => "Log view enabled.".to_string(),
        }
    }

    /// Short name used as a structured tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            MonitorEvent::Checking { .. } => "checking",
            MonitorEvent::ProbeSucceeded { .. } => "probe_succeeded",
            MonitorEvent::ProbeFailed { .. } => "probe_failed",
            MonitorEvent::RequestInvalid { .. } => "request_invalid",
            MonitorEvent::Transition(TransitionKind::Established) => "established",
            MonitorEvent::Transition(TransitionKind::Lost) => "lost",
            MonitorEvent::LogPanelShown => "log_panel_shown",
        }
    }
}

/// Render a latency the way an operator reads it: `250ms`, `1.5s`, `2s`.
pub fn format_latency(latency: Duration) -> String {
    let millis = latency.as_millis();
    if millis == 0 {
        return "0s".to_string();
    }
    if millis < 1000 {
        return format!("{}ms", millis);
    }

    let fraction = format!("{:03}", millis % 1000);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}s", millis / 1000)
    } else {
        format!("{}.{}s", millis / 1000, fraction)
    }
}
