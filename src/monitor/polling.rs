//! The periodic probe loop.
//!
//! One cycle: optionally narrate the attempt, probe, narrate the outcome,
//! commit the result to the [`StateStore`], report an edge if the value
//! changed, then ask for a redraw. Cycles never overlap; the sleep starts
//! after the previous cycle has finished.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::notifier::RedrawNotifier;
use crate::config::MonitorConfig;
use crate::events::{EventReporter, MonitorEvent, TransitionKind};
use crate::probe::Probe;
use crate::state::StateStore;

/// What a single cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The probe result was committed.
    Committed {
        connected: bool,
        transition: Option<TransitionKind>,
    },
    /// The request could not be built. Nothing was committed or redrawn.
    RequestInvalid,
}

/// Drives the probe on a fixed cadence until cancelled.
pub struct PollingLoop {
    probe: Arc<dyn Probe>,
    store: Arc<StateStore>,
    reporter: EventReporter,
    notifier: RedrawNotifier,
    interval: Duration,
    log_checks: bool,
}

impl PollingLoop {
    pub fn new(
        probe: Arc<dyn Probe>,
        store: Arc<StateStore>,
        reporter: EventReporter,
        notifier: RedrawNotifier,
        config: &MonitorConfig,
    ) -> Self {
        Self {
            probe,
            store,
            reporter,
            notifier,
            interval: config.interval,
            log_checks: config.log_checks,
        }
    }

    /// Run exactly one probe cycle.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let observed = self.store.read_connected();
        tracing::trace!(target: "netpulse::monitor", connected = observed, "Cycle starting");

        if self.log_checks {
            self.reporter.report(&MonitorEvent::Checking {
                url: self.probe.target().to_string(),
            });
        }

        let result = self.probe.check().await;

        if result.is_request_construction_failure() {
            let error = result
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            self.reporter.report(&MonitorEvent::RequestInvalid { error });
            return CycleOutcome::RequestInvalid;
        }

        match (&result.error, result.status_code) {
            (None, Some(status)) if result.succeeded => {
                self.reporter.report(&MonitorEvent::ProbeSucceeded {
                    status,
                    latency: result.latency,
                });
            }
            (error, _) => {
                if let Some(err) = error {
                    tracing::debug!(
                        target: "netpulse::monitor",
                        code = err.error_code(),
                        status = ?result.status_code,
                        "Probe failed"
                    );
                }
                let error = error
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "unknown error".to_string());
                self.reporter.report(&MonitorEvent::ProbeFailed {
                    error,
                    latency: result.latency,
                });
            }
        }

        let connected = result.succeeded;
        let previous = self.store.set_connected(connected);
        let transition = TransitionKind::detect(previous, connected);

        if let Some(kind) = transition {
            tracing::info!(
                target: "netpulse::monitor",
                previous,
                connected,
                "Connectivity changed"
            );
            self.reporter.report(&MonitorEvent::Transition(kind));
        }

        if !self.notifier.request_redraw() {
            tracing::debug!(target: "netpulse::monitor", "Redraw channel closed");
        }

        CycleOutcome::Committed {
            connected,
            transition,
        }
    }

    /// Run cycles until `cancel` fires.
    ///
    /// Cancellation is honoured both while a probe is in flight and while
    /// sleeping; an in-flight probe is abandoned without committing.
    pub async fn run(self, cancel: CancellationToken) {
        tracing::info!(
            target: "netpulse::monitor",
            url = self.probe.target(),
            interval_ms = self.interval.as_millis() as u64,
            "Polling loop started"
        );

        let mut cycles: u64 = 0;
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                outcome = self.run_cycle() => {
                    cycles += 1;
                    tracing::trace!(target: "netpulse::monitor", cycle = cycles, ?outcome, "Cycle finished");
                }
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        tracing::info!(target: "netpulse::monitor", cycles, "Polling loop stopped");
    }

    /// Spawn [`run`](Self::run) on the current runtime.
    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(cancel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{RecordingLogSink, ScriptedProbe};
    use crate::error::ProbeError;

    struct Harness {
        probe: ScriptedProbe,
        store: Arc<StateStore>,
        sink: RecordingLogSink,
        redraw_rx: tokio::sync::mpsc::Receiver<()>,
        polling: PollingLoop,
    }

    fn harness(config: MonitorConfig) -> Harness {
        let probe = ScriptedProbe::new("http://probe.test/204");
        let store = StateStore::shared();
        let sink = RecordingLogSink::new();
        let (notifier, redraw_rx) = RedrawNotifier::channel();
        let polling = PollingLoop::new(
            Arc::new(probe.clone()),
            Arc::clone(&store),
            EventReporter::new(Arc::new(sink.clone())),
            notifier,
            &config,
        );
        Harness {
            probe,
            store,
            sink,
            redraw_rx,
            polling,
        }
    }

    #[tokio::test]
    async fn test_first_success_establishes() {
        let mut h = harness(MonitorConfig::default());
        h.probe.push_success(204, Duration::from_millis(40));

        let outcome = h.polling.run_cycle().await;

        assert_eq!(
            outcome,
            CycleOutcome::Committed {
                connected: true,
                transition: Some(TransitionKind::Established),
            }
        );
        assert!(h.store.read_connected());
        let lines = h.sink.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("Checking http://probe.test/204..."));
        assert!(lines[1].ends_with("[green]Success: Status 204 in 40ms.[-]"));
        assert!(lines[2].ends_with("[yellow]Internet connection established.[-]"));
        assert!(h.redraw_rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_first_failure_has_no_edge() {
        let mut h = harness(MonitorConfig::default());
        h.probe.push_timeout(Duration::from_millis(1000));

        let outcome = h.polling.run_cycle().await;

        assert_eq!(
            outcome,
            CycleOutcome::Committed {
                connected: false,
                transition: None,
            }
        );
        assert!(h
            .sink
            .contains("[red]Failure: request timed out after 1000ms (took 1s)[-]"));
        assert!(!h.sink.contains("Internet connection"));
        // A redraw is still requested on a level cycle.
        assert!(h.redraw_rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_loss_after_success() {
        let h = harness(MonitorConfig::default());
        h.probe
            .push_success(204, Duration::from_millis(10))
            .push_success(204, Duration::from_millis(12))
            .push_failure(
                ProbeError::ConnectionFailed {
                    url: "http://probe.test/204".to_string(),
                    message: "connection refused".to_string(),
                },
                Duration::from_millis(3),
            );

        h.polling.run_cycle().await;
        let second = h.polling.run_cycle().await;
        let third = h.polling.run_cycle().await;

        assert_eq!(
            second,
            CycleOutcome::Committed {
                connected: true,
                transition: None,
            }
        );
        assert_eq!(
            third,
            CycleOutcome::Committed {
                connected: false,
                transition: Some(TransitionKind::Lost),
            }
        );
        assert_eq!(h.sink.count_containing("Internet connection established."), 1);
        assert_eq!(h.sink.count_containing("Internet connection lost."), 1);
    }

    #[tokio::test]
    async fn test_rejected_status_reports_failure() {
        let h = harness(MonitorConfig::default().with_log_checks(false));
        h.probe.push(crate::probe::ProbeResult::rejected(
            &crate::traits::Response::new(503),
            Duration::from_millis(8),
        ));

        h.polling.run_cycle().await;

        let lines = h.sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[red]Failure: unexpected status (HTTP 503) (took 8ms)[-]"));
    }

    #[tokio::test]
    async fn test_quiet_mode_skips_checking_line() {
        let h = harness(MonitorConfig::default().with_log_checks(false));
        h.probe.push_success(204, Duration::from_millis(5));

        h.polling.run_cycle().await;

        assert!(!h.sink.contains("Checking"));
        assert_eq!(h.sink.lines().len(), 2);
    }

    #[tokio::test]
    async fn test_request_invalid_commits_nothing() {
        let mut h = harness(MonitorConfig::default());
        h.store.set_connected(true);
        h.probe.push_failure(
            ProbeError::InvalidRequest {
                url: "::bad::".to_string(),
                message: "parse \"::bad::\": relative URL without a base".to_string(),
            },
            Duration::ZERO,
        );

        let outcome = h.polling.run_cycle().await;

        assert_eq!(outcome, CycleOutcome::RequestInvalid);
        assert!(h.store.read_connected());
        assert!(h.sink.contains("[red]FATAL: Could not create request: "));
        assert!(!h.sink.contains("Internet connection"));
        assert!(h.redraw_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_cancelled_loop_exits() {
        let h = harness(MonitorConfig::default().with_interval(Duration::from_millis(10)));
        let cancel = CancellationToken::new();
        let handle = h.polling.spawn(cancel.clone());

        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();

        let joined = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(joined.is_ok(), "loop did not stop after cancellation");
        assert!(h.probe.calls() >= 1);
    }
}
