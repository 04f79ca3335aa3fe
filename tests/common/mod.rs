//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use netpulse::adapters::mock::{RecordingLogSink, ScriptedProbe};
use netpulse::app::App;
use netpulse::config::MonitorConfig;
use netpulse::events::EventReporter;
use netpulse::monitor::{PollingLoop, RedrawNotifier};
use netpulse::state::{SharedState, StateStore};

pub const TEST_URL: &str = "http://probe.test/generate_204";

/// A polling loop wired to a scripted probe and a recording sink.
pub struct MonitorHarness {
    pub probe: ScriptedProbe,
    pub store: SharedState,
    pub sink: RecordingLogSink,
    pub redraw_rx: mpsc::Receiver<()>,
    pub polling: PollingLoop,
}

impl MonitorHarness {
    pub fn new(config: MonitorConfig) -> Self {
        let probe = ScriptedProbe::new(TEST_URL);
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
        Self {
            probe,
            store,
            sink,
            redraw_rx,
            polling,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(MonitorConfig::default().with_url(TEST_URL))
    }

    /// Drain pending redraw requests, returning how many were queued.
    pub fn take_redraws(&mut self) -> usize {
        let mut count = 0;
        while self.redraw_rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

/// An [`App`] over a fresh store, logging into a recording sink.
pub fn test_app() -> (App, RecordingLogSink) {
    let sink = RecordingLogSink::new();
    let app = App::new(
        StateStore::shared(),
        EventReporter::new(Arc::new(sink.clone())),
        100,
    );
    (app, sink)
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
