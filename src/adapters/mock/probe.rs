//! Scripted probe for driving the polling loop in tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::error::ProbeError;
use crate::probe::{Probe, ProbeResult};

/// A [`Probe`] that replays queued results.
///
/// When the queue runs dry every further check fails with
/// `ProbeError::Other`, which keeps a runaway loop visibly disconnected.
#[derive(Debug, Clone)]
pub struct ScriptedProbe {
    target: String,
    results: Arc<Mutex<VecDeque<ProbeResult>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProbe {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            results: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queue an arbitrary result.
    pub fn push(&self, result: ProbeResult) -> &Self {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(result);
        self
    }

    /// Queue a 2xx answer.
    pub fn push_success(&self, status: u16, latency: Duration) -> &Self {
        self.push(ProbeResult::success(status, latency))
    }

    /// Queue a failed check.
    pub fn push_failure(&self, error: ProbeError, latency: Duration) -> &Self {
        self.push(ProbeResult::failure(error, latency))
    }

    /// Queue a timeout of the given length.
    pub fn push_timeout(&self, timeout: Duration) -> &Self {
        self.push_failure(ProbeError::Timeout { timeout }, timeout)
    }

    /// How many checks have been performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Probe for ScriptedProbe {
    fn target(&self) -> &str {
        &self.target
    }

    async fn check(&self) -> ProbeResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        next.unwrap_or_else(|| {
            ProbeResult::failure(
                ProbeError::Other {
                    message: "no scripted result".to_string(),
                },
                Duration::ZERO,
            )
        })
    }
}
