//! In-memory log sink for assertions.

use std::sync::{Arc, Mutex, PoisonError};

use crate::events::LogSink;

/// Captures every appended line.
///
/// Cloning shares the underlying buffer, so a test can hand one clone to
/// the reporter and inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines appended so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of lines containing `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines().iter().filter(|line| line.contains(needle)).count()
    }

    /// True if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.count_containing(needle) > 0
    }
}

impl LogSink for RecordingLogSink {
    fn append(&self, line: String) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}
