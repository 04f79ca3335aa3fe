//! Mock implementations for testing.
//!
//! These let the polling loop and the probe be exercised without network
//! access or a terminal.

pub mod http;
pub mod log_sink;
pub mod probe;

pub use http::{MockHttpClient, MockResponse};
pub use log_sink::RecordingLogSink;
pub use probe::ScriptedProbe;
