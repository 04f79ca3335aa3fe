//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - scripted HEAD responses
//! - [`mock::ScriptedProbe`] - a [`Probe`](crate::probe::Probe) fed from a queue
//! - [`mock::RecordingLogSink`] - captures log lines in memory

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, RecordingLogSink, ScriptedProbe};
pub use reqwest_http::ReqwestHttpClient;
