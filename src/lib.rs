//! netpulse - a terminal connectivity monitor
//!
//! A background [`monitor::PollingLoop`] probes a fixed URL on a fixed
//! cadence, commits each result to a shared [`state::StateStore`] and
//! narrates what happened through an [`events::EventReporter`]. The
//! foreground [`app`] draws a green or red block and an optional log panel.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod log_buffer;
pub mod logging;
pub mod markup;
pub mod monitor;
pub mod probe;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
