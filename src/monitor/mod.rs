//! Background monitoring.
//!
//! [`PollingLoop`] runs on its own task, probes on a fixed cadence, commits
//! results to the shared state and signals the UI through a
//! [`RedrawNotifier`]. It stops when its `CancellationToken` fires.

mod notifier;
mod polling;

pub use notifier::RedrawNotifier;
pub use polling::{CycleOutcome, PollingLoop};
