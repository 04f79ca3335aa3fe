//! Shared connectivity state.
//!
//! [`StateStore`] is the only mutable state shared between the polling task
//! and the UI task. It is handed around as an `Arc<StateStore>`; nothing
//! else keeps a mutable copy.

mod store;

pub use store::{ConnectivityState, SharedState, StateStore};
