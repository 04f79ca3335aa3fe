//! Redraw requests from the polling loop to the UI task.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Handle the polling loop uses to ask for a repaint.
///
/// Backed by a channel of capacity one. A request made while another is
/// still pending is folded into it, so a slow UI never stalls the loop and
/// never sees a backlog of repaints.
#[derive(Debug, Clone)]
pub struct RedrawNotifier {
    tx: mpsc::Sender<()>,
}

impl RedrawNotifier {
    pub fn new(tx: mpsc::Sender<()>) -> Self {
        Self { tx }
    }

    /// Create a notifier together with the receiver the UI selects on.
    pub fn channel() -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        (Self::new(tx), rx)
    }

    /// Request a redraw without waiting.
    ///
    /// Returns `false` only when the UI side is gone.
    pub fn request_redraw(&self) -> bool {
        match self.tx.try_send(()) {
            Ok(()) => true,
            Err(TrySendError::Full(())) => {
                tracing::trace!(target: "netpulse::monitor", "Redraw already pending");
                true
            }
            Err(TrySendError::Closed(())) => false,
        }
    }
}
