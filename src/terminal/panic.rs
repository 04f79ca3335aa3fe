//! Panic hook that gives the terminal back before the message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal restore in front of the current panic hook.
///
/// Install before [`TerminalManager::new`](super::TerminalManager::new) so a
/// panic anywhere, including on the polling task, leaves a usable shell.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        tracing::error!(target: "netpulse::monitor", "Panic: {}", info);
        previous(info);
    }));
}
