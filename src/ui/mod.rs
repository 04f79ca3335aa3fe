//! Rendering for the monitor screen.
//!
//! The main area holds the status block, inset by a tenth of the area on
//! every side. When the log panel is visible it takes the bottom
//! [`LOG_PANEL_HEIGHT`] rows.

mod log_panel;
mod status_block;
mod theme;

pub use log_panel::{styled_line, LogPanel, LOG_PANEL_TITLE};
pub use status_block::{centered_rect, StatusBlock, BLOCK_HEIGHT, BLOCK_WIDTH};
pub use theme::{named_color, status_color, COLOR_CONNECTED, COLOR_DISCONNECTED};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::App;

/// Rows taken by the log panel, border included.
pub const LOG_PANEL_HEIGHT: u16 = 15;

/// Draw one frame from the current state snapshot.
///
/// The log panel's inner height is fed back into the buffer so scrolling
/// matches what is actually on screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let state = app.store.snapshot();
    let area = frame.area();

    let main = if state.log_panel_visible {
        let [main, logs] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANEL_HEIGHT)])
                .areas(area);
        app.log
            .set_viewport(usize::from(logs.height.saturating_sub(2)));
        frame.render_widget(LogPanel::new(&app.log), logs);
        main
    } else {
        area
    };

    frame.render_widget(StatusBlock::new(state.connected), inset(main));
}

/// The middle 8/10 of `area` on both axes.
fn inset(area: Rect) -> Rect {
    let weights = [Constraint::Fill(1), Constraint::Fill(8), Constraint::Fill(1)];
    let [_, column, _] = Layout::horizontal(weights).areas(area);
    let [_, middle, _] = Layout::vertical(weights).areas(column);
    middle
}
