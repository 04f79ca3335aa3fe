//! The colored connectivity indicator.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::theme::status_color;

pub const BLOCK_WIDTH: u16 = 5;
pub const BLOCK_HEIGHT: u16 = 3;

/// A solid 5x3 block centered in its area, green or red.
#[derive(Debug, Clone, Copy)]
pub struct StatusBlock {
    connected: bool,
}

impl StatusBlock {
    pub fn new(connected: bool) -> Self {
        Self { connected }
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl Widget for StatusBlock {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = centered_rect(area, BLOCK_WIDTH, BLOCK_HEIGHT);
        buf.set_style(block, Style::default().bg(status_color(self.connected)));
    }
}
