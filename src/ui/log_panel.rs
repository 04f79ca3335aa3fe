//! Bordered, scrollable view over the [`LogBuffer`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::theme::{named_color, COLOR_BORDER, COLOR_DIM, COLOR_TITLE};
use crate::log_buffer::LogBuffer;
use crate::markup;

pub const LOG_PANEL_TITLE: &str = "Logs (Press 'l' to hide)";

pub struct LogPanel<'a> {
    log: &'a LogBuffer,
}

impl<'a> LogPanel<'a> {
    pub fn new(log: &'a LogBuffer) -> Self {
        Self { log }
    }
}

/// One markup line as styled spans.
pub fn styled_line(raw: &str) -> Line<'static> {
    let spans: Vec<Span<'static>> = markup::parse(raw)
        .into_iter()
        .map(|segment| match segment.color {
            Some(color) => Span::styled(segment.text, Style::default().fg(named_color(color))),
            None => Span::raw(segment.text),
        })
        .collect();
    Line::from(spans)
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered()
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(Line::from(LOG_PANEL_TITLE).fg(COLOR_TITLE));

        if !self.log.is_following() {
            block = block.title_bottom(
                Line::from(format!(
                    " {} newer lines (End to follow) ",
                    self.log.scroll_offset()
                ))
                .fg(COLOR_DIM)
                .right_aligned(),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .log
            .visible(usize::from(inner.height))
            .map(styled_line)
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
